pub mod pursuit;

pub use pursuit::*;

// Shader bundled as a string constant
pub static CHROMA_WGSL: &str = include_str!("../../shaders/chroma.wgsl");
