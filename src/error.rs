use thiserror::Error;

/// Failures at the rendering boundary.
///
/// Every variant is fatal: bootstrap errors end startup, and once the
/// context is lost every later draw keeps reporting `ContextLost`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("WebGPU not supported: no adapter")]
    NoAdapter,
    #[error("could not acquire GPU device: {0}")]
    Device(String),
    #[error("could not create canvas surface: {0}")]
    Surface(String),
    #[error("could not compile shader\n\n{0}")]
    Compile(String),
    #[error("shader program did not link successfully\n\n{0}")]
    Link(String),
    #[error("GPU context has been lost")]
    ContextLost,
    #[error("could not acquire frame: {0}")]
    Frame(String),
}
