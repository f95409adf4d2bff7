use crate::error::RenderError;
use glam::Vec2;

/// Uniform block read by `shaders/chroma.wgsl` each draw.
///
/// Layout matches the WGSL struct: two vec2s, the falloff scalar, then
/// padding up to a 16-byte multiple.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct EffectUniforms {
    pub resolution: [f32; 2],
    pub pointer: [f32; 2],
    pub falloff: f32,
    pub _pad: [f32; 3],
}

impl EffectUniforms {
    pub fn new(resolution: (u32, u32), pointer: Option<Vec2>, falloff: f32) -> Self {
        // NaN pointer tells the shader there is nothing to chase yet
        let pointer = pointer.map_or([f32::NAN; 2], |p| p.to_array());
        Self {
            resolution: [resolution.0 as f32, resolution.1 as f32],
            pointer,
            falloff,
            _pad: [0.0; 3],
        }
    }
}

/// Drawable target for the effect: the GPU state in the browser, a
/// recording fake in tests.
pub trait EffectSurface {
    /// Backing store size in device pixels.
    fn pixel_size(&self) -> (u32, u32);
    fn write_uniforms(&mut self, uniforms: &EffectUniforms) -> Result<(), RenderError>;
    fn draw(&mut self) -> Result<(), RenderError>;
}

/// Push resolution, pointer and falloff into the surface's program.
pub fn sync_uniforms<S: EffectSurface + ?Sized>(
    surface: &mut S,
    pointer: Option<Vec2>,
    strength: f32,
) -> Result<(), RenderError> {
    let uniforms = EffectUniforms::new(surface.pixel_size(), pointer, strength);
    surface.write_uniforms(&uniforms)
}
