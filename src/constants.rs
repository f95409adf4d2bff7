/// Pursuit and rendering tuning constants.
///
/// Values are in viewport CSS pixels and seconds unless noted otherwise.
// Fraction of the remaining distance closed per second; saturates at 1 so
// any frame with dt >= 1 / PURSUIT_SPEED snaps straight onto the target.
pub const PURSUIT_SPEED: f32 = 10.0;

// Falloff strength handed to the shader
pub const DEFAULT_STRENGTH: f32 = 1.2;
pub const STRENGTH_STEP: f32 = 0.2;

// Full-screen quad as two triangles (clip space)
pub const QUAD_VERTICES: [[f32; 2]; 6] = [
    [-1.0, -1.0],
    [1.0, -1.0],
    [-1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [1.0, 1.0],
];

pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

// Page wiring
pub const CANVAS_SELECTOR: &str = "canvas";
pub const DEBUG_ELEMENT_ID: &str = "debug";
pub const REVEAL_CLASS: &str = "before";
pub const DEBUG_CURSOR: &str = "crosshair";
pub const HIDDEN_CURSOR: &str = "none";
