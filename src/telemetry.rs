use crate::core::{PursuitSample, PursuitState};
use glam::Vec2;
use std::fmt;

/// Read-only view of the integrator for the debug overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TelemetrySnapshot {
    pub fps: f32,
    pub target: Vec2,
    pub current: Vec2,
    pub distance: f32,
    /// Degrees
    pub bearing: f32,
}

impl TelemetrySnapshot {
    pub fn capture(state: &PursuitState, sample: PursuitSample, dt_sec: f32) -> Self {
        Self {
            fps: (1.0 / dt_sec).round(),
            target: state.target,
            current: state.current,
            distance: sample.distance,
            bearing: sample.bearing.to_degrees(),
        }
    }
}

impl fmt::Display for TelemetrySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fps.is_finite() {
            writeln!(f, "fps: {}", self.fps)?;
        } else {
            writeln!(f, "fps: --")?;
        }
        writeln!(f, "mouse: {}", format_point(self.target))?;
        writeln!(f, "pos: {}", format_point(self.current))?;
        writeln!(f, "distance: {}", num_format(self.distance as f64))?;
        write!(f, "bearing: {}º", num_format(self.bearing as f64))
    }
}

/// Fixed two decimals, zero-padded to six characters, explicit sign.
///
/// `3.14159` → `+003.14`, `-1.0` → `-001.00`, non-finite → `NaN`.
pub fn num_format(value: f64) -> String {
    if !value.is_finite() {
        return "NaN".to_string();
    }
    let sign = if value < 0.0 { '-' } else { '+' };
    // Ties round away from zero; `{:.2}` alone would round them to even
    let rounded = (value.abs() * 100.0).round() / 100.0;
    format!("{}{:0>6}", sign, format!("{:.2}", rounded))
}

#[inline]
pub fn format_point(p: Vec2) -> String {
    format!("({}, {})", num_format(p.x as f64), num_format(p.y as f64))
}
