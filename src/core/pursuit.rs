use crate::constants::{DEFAULT_STRENGTH, PURSUIT_SPEED};
use glam::Vec2;

/// Distance and bearing from the current position to the target, measured
/// before the integrator moves.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PursuitSample {
    pub distance: f32,
    /// Radians, `atan2(dy, dx)`. Zero when the points coincide.
    pub bearing: f32,
}

/// State shared by input reconciliation, integration and uniform sync.
///
/// `target` and `current` live in viewport pixels with the origin at the
/// bottom-left, which is what the effect shader expects.
#[derive(Clone, Debug)]
pub struct PursuitState {
    pub target: Vec2,
    pub current: Vec2,
    pub strength: f32,
    pub speed: f32,
}

impl Default for PursuitState {
    fn default() -> Self {
        Self {
            target: Vec2::ZERO,
            current: Vec2::ZERO,
            strength: DEFAULT_STRENGTH,
            speed: PURSUIT_SPEED,
        }
    }
}

impl PursuitState {
    pub fn sample(&self) -> PursuitSample {
        let delta = self.target - self.current;
        PursuitSample {
            distance: delta.length(),
            bearing: bearing(delta),
        }
    }

    /// Advance `current` toward `target` by `dt_sec` seconds of pursuit.
    ///
    /// The step covers `clamp(dt_sec * speed, 0, 1)` of the remaining
    /// distance, so it never overshoots and never moves for `dt_sec <= 0`.
    pub fn step(&mut self, dt_sec: f32) -> PursuitSample {
        let sample = self.sample();
        let fraction = step_fraction(dt_sec, self.speed);
        if fraction >= 1.0 {
            self.current = self.target;
        } else if fraction > 0.0 {
            let dir = Vec2::from_angle(sample.bearing);
            self.current += dir * sample.distance * fraction;
        }
        sample
    }
}

#[inline]
pub fn step_fraction(dt_sec: f32, speed: f32) -> f32 {
    let f = dt_sec * speed;
    if f.is_nan() {
        return 0.0;
    }
    f.clamp(0.0, 1.0)
}

#[inline]
pub fn bearing(delta: Vec2) -> f32 {
    if delta.x == 0.0 && delta.y == 0.0 {
        0.0
    } else {
        delta.y.atan2(delta.x)
    }
}
