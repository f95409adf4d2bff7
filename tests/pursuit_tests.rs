// Host-side tests for the pursuit integrator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod pursuit {
        include!("../src/core/pursuit.rs");
    }
    pub use pursuit::*;
}

use crate::core::*;
use glam::Vec2;

fn state(current: Vec2, target: Vec2) -> PursuitState {
    PursuitState {
        current,
        target,
        ..PursuitState::default()
    }
}

#[test]
fn two_half_steps_close_three_quarters() {
    let mut s = state(Vec2::ZERO, Vec2::new(100.0, 0.0));

    s.step(0.05);
    assert_eq!(s.current, Vec2::new(50.0, 0.0));

    s.step(0.05);
    assert_eq!(s.current, Vec2::new(75.0, 0.0));
}

#[test]
fn zero_or_negative_dt_does_not_move() {
    let start = Vec2::new(12.0, -7.5);
    let mut s = state(start, Vec2::new(300.0, 200.0));

    s.step(0.0);
    assert_eq!(s.current, start);

    s.step(-0.25);
    assert_eq!(s.current, start);
}

#[test]
fn nan_dt_does_not_move() {
    let start = Vec2::new(1.0, 2.0);
    let mut s = state(start, Vec2::new(10.0, 20.0));
    s.step(f32::NAN);
    assert_eq!(s.current, start);
}

#[test]
fn large_dt_snaps_exactly_onto_target() {
    // Off-axis target so cos/sin rounding would show if we did not snap
    let target = Vec2::new(333.3, 127.9);
    for dt in [0.1_f32, 0.5, 3.0, f32::INFINITY] {
        let mut s = state(Vec2::new(-41.0, 5.5), target);
        s.step(dt);
        assert_eq!(s.current, target, "dt={}", dt);
    }
}

#[test]
fn startup_delay_is_absorbed_by_clamp() {
    // First frame after a long bootstrap behaves like any saturated step
    let mut s = state(Vec2::ZERO, Vec2::new(640.0, 360.0));
    let sample = s.step(12.0);
    assert_eq!(s.current, s.target);
    assert!((sample.distance - Vec2::new(640.0, 360.0).length()).abs() < 1e-3);
}

#[test]
fn distance_strictly_decreases_until_converged() {
    let mut s = state(Vec2::new(5.0, 900.0), Vec2::new(700.0, 40.0));
    let mut prev = s.sample().distance;
    for _ in 0..40 {
        s.step(1.0 / 60.0);
        let d = s.sample().distance;
        assert!(d < prev, "distance went from {} to {}", prev, d);
        prev = d;
    }
    // Then a saturated step lands on the target and stays there
    s.step(0.2);
    assert_eq!(s.current, s.target);
    s.step(1.0 / 60.0);
    assert_eq!(s.current, s.target);
}

#[test]
fn never_overshoots_for_any_dt() {
    let target = Vec2::new(-220.0, 415.0);
    for dt in [0.0_f32, 0.001, 0.016, 0.033, 0.05, 0.0999, 0.1, 0.25] {
        let mut s = state(Vec2::new(80.0, -60.0), target);
        let before = s.sample().distance;
        s.step(dt);
        let after = s.sample().distance;
        assert!(after <= before, "dt={} before={} after={}", dt, before, after);
        // Still on the segment between start and target
        let moved = (s.current - Vec2::new(80.0, -60.0)).length();
        assert!(moved <= before + 1e-3, "dt={} moved={}", dt, moved);
    }
}

#[test]
fn moves_along_the_bearing() {
    let mut s = state(Vec2::ZERO, Vec2::new(30.0, 40.0));
    let sample = s.step(0.05);
    assert!((sample.distance - 50.0).abs() < 1e-4);
    assert!((sample.bearing - 40.0_f32.atan2(30.0)).abs() < 1e-6);
    assert!((s.current.x - 15.0).abs() < 1e-4);
    assert!((s.current.y - 20.0).abs() < 1e-4);
}

#[test]
fn coincident_points_have_zero_bearing() {
    let p = Vec2::new(250.0, 250.0);
    let mut s = state(p, p);
    let sample = s.step(0.05);
    assert_eq!(sample.distance, 0.0);
    assert_eq!(sample.bearing, 0.0);
    assert_eq!(s.current, p);

    // Negative zero deltas too (atan2(-0, -0) would be -pi)
    assert_eq!(bearing(Vec2::new(-0.0, -0.0)), 0.0);
}

#[test]
fn step_fraction_saturates() {
    assert_eq!(step_fraction(0.05, 10.0), 0.5);
    assert_eq!(step_fraction(0.1, 10.0), 1.0);
    assert_eq!(step_fraction(2.0, 10.0), 1.0);
    assert_eq!(step_fraction(-1.0, 10.0), 0.0);
    assert_eq!(step_fraction(f32::NAN, 10.0), 0.0);
}

#[test]
fn default_state_uses_tuning_constants() {
    let s = PursuitState::default();
    assert_eq!(s.strength, constants::DEFAULT_STRENGTH);
    assert_eq!(s.speed, constants::PURSUIT_SPEED);
    assert_eq!(s.current, Vec2::ZERO);
}
