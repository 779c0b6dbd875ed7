//! Closed-form trajectories for the animated primitives

use crate::sdf::smoothstep;
use glam::Vec3;
use std::f32::consts::PI;

/// Componentwise `cos(amplitudes * t + phases)`
pub fn trajectory(t: f32, amplitudes: Vec3, phases: Vec3) -> Vec3 {
    let angle = amplitudes * t + phases;
    Vec3::new(angle.x.cos(), angle.y.cos(), angle.z.cos())
}

/// Inward spiral in the XZ plane that restarts every 2 time units.
///
/// The radius shrinks linearly from `r` to zero over each period while the
/// angle grows exponentially.
pub fn spiral_trajectory(t: f32, r: f32, offset: f32) -> Vec3 {
    // GLSL mod: always in [0, 2) even for negative t
    let u = t.rem_euclid(2.0) / 2.0;
    let theta = 2.0 * PI * u.exp() + offset;
    r * (1.0 - u) * Vec3::new(theta.cos(), 0.0, theta.sin())
}

/// Wobble amplitude of the small orbiting sphere
pub fn satellite_amplitude(t: f32) -> f32 {
    0.1 * ((1.0 + t.sin()) * (1.0 + (1.6 * t + 4.2).sin()) + 1.0)
}

/// Centre of the small sphere that drifts through the core
pub fn satellite_position(t: f32) -> Vec3 {
    let phases = Vec3::new(t, 0.0, 0.0);
    satellite_amplitude(t) * trajectory(2.0 * t, Vec3::new(1.2, 2.73, 0.983), phases)
}

/// Radius of the breathing core sphere
pub fn core_radius(t: f32) -> f32 {
    1.8 + 0.2 * t.sin()
}

/// Orange cube: wide orbit with a fast vertical bob
pub fn orange_cube_position(t: f32) -> Vec3 {
    4.0 * Vec3::new((0.25 * PI * t).sin(), 0.1 * (4.0 * t).cos(), (0.25 * PI * t).cos())
}

/// Blue cube: tighter orbit, raised and bobbing
pub fn blue_cube_position(t: f32) -> Vec3 {
    3.0 * Vec3::new(
        (-0.25 * PI * t).cos(),
        0.2 + 0.1 * (4.0 * t).cos(),
        (0.25 * PI * t).sin(),
    )
}

/// Teal cube: faster orbit that hops between two heights
pub fn teal_cube_position(t: f32) -> Vec3 {
    3.0 * Vec3::new(
        (0.4 * PI * t).cos(),
        -0.5 + smoothstep(4.0 + 4.0 * t.sin(), 0.0, 1.0),
        (0.4 * PI * t).sin(),
    )
}
