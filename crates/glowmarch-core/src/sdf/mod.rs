//! Signed Distance Functions (SDF) for the scene geometry
//!
//! SDFs represent shapes as mathematical functions that return the distance
//! from any point in space to the nearest surface. Negative values are inside,
//! positive values are outside, and zero is exactly on the surface.
//!
//! Scene evaluation carries a [`Material`] next to the distance so that the
//! operand winning a union also decides how the surface is shaded.
//!
//! ## Example
//!
//! ```rust,ignore
//! use glowmarch_core::sdf::*;
//!
//! let ball = Sample::new(Material::Glow, sphere_distance(p, 1.8));
//! let box1 = Sample::new(Material::Lit(Vec3::new(0.8, 0.4, 0.0)), cube_distance(q, 0.5));
//! let nearest = union_hard(ball, box1);
//! ```

pub mod operations;
pub mod primitives;
pub mod transforms;

use glam::Vec3;

/// The core SDF trait - any type that can compute distance from a point
pub trait Sdf: Send + Sync {
    /// Calculate the signed distance from point `p` to the surface.
    ///
    /// - Returns negative values for points inside the shape
    /// - Returns positive values for points outside the shape
    /// - Returns zero for points exactly on the surface
    fn distance(&self, p: Vec3) -> f32;
}

/// How a surface reacts once a ray reaches it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Self-luminous: brightness depends on how many steps the ray took,
    /// not on lighting
    Glow,
    /// Diffusely lit surface with the given RGB albedo
    Lit(Vec3),
}

/// Result of evaluating the scene at one point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub material: Material,
    pub distance: f32,
}

impl Sample {
    pub fn new(material: Material, distance: f32) -> Self {
        Self { material, distance }
    }

    /// A glowing sample at the given distance
    pub fn glow(distance: f32) -> Self {
        Self::new(Material::Glow, distance)
    }

    /// A lit sample with the given colour at the given distance
    pub fn lit(color: Vec3, distance: f32) -> Self {
        Self::new(Material::Lit(color), distance)
    }
}

// Re-exports
pub use operations::*;
pub use primitives::*;
pub use transforms::*;
