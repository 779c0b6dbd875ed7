//! SDF Transforms - rigid motions applied to the query point
//!
//! Moving a shape by a rigid motion `M` is the same as evaluating the
//! unmoved shape at `M⁻¹ p`. Every helper here therefore applies the
//! *inverse* transform to the point: a positive angle rotates the object
//! positively, which rotates the point by `-angle`.

use glam::{Mat3, Vec3};

// ============================================================================
// Free functions
// ============================================================================

/// Evaluate-side rotation for an object rotated by `angle` about X
pub fn rotate_x(p: Vec3, angle: f32) -> Vec3 {
    AxisRotation::x(angle).apply(p)
}

/// Evaluate-side rotation for an object rotated by `angle` about Y
pub fn rotate_y(p: Vec3, angle: f32) -> Vec3 {
    AxisRotation::y(angle).apply(p)
}

/// Evaluate-side rotation for an object rotated by `angle` about Z
pub fn rotate_z(p: Vec3, angle: f32) -> Vec3 {
    AxisRotation::z(angle).apply(p)
}

/// Evaluate-side translation for an object moved by `offset`
pub fn translate(p: Vec3, offset: Vec3) -> Vec3 {
    p - offset
}

// ============================================================================
// Precomputed rotations
// ============================================================================

/// Principal axis of a rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Inverse rotation about one principal axis, built once and applied many times.
///
/// A frame builds these for every moving primitive so per-pixel evaluation
/// only pays for a matrix-vector product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRotation {
    inverse: Mat3,
}

impl AxisRotation {
    pub fn new(axis: Axis, angle: f32) -> Self {
        let c = (-angle).cos();
        let s = (-angle).sin();
        // Column-major; each matrix rotates the point by -angle
        let inverse = match axis {
            Axis::X => Mat3::from_cols(
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, c, s),
                Vec3::new(0.0, -s, c),
            ),
            Axis::Y => Mat3::from_cols(
                Vec3::new(c, 0.0, -s),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(s, 0.0, c),
            ),
            Axis::Z => Mat3::from_cols(
                Vec3::new(c, s, 0.0),
                Vec3::new(-s, c, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
            ),
        };
        Self { inverse }
    }

    pub fn x(angle: f32) -> Self {
        Self::new(Axis::X, angle)
    }

    pub fn y(angle: f32) -> Self {
        Self::new(Axis::Y, angle)
    }

    pub fn z(angle: f32) -> Self {
        Self::new(Axis::Z, angle)
    }

    /// Rotate the query point into the object's local frame
    pub fn apply(&self, p: Vec3) -> Vec3 {
        self.inverse * p
    }
}
