//! SDF Operations - hard and smooth unions, interpolation helpers

use super::{Sample, Sdf};
use glam::Vec3;

// ============================================================================
// Boolean Operations
// ============================================================================

/// Hard union: keep whichever sample is nearer, material attached.
///
/// Returns `a` only when it is strictly nearer, so ties resolve to `b`.
pub fn union_hard(a: Sample, b: Sample) -> Sample {
    if a.distance < b.distance { a } else { b }
}

/// Cubic polynomial smooth minimum (Quilez `smin`).
///
/// Blends the two fields within a radius of `6k`; beyond that it is exactly
/// `min(a, b)`. The result never exceeds `min(a, b)`.
pub fn smooth_union(a: f32, b: f32, k: f32) -> f32 {
    let k = k * 6.0;
    let h = (k - (a - b).abs()).max(0.0) / k;
    a.min(b) - h * h * h * k * (1.0 / 6.0)
}

/// Smooth union of two SDFs with blend parameter `k`
pub struct SmoothUnion<A: Sdf, B: Sdf> {
    pub a: A,
    pub b: B,
    pub k: f32,
}

impl<A: Sdf, B: Sdf> SmoothUnion<A, B> {
    pub fn new(a: A, b: B, k: f32) -> Self {
        Self { a, b, k }
    }
}

impl<A: Sdf + Send + Sync, B: Sdf + Send + Sync> Sdf for SmoothUnion<A, B> {
    fn distance(&self, p: Vec3) -> f32 {
        smooth_union(self.a.distance(p), self.b.distance(p), self.k)
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Hermite interpolation between two edges (GLSL `smoothstep`).
///
/// Reversed edges (`edge0 > edge1`) are allowed and invert the ramp. Equal
/// edges degrade to a hard step at `edge0`.
#[allow(clippy::float_cmp)]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
