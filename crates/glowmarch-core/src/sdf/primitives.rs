//! SDF Primitive shapes
//!
//! All primitives are centered at the origin. Transform the query point to
//! position them (see [`super::transforms`]).

use super::Sdf;
use glam::Vec3;

// ============================================================================
// Distance functions
// ============================================================================

/// Exact distance from `p` to a sphere of `radius` centered at the origin
pub fn sphere_distance(p: Vec3, radius: f32) -> f32 {
    p.length() - radius
}

/// Exact distance from `p` to an axis-aligned cube with edge length `side`
///
/// Outside the cube this is the Euclidean distance to the nearest point of
/// the surface (edges and corners included), inside it is the negated
/// distance to the nearest face.
pub fn cube_distance(p: Vec3, side: f32) -> f32 {
    // All components of d negative means p is inside
    let d = p.abs() - Vec3::splat(0.5 * side);

    let inside = d.x.max(d.y.max(d.z)).min(0.0);
    let outside = d.max(Vec3::ZERO).length();

    inside + outside
}

// ============================================================================
// Primitive Structs
// ============================================================================

/// Create a sphere with given radius
pub fn sphere(radius: f32) -> Sphere {
    Sphere::new(radius)
}

/// Create a cube with given edge length
pub fn cube(side: f32) -> Cube {
    Cube::new(side)
}

/// Sphere centered at origin
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub radius: f32,
}

impl Sphere {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl Sdf for Sphere {
    fn distance(&self, p: Vec3) -> f32 {
        sphere_distance(p, self.radius)
    }
}

/// Axis-aligned cube centered at origin
#[derive(Debug, Clone, Copy)]
pub struct Cube {
    pub side: f32,
}

impl Cube {
    pub fn new(side: f32) -> Self {
        Self { side }
    }
}

impl Sdf for Cube {
    fn distance(&self, p: Vec3) -> f32 {
        cube_distance(p, self.side)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sphere_inside_is_negative_and_bounded() {
        let r = 1.5;
        for p in [
            Vec3::ZERO,
            Vec3::new(0.3, -0.2, 0.1),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(-0.7, 0.7, 0.7),
        ] {
            let d = sphere_distance(p, r);
            assert!(d < 0.0, "{p:?} should be inside");
            assert!(d.abs() <= r);
        }
        assert_relative_eq!(sphere_distance(Vec3::ZERO, r), -r);
    }

    #[test]
    fn sphere_surface_is_zero() {
        let r = 1.8;
        let on_surface = Vec3::new(1.0, 2.0, -0.5).normalize() * r;
        assert_relative_eq!(sphere_distance(on_surface, r), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn cube_face_distances() {
        // Half side is 0.5
        assert_relative_eq!(cube_distance(Vec3::new(2.0, 0.0, 0.0), 1.0), 1.5);
        assert_relative_eq!(cube_distance(Vec3::new(0.0, -0.9, 0.0), 1.0), 0.4, epsilon = 1e-6);
        assert_relative_eq!(cube_distance(Vec3::ZERO, 1.0), -0.5);
        assert_relative_eq!(cube_distance(Vec3::new(0.4, 0.0, 0.0), 1.0), -0.1, epsilon = 1e-6);
    }

    #[test]
    fn cube_corner_distance_is_euclidean() {
        // Nearest point is the corner (0.5, 0.5, 0.5)
        let p = Vec3::splat(1.5);
        assert_relative_eq!(cube_distance(p, 1.0), 3.0_f32.sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn structs_match_free_functions() {
        let p = Vec3::new(0.2, 1.3, -0.4);
        assert_eq!(sphere(0.9).distance(p), sphere_distance(p, 0.9));
        assert_eq!(cube(0.4).distance(p), cube_distance(p, 0.4));
    }
}
