//! Pixel to ray mapping
//!
//! The browser version rasterised one full-screen triangle and let the GPU
//! interpolate a normalised device coordinate per fragment. Here the same
//! coordinate is computed directly from the pixel centre.

use crate::{Error, Result};
use glam::{Vec2, Vec3};

/// A ray with normalised direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalising `direction`.
    ///
    /// A zero direction falls back to `+Z`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.try_normalize().unwrap_or(Vec3::Z),
        }
    }

    /// Point at distance `t` along the ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Output resolution in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn resolution(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Normalised device coordinate of the centre of pixel `(x, y)`.
    ///
    /// Row 0 is the top of the image and maps to `+y`, matching the GL
    /// convention where the framebuffer origin is the bottom-left corner.
    pub fn ndc(&self, x: u32, y: u32) -> Vec2 {
        let res = self.resolution();
        Vec2::new(
            2.0 * (x as f32 + 0.5) / res.x - 1.0,
            1.0 - 2.0 * (y as f32 + 0.5) / res.y,
        )
    }

    /// Aspect-corrected coordinate: the shorter axis spans `[-1, 1]`,
    /// the longer one stretches so pixels stay square.
    pub fn aspect_coord(&self, ndc: Vec2) -> Vec2 {
        let res = self.resolution();
        res * ndc / res.x.min(res.y)
    }
}

/// Pinhole camera looking down `+Z`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub origin: Vec3,
    pub focal_distance: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            origin: Vec3::new(0.0, 0.0, -6.0),
            focal_distance: 1.0,
        }
    }
}

impl Camera {
    /// Ray through an aspect-corrected coordinate
    pub fn ray(&self, coord: Vec2) -> Ray {
        Ray::new(self.origin, Vec3::new(coord.x, coord.y, self.focal_distance))
    }

    /// Ray through the centre of pixel `(x, y)`
    pub fn pixel_ray(&self, viewport: Viewport, x: u32, y: u32) -> Ray {
        self.ray(viewport.aspect_coord(viewport.ndc(x, y)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_viewport_is_rejected() {
        assert!(matches!(
            Viewport::new(0, 10),
            Err(Error::InvalidViewport { width: 0, height: 10 })
        ));
        assert!(Viewport::new(10, 0).is_err());
    }

    #[test]
    fn wide_viewport_keeps_aspect() {
        let viewport = Viewport::new(200, 100).unwrap();
        let top = viewport.aspect_coord(Vec2::new(1.0, 1.0));
        let bottom = viewport.aspect_coord(Vec2::new(1.0, -1.0));

        assert_relative_eq!(top.x, 2.0);
        assert_relative_eq!(top.y, 1.0);
        assert_eq!(top.x, bottom.x);
        assert_eq!(top.y, -bottom.y);
    }

    #[test]
    fn tall_viewport_stretches_y() {
        let viewport = Viewport::new(100, 300).unwrap();
        let c = viewport.aspect_coord(Vec2::new(1.0, 1.0));
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 3.0);
    }

    #[test]
    fn ndc_uses_pixel_centres_and_flips_rows() {
        let viewport = Viewport::new(4, 2).unwrap();
        let top_left = viewport.ndc(0, 0);
        assert_relative_eq!(top_left.x, -0.75);
        assert_relative_eq!(top_left.y, 0.5);

        let bottom_right = viewport.ndc(3, 1);
        assert_relative_eq!(bottom_right.x, 0.75);
        assert_relative_eq!(bottom_right.y, -0.5);
    }

    #[test]
    fn centre_pixel_looks_straight_ahead() {
        let viewport = Viewport::new(3, 3).unwrap();
        let ray = Camera::default().pixel_ray(viewport, 1, 1);
        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, -6.0));
        assert_relative_eq!(ray.direction.z, 1.0);
    }

    #[test]
    fn ray_direction_is_normalised() {
        let ray = Camera::default().ray(Vec2::new(1.5, -0.5));
        assert_relative_eq!(ray.direction.length(), 1.0, epsilon = 1e-6);
        assert!(ray.direction.x > 0.0 && ray.direction.y < 0.0);
    }

    #[test]
    fn degenerate_direction_falls_back() {
        let ray = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert_eq!(ray.direction, Vec3::Z);
    }
}
