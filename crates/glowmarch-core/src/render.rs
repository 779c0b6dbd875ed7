//! Parallel frame rendering
//!
//! Every pixel is an independent pure function of its coordinate, the
//! viewport and the scene, so rows are handed to rayon with no
//! synchronisation beyond the final statistics reduction.

use crate::camera::{Camera, Viewport};
use crate::march::{MarchOutcome, Marcher, Rgba};
use crate::scene::Scene;
use crate::sdf::Material;
use image::RgbaImage;
use rayon::prelude::*;

/// Per-frame march statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub hits: u64,
    pub glow_hits: u64,
    pub misses: u64,
    pub total_steps: u64,
}

impl FrameStats {
    pub fn record(&mut self, outcome: &MarchOutcome) {
        match outcome {
            MarchOutcome::Hit { material, .. } => {
                self.hits += 1;
                if *material == Material::Glow {
                    self.glow_hits += 1;
                }
            }
            MarchOutcome::Miss { .. } => self.misses += 1,
        }
        self.total_steps += u64::from(outcome.steps());
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            hits: self.hits + other.hits,
            glow_hits: self.glow_hits + other.glow_hits,
            misses: self.misses + other.misses,
            total_steps: self.total_steps + other.total_steps,
        }
    }

    pub fn pixels(&self) -> u64 {
        self.hits + self.misses
    }

    pub fn mean_steps(&self) -> f64 {
        match self.pixels() {
            0 => 0.0,
            n => self.total_steps as f64 / n as f64,
        }
    }
}

/// Quantise a linear colour to 8-bit RGBA, clamping to `[0, 1]`
pub fn to_rgba8(color: Rgba) -> [u8; 4] {
    color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Trace the centre of one pixel
pub fn render_pixel<S: Scene + ?Sized>(
    scene: &S,
    marcher: &Marcher,
    camera: &Camera,
    viewport: Viewport,
    x: u32,
    y: u32,
) -> (MarchOutcome, Rgba) {
    marcher.trace(scene, &camera.pixel_ray(viewport, x, y))
}

/// Render a full frame
pub fn render_frame<S: Scene + ?Sized>(
    scene: &S,
    marcher: &Marcher,
    camera: &Camera,
    viewport: Viewport,
) -> (RgbaImage, FrameStats) {
    let mut image = RgbaImage::new(viewport.width(), viewport.height());
    let row_len = viewport.width() as usize * 4;

    let stats = image
        .par_chunks_mut(row_len)
        .enumerate()
        .map(|(y, row)| {
            let mut stats = FrameStats::default();
            for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
                let (outcome, color) =
                    render_pixel(scene, marcher, camera, viewport, x as u32, y as u32);
                stats.record(&outcome);
                pixel.copy_from_slice(&to_rgba8(color));
            }
            stats
        })
        .reduce(FrameStats::default, FrameStats::merge);

    tracing::debug!(
        "Frame {}x{}: {} hits ({} glow), {} misses, {:.1} mean steps",
        viewport.width(),
        viewport.height(),
        stats.hits,
        stats.glow_hits,
        stats.misses,
        stats.mean_steps()
    );

    (image, stats)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::scene::Shape;
    use crate::sdf::primitives::sphere;
    use glam::Vec3;

    #[test]
    fn quantise_clamps_and_rounds() {
        assert_eq!(to_rgba8([0.0, 1.0, 2.0, -1.0]), [0, 255, 255, 0]);
        assert_eq!(to_rgba8([0.5, 0.3, 0.0, 1.0]), [128, 77, 0, 255]);
    }

    #[test]
    fn stats_count_every_pixel() {
        let scene = Shape::new(sphere(1.8), Material::Lit(Vec3::ONE));
        let viewport = Viewport::new(16, 9).unwrap();
        let (image, stats) =
            render_frame(&scene, &Marcher::default(), &Camera::default(), viewport);

        assert_eq!(image.dimensions(), (16, 9));
        assert_eq!(stats.pixels(), 16 * 9);
        assert!(stats.hits > 0);
        assert!(stats.misses > 0);
        assert_eq!(stats.glow_hits, 0);
    }

    #[test]
    fn every_pixel_is_opaque() {
        let scene = Shape::new(sphere(1.0), Material::Glow);
        let viewport = Viewport::new(8, 8).unwrap();
        let (image, _) = render_frame(&scene, &Marcher::default(), &Camera::default(), viewport);
        assert!(image.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn frame_matches_single_pixel_traces() {
        let scene = Shape::new(sphere(1.5), Material::Lit(Vec3::new(0.2, 0.6, 0.9)));
        let marcher = Marcher::default();
        let camera = Camera::default();
        let viewport = Viewport::new(12, 6).unwrap();
        let (image, _) = render_frame(&scene, &marcher, &camera, viewport);

        for (x, y) in [(0, 0), (6, 3), (11, 5), (5, 2)] {
            let (_, color) = render_pixel(&scene, &marcher, &camera, viewport, x, y);
            assert_eq!(image.get_pixel(x, y).0, to_rgba8(color));
        }
    }

    #[test]
    fn mean_steps_of_empty_stats_is_zero() {
        assert_eq!(FrameStats::default().mean_steps(), 0.0);
    }
}
