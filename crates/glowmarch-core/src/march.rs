//! Sphere tracing and shading
//!
//! Each ray advances by the scene's signed distance until it either gets
//! closer than `epsilon` to a surface or runs out of steps. Because the
//! distance is a lower bound on the gap to the nearest surface in every
//! direction, a step can never tunnel through geometry.

use crate::camera::Ray;
use crate::scene::Scene;
use crate::sdf::{Material, smoothstep};
use glam::Vec3;

/// Default step budget per ray
pub const MAX_STEPS: u32 = 255;

/// Default surface threshold; also the normal estimation offset
pub const EPSILON: f32 = 0.001;

/// Rays travelling further than this have left the scene
pub const MAX_DISTANCE: f32 = 1000.0;

/// Linear RGBA colour
pub type Rgba = [f32; 4];

/// Colour of a ray that never reaches a surface
pub const BACKGROUND: Rgba = [0.0, 0.0, 0.0, 1.0];

/// Ambient floor added to the diffuse term of lit surfaces
const AMBIENT: f32 = 0.3;

/// Number of steps over which the glow ramps up to full brightness
const GLOW_RAMP_STEPS: f32 = 50.0;

/// How a single ray ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarchOutcome {
    /// Surface reached at step `steps` (zero-based), `ray_length` from the origin
    Hit {
        steps: u32,
        ray_length: f32,
        point: Vec3,
        material: Material,
    },
    /// Step budget exhausted
    Miss { steps: u32 },
}

impl MarchOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, MarchOutcome::Hit { .. })
    }

    /// Steps taken before the march ended
    pub fn steps(&self) -> u32 {
        match *self {
            MarchOutcome::Hit { steps, .. } | MarchOutcome::Miss { steps } => steps,
        }
    }
}

/// Sphere tracer configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marcher {
    pub max_steps: u32,
    pub epsilon: f32,
    /// Far plane; a ray beyond it ends as a miss
    pub max_distance: f32,
    /// Direction towards the light. Used as given, without normalising.
    pub light_dir: Vec3,
}

impl Default for Marcher {
    fn default() -> Self {
        Self {
            max_steps: MAX_STEPS,
            epsilon: EPSILON,
            max_distance: MAX_DISTANCE,
            light_dir: Vec3::new(1.0, 1.0, -1.0),
        }
    }
}

impl Marcher {
    pub fn new(max_steps: u32, epsilon: f32) -> Self {
        Self {
            max_steps,
            epsilon,
            ..Self::default()
        }
    }

    /// March `ray` through `scene`.
    ///
    /// A ray that passes the far plane, or samples a non-finite distance, has
    /// left the scene for good and is reported as a miss with the full step
    /// budget. Without the cutoff the step length doubles until it overflows.
    /// The resulting NaN points would then read as surfaces.
    pub fn march<S: Scene + ?Sized>(&self, scene: &S, ray: &Ray) -> MarchOutcome {
        let mut ray_length = 0.0_f32;

        for step in 0..self.max_steps {
            if ray_length > self.max_distance {
                break;
            }

            let point = ray.at(ray_length);
            let sample = scene.sample(point);
            if !sample.distance.is_finite() {
                break;
            }

            if sample.distance < self.epsilon {
                return MarchOutcome::Hit {
                    steps: step,
                    ray_length,
                    point,
                    material: sample.material,
                };
            }

            ray_length += sample.distance;
        }

        MarchOutcome::Miss {
            steps: self.max_steps,
        }
    }

    /// Forward-difference gradient of the scene distance, normalised.
    ///
    /// Falls back to `-Z` (facing the camera) when the gradient vanishes.
    pub fn surface_normal<S: Scene + ?Sized>(&self, scene: &S, p: Vec3) -> Vec3 {
        let e = self.epsilon;
        let d = scene.distance(p);
        let gradient = Vec3::new(
            scene.distance(p + Vec3::X * e) - d,
            scene.distance(p + Vec3::Y * e) - d,
            scene.distance(p + Vec3::Z * e) - d,
        );
        gradient.try_normalize().unwrap_or(Vec3::NEG_Z)
    }

    /// Colour for a finished march
    pub fn shade<S: Scene + ?Sized>(&self, scene: &S, outcome: &MarchOutcome) -> Rgba {
        match *outcome {
            MarchOutcome::Miss { .. } => BACKGROUND,
            MarchOutcome::Hit {
                steps,
                material: Material::Glow,
                ..
            } => {
                let glow = smoothstep(0.0, GLOW_RAMP_STEPS, steps as f32);
                [glow, glow, glow, 1.0]
            }
            MarchOutcome::Hit {
                point,
                material: Material::Lit(color),
                ..
            } => {
                let normal = self.surface_normal(scene, point);
                let diffuse = normal.dot(self.light_dir).clamp(0.0, 1.0);
                let lit = (diffuse + AMBIENT).clamp(0.0, 1.0) * color;
                [lit.x, lit.y, lit.z, 1.0]
            }
        }
    }

    /// March and shade in one go
    pub fn trace<S: Scene + ?Sized>(&self, scene: &S, ray: &Ray) -> (MarchOutcome, Rgba) {
        let outcome = self.march(scene, ray);
        let color = self.shade(scene, &outcome);
        (outcome, color)
    }
}
