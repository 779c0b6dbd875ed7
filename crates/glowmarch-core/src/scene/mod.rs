//! Scene representation and the animated glow scene
//!
//! A [`Scene`] maps a point to a [`Sample`]: a signed distance plus the
//! material of the surface that distance belongs to. The tracer only ever
//! talks to this trait, so isolated shapes ([`Shape`]) and the full
//! animation ([`AnimatedScene`]) are interchangeable.

pub mod trajectory;

use crate::sdf::{
    AxisRotation, Material, Sample, Sdf, cube_distance, smooth_union, sphere_distance, translate,
    union_hard,
};
use glam::Vec3;

/// Blend parameter for the two core spheres
pub const CORE_BLEND: f32 = 0.25;

/// Albedo of the large orbiting cube
pub const ORANGE: Vec3 = Vec3::new(0.8, 0.4, 0.0);
/// Albedo of the tilted inner cube
pub const BLUE: Vec3 = Vec3::new(0.0, 0.4, 0.8);
/// Albedo of the small hopping cube
pub const TEAL: Vec3 = Vec3::new(0.0, 0.8, 0.6);

/// Anything the tracer can march through
pub trait Scene: Send + Sync {
    /// Evaluate the scene at `p`
    fn sample(&self, p: Vec3) -> Sample;

    /// Signed distance only
    fn distance(&self, p: Vec3) -> f32 {
        self.sample(p).distance
    }
}

/// Scene time in seconds.
///
/// Supplied by the frame driver and threaded explicitly into scene
/// construction; nothing in the crate reads a global clock.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct SceneTime(pub f32);

impl SceneTime {
    /// Convert elapsed milliseconds to scene time
    pub fn from_millis(millis: f64) -> Self {
        Self((millis / 1000.0) as f32)
    }

    pub fn seconds(self) -> f32 {
        self.0
    }
}

/// A single SDF tagged with a material
#[derive(Debug, Clone, Copy)]
pub struct Shape<S: Sdf> {
    pub sdf: S,
    pub material: Material,
}

impl<S: Sdf> Shape<S> {
    pub fn new(sdf: S, material: Material) -> Self {
        Self { sdf, material }
    }
}

impl<S: Sdf> Scene for Shape<S> {
    fn sample(&self, p: Vec3) -> Sample {
        Sample::new(self.material, self.sdf.distance(p))
    }
}

/// Placement of one cube for the current frame
#[derive(Debug, Clone, Copy)]
struct CubePose {
    position: Vec3,
    tilt: Option<AxisRotation>,
    spin: AxisRotation,
    side: f32,
    color: Vec3,
}

impl CubePose {
    fn sample(&self, p: Vec3) -> Sample {
        let tilted = self.tilt.map_or(p, |tilt| tilt.apply(p));
        let local = self.spin.apply(translate(tilted, self.position));
        Sample::lit(self.color, cube_distance(local, self.side))
    }
}

/// The glow scene frozen at one instant.
///
/// Positions and rotation matrices are computed once in [`AnimatedScene::at`];
/// [`Scene::sample`] then only transforms the query point.
#[derive(Debug, Clone, Copy)]
pub struct AnimatedScene {
    satellite: Vec3,
    core_radius: f32,
    orange: CubePose,
    blue: CubePose,
    teal: CubePose,
}

impl AnimatedScene {
    /// Build the scene for the given time
    pub fn at(time: SceneTime) -> Self {
        let t = time.seconds();
        let spin = AxisRotation::y(t);

        Self {
            satellite: trajectory::satellite_position(t),
            core_radius: trajectory::core_radius(t),
            orange: CubePose {
                position: trajectory::orange_cube_position(t),
                tilt: Some(AxisRotation::z(0.2)),
                spin,
                side: 0.5,
                color: ORANGE,
            },
            blue: CubePose {
                position: trajectory::blue_cube_position(t),
                tilt: Some(AxisRotation::z(-0.5)),
                spin,
                side: 0.4,
                color: BLUE,
            },
            teal: CubePose {
                position: trajectory::teal_cube_position(t),
                tilt: None,
                spin,
                side: 0.3,
                color: TEAL,
            },
        }
    }

    /// Distance to the blended core on its own
    pub fn core_distance(&self, p: Vec3) -> f32 {
        let satellite = sphere_distance(translate(p, self.satellite), 1.0);
        let core = sphere_distance(p, self.core_radius);
        smooth_union(core, satellite, CORE_BLEND)
    }
}

impl Scene for AnimatedScene {
    fn sample(&self, p: Vec3) -> Sample {
        let core = Sample::glow(self.core_distance(p));

        let cubes = union_hard(self.blue.sample(p), self.orange.sample(p));
        let cubes = union_hard(cubes, self.teal.sample(p));

        union_hard(cubes, core)
    }
}
