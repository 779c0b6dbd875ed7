//! # Glowmarch Core
//!
//! Sphere-traced signed distance field animation, evaluated on the CPU.
//!
//! The scene is two smoothly blended spheres forming a self-luminous core,
//! orbited by three coloured cubes. Every pixel of every frame is a pure
//! function of its coordinate, the viewport and the scene time.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use glowmarch_core::prelude::*;
//!
//! let viewport = Viewport::new(640, 360)?;
//! let scene = AnimatedScene::at(SceneTime::from_millis(1500.0));
//! let (image, stats) = render_frame(&scene, &Marcher::default(), &Camera::default(), viewport);
//! image.save("frame.png")?;
//! ```
//!
//! ## Units and Conventions
//!
//! - **Time**: scene time in seconds, built from elapsed milliseconds
//! - **Angles**: radians; a positive angle rotates the object, not the point
//! - **Precision**: `f32` throughout, matching GPU shader precision
//! - **Coordinate system**: left-handed view, camera on `-Z` looking down `+Z`, Y-up

pub mod animation;
pub mod camera;
pub mod march;
pub mod render;
pub mod scene;
pub mod sdf;
pub mod settings;

mod error;

pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::animation::{Animation, FixedStepClock, FrameClock, WallClock};
    pub use crate::camera::{Camera, Ray, Viewport};
    pub use crate::march::{MarchOutcome, Marcher, Rgba};
    pub use crate::render::{FrameStats, render_frame};
    pub use crate::scene::{AnimatedScene, Scene, SceneTime, Shape};
    pub use crate::sdf::{Material, Sample, Sdf};
    pub use crate::settings::RenderSettings;

    // Math (re-export glam)
    pub use glam::{Mat3, Vec2, Vec3};

    // Error handling
    pub use crate::{Error, Result};
}
