//! Render settings
//!
//! Settings are plain JSON. Missing fields fall back to their defaults, so a
//! file only needs to mention what it changes:
//!
//! ```json
//! { "width": 1280, "height": 720, "frame_count": 240 }
//! ```

use crate::camera::Viewport;
use crate::march::{EPSILON, MAX_STEPS, Marcher};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything the frame driver needs besides the scene itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Step budget per ray
    pub max_steps: u32,
    /// Surface threshold
    pub epsilon: f32,
    /// Frames per second of scene time for fixed-step animation
    pub fps: f32,
    /// Number of frames an animation renders
    pub frame_count: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 360,
            max_steps: MAX_STEPS,
            epsilon: EPSILON,
            fps: 30.0,
            frame_count: 90,
        }
    }
}

impl RenderSettings {
    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write settings as JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.viewport()?;
        if self.max_steps == 0 {
            return Err(Error::InvalidSettings("max_steps must be positive".into()));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(Error::InvalidSettings(format!(
                "epsilon must be a positive number, got {}",
                self.epsilon
            )));
        }
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(Error::InvalidSettings(format!(
                "fps must be a positive number, got {}",
                self.fps
            )));
        }
        Ok(())
    }

    pub fn viewport(&self) -> Result<Viewport> {
        Viewport::new(self.width, self.height)
    }

    pub fn marcher(&self) -> Marcher {
        Marcher::new(self.max_steps, self.epsilon)
    }
}
