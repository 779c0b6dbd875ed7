//! Settings resolution for the CLI
//!
//! Settings come from `{config_dir}/glowmarch/settings.json` unless a path is
//! given explicitly. Command-line flags are applied on top.

use anyhow::{Context, Result};
use glowmarch_core::settings::RenderSettings;
use std::path::{Path, PathBuf};

/// Default location of the settings file
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("glowmarch").join("settings.json"))
}

/// Load settings from `explicit`, or from the default location.
///
/// An explicit path must exist and parse. A missing default file means
/// defaults; a broken one is reported and ignored.
pub fn load_settings(explicit: Option<&Path>) -> Result<RenderSettings> {
    if let Some(path) = explicit {
        return RenderSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()));
    }

    let Some(path) = settings_path() else {
        return Ok(RenderSettings::default());
    };

    if !path.exists() {
        return Ok(RenderSettings::default());
    }

    match RenderSettings::load(&path) {
        Ok(settings) => {
            tracing::debug!("Loaded settings from {}", path.display());
            Ok(settings)
        }
        Err(e) => {
            tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
            Ok(RenderSettings::default())
        }
    }
}

/// Where `settings --save` writes: the explicit file if one was given
pub fn save_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => settings_path().context("No config directory on this platform"),
    }
}

/// Flags that override individual settings
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub max_steps: Option<u32>,
    pub fps: Option<f32>,
    pub frames: Option<u32>,
}

impl Overrides {
    /// Apply the overrides and re-validate
    pub fn apply(self, mut settings: RenderSettings) -> Result<RenderSettings> {
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(max_steps) = self.max_steps {
            settings.max_steps = max_steps;
        }
        if let Some(fps) = self.fps {
            settings.fps = fps;
        }
        if let Some(frames) = self.frames {
            settings.frame_count = frames;
        }
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_fields() {
        let overrides = Overrides {
            width: Some(100),
            frames: Some(4),
            ..Default::default()
        };
        let settings = overrides.apply(RenderSettings::default()).unwrap();
        assert_eq!(settings.width, 100);
        assert_eq!(settings.frame_count, 4);
        assert_eq!(settings.height, RenderSettings::default().height);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let overrides = Overrides {
            height: Some(0),
            ..Default::default()
        };
        assert!(overrides.apply(RenderSettings::default()).is_err());
    }

    #[test]
    fn save_goes_back_to_explicit_file() {
        let path = std::env::temp_dir().join("glowmarch-explicit.json");
        assert_eq!(save_path(Some(&path)).unwrap(), path);
    }

    #[test]
    fn explicit_file_roundtrips_through_save_path() {
        let dir = std::env::temp_dir().join(format!("glowmarch-cli-{}", std::process::id()));
        let path = dir.join("custom.json");
        let settings = RenderSettings {
            width: 48,
            ..Default::default()
        };
        settings.save(&save_path(Some(&path)).unwrap()).unwrap();
        assert_eq!(load_settings(Some(&path)).unwrap(), settings);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("glowmarch-does-not-exist.json");
        assert!(load_settings(Some(&path)).is_err());
    }
}
