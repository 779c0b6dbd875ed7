//! Error types for Glowmarch

use thiserror::Error;

/// Result type alias using Glowmarch's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around rendering.
///
/// Scene evaluation and marching are total; only the frame plumbing fails.
#[derive(Error, Debug)]
pub enum Error {
    /// Viewport has a zero dimension
    #[error("Invalid viewport {width}x{height}: both dimensions must be at least 1")]
    InvalidViewport { width: u32, height: u32 },

    /// Render settings out of range
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Settings file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}
