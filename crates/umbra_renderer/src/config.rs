//! Render configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a render configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Render configuration.
///
/// Every field has a default, so a JSON file only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Camera rays averaged per pixel
    pub samples_per_pixel: u32,
    /// Maximum recursion depth of a path
    pub max_depth: u32,
    /// Base seed; each row derives its own generator from it
    pub seed: u64,
    /// Output file (`.tga` or `.png`)
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            samples_per_pixel: 50,
            max_depth: 10,
            seed: 0,
            output: PathBuf::from("image.tga"),
        }
    }
}

impl RenderConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        log::debug!("Loaded render config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce an image.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > u16::MAX as u32 || self.height > u16::MAX as u32 {
            return Err(ConfigError::Invalid(format!(
                "resolution {}x{} exceeds the 65535 pixel TGA limit",
                self.width, self.height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::Invalid("samples_per_pixel must be at least 1".into()));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid("max_depth must be at least 1".into()));
        }
        Ok(())
    }
}
