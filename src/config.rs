//! Matrix configuration.
//!
//! YAML configuration for the simulated matrix, falling back to the
//! simulator's 128 × 128 panel shown at 6× zoom.

use crate::error::{Error, Result};
use crate::matrix::EdgePolicy;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// Simulated matrix settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixConfig {
    /// Matrix width in cells.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Matrix height in cells.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Output pixels per cell edge when the matrix is displayed.
    #[serde(default = "default_zoom")]
    pub zoom: u32,

    /// Out-of-range coordinate handling.
    #[serde(default)]
    pub edge_policy: EdgePolicy,
}

fn default_width() -> u32 {
    128
}
fn default_height() -> u32 {
    128
}
fn default_zoom() -> u32 {
    6
}

/// Largest accepted display zoom.
pub const MAX_ZOOM: u32 = 64;

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            zoom: default_zoom(),
            edge_policy: EdgePolicy::default(),
        }
    }
}

impl MatrixConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::ConfigNotFound(path.display().to_string()),
            _ => Error::Io(e),
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or a validation
    /// error for unusable values.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::debug!("using default matrix config: {e}");
            Self::default()
        })
    }

    /// Checks that the configuration describes a drawable matrix.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(1..=MAX_ZOOM).contains(&self.zoom) {
            return Err(Error::ConfigInvalid {
                key: "zoom".to_string(),
                message: format!("must be between 1 and {MAX_ZOOM}, got {}", self.zoom),
            });
        }
        Ok(())
    }
}
