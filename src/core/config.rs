//=========================================================================
// Camera Configuration
//=========================================================================
//
// Aggregate of every immutable tuning block the controller needs.
//
// Loaded from TOML. The `[bounds]` and `[zoom]` sections are required;
// every other section, and every zoom field, falls back to its default.
// Example:
//
// ```toml
// [bounds]
// min_bounds = [-5.0, -5.0]
// max_bounds = [5.0, 5.0]
//
// [zoom]
// zoom_in_size = 5.0
// zoom_out_size = 10.0
//
// [tap]
// policy = "repeatable"
// max_tap_duration = 0.3
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::core::camera::{AnimationConfig, BoundsConfig, DragConfig, TapConfig, ZoomConfig};
use crate::core::error::CameraError;

//=== CameraConfig ========================================================

/// Complete controller configuration.
///
/// `bounds` and `zoom` have no meaningful default. The default config
/// leaves them unset, which [`validate`](Self::validate) rejects.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<BoundsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<ZoomConfig>,
    pub drag: DragConfig,
    pub tap: TapConfig,
    pub animation: AnimationConfig,
}

impl CameraConfig {
    /// Config with the required sections set and default tuning.
    pub fn new(bounds: BoundsConfig, zoom: ZoomConfig) -> Self {
        Self {
            bounds: Some(bounds),
            zoom: Some(zoom),
            ..Self::default()
        }
    }

    /// Parses and validates TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CameraError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CameraError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CameraError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!("Loaded camera config from {}", path.display());
        Ok(config)
    }

    /// Validates every section; bounds and zoom must be present.
    pub fn validate(&self) -> Result<(), CameraError> {
        self.bounds.ok_or(CameraError::MissingBounds)?.validate()?;
        self.zoom.ok_or(CameraError::MissingZoom)?.validate()?;
        self.drag.validate()?;
        self.tap.validate()?;
        self.animation.validate()?;
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
