//=========================================================================
// Camera Errors
//=========================================================================
//
// Construction-time and configuration errors.
//
// Per-tick code never fails: degenerate input (zero dt, zero pinch delta,
// unsupported contact counts) is skipped instead of reported. Everything
// in this module surfaces before the first tick runs.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use glam::Vec2;
use thiserror::Error;

//=== CameraError =========================================================

/// Errors raised while building a controller or loading its configuration.
#[derive(Debug, Error)]
pub enum CameraError {
    /// No [`Projector`](crate::core::camera::Projector) was supplied.
    #[error("camera controller requires a projector")]
    MissingProjector,

    /// No [`BoundsConfig`](crate::core::camera::BoundsConfig) was supplied.
    #[error("camera controller requires a bounds configuration")]
    MissingBounds,

    /// No [`ZoomConfig`](crate::core::camera::ZoomConfig) was supplied.
    #[error("camera controller requires a zoom configuration")]
    MissingZoom,

    /// `min` exceeds `max` on at least one axis.
    #[error("inverted bounds: min {min} exceeds max {max}")]
    InvertedBounds { min: Vec2, max: Vec2 },

    /// Zoom range is empty, negative or non-finite.
    #[error("invalid zoom range [{zoom_in_size}, {zoom_out_size}]")]
    InvalidZoomRange { zoom_in_size: f32, zoom_out_size: f32 },

    /// A tuning parameter is out of its accepted range.
    #[error("invalid value for `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    /// Configuration file could not be read.
    #[error("failed to read camera config {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration text is not valid TOML for [`CameraConfig`](crate::core::config::CameraConfig).
    #[error("failed to parse camera config")]
    ConfigParse(#[from] toml::de::Error),
}

//=========================================================================
// Unit Tests
//=========================================================================
