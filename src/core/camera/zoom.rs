//=========================================================================
// Zoom Controller
//=========================================================================
//
// Maps two-contact pinch separation changes onto the orthographic size.
//
// Direct proportional mapping: no smoothing and no momentum. Spreading
// the fingers (separation grows) shrinks the size, i.e. zooms in.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::core::error::CameraError;

//=== ZoomConfig ==========================================================

/// Zoom range and sensitivities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Smallest orthographic size (most zoomed in).
    pub zoom_in_size: f32,

    /// Largest orthographic size (most zoomed out).
    pub zoom_out_size: f32,

    /// Animated zoom rate in world units per second (used by `toggle_zoom`).
    pub zoom_speed: f32,

    /// World units of size change per screen pixel of pinch separation change.
    pub pinch_sensitivity: f32,
}

impl ZoomConfig {
    pub fn new(zoom_in_size: f32, zoom_out_size: f32) -> Self {
        Self {
            zoom_in_size,
            zoom_out_size,
            ..Self::default()
        }
    }

    /// Rejects empty, negative or non-finite ranges and bad sensitivities.
    pub fn validate(&self) -> Result<(), CameraError> {
        let range_ok = self.zoom_in_size.is_finite()
            && self.zoom_out_size.is_finite()
            && self.zoom_in_size > 0.0
            && self.zoom_in_size <= self.zoom_out_size;
        if !range_ok {
            return Err(CameraError::InvalidZoomRange {
                zoom_in_size: self.zoom_in_size,
                zoom_out_size: self.zoom_out_size,
            });
        }
        if !(self.zoom_speed.is_finite() && self.zoom_speed > 0.0) {
            return Err(CameraError::InvalidParameter { name: "zoom_speed", value: self.zoom_speed });
        }
        if !(self.pinch_sensitivity.is_finite() && self.pinch_sensitivity > 0.0) {
            return Err(CameraError::InvalidParameter {
                name: "pinch_sensitivity",
                value: self.pinch_sensitivity,
            });
        }
        Ok(())
    }

    /// Clamps a size into `[zoom_in_size, zoom_out_size]`.
    #[inline]
    pub fn clamp(&self, size: f32) -> f32 {
        size.clamp(self.zoom_in_size, self.zoom_out_size)
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            zoom_in_size: 5.0,
            zoom_out_size: 10.0,
            zoom_speed: 5.0,
            pinch_sensitivity: 0.01,
        }
    }
}

//=== ZoomController ======================================================

/// Stateless pinch-to-zoom mapping over a validated [`ZoomConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ZoomController {
    config: ZoomConfig,
}

impl ZoomController {
    pub fn new(config: ZoomConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Returns the zoom size after a pinch from `previous` to `current`
    /// separation (screen pixels), or `None` when the update is degenerate
    /// (no change, or non-finite input) and should be skipped.
    pub fn apply_pinch(&self, zoom_size: f32, previous: f32, current: f32) -> Option<f32> {
        let delta = current - previous;
        if !delta.is_finite() || delta == 0.0 {
            return None;
        }

        let next = self.config.clamp(zoom_size - delta * self.config.pinch_sensitivity);
        trace!("pinch {previous:.2} -> {current:.2}: zoom {zoom_size:.3} -> {next:.3}");
        Some(next)
    }

    /// The zoom level `toggle_zoom` should head for from `zoom_size`:
    /// whichever end of the range is further away.
    pub fn toggle_target(&self, zoom_size: f32) -> f32 {
        let to_in = (zoom_size - self.config.zoom_in_size).abs();
        let to_out = (self.config.zoom_out_size - zoom_size).abs();
        if to_out >= to_in {
            self.config.zoom_out_size
        } else {
            self.config.zoom_in_size
        }
    }

    /// Seconds needed to travel from `from` to `to` at `zoom_speed`.
    pub fn travel_time(&self, from: f32, to: f32) -> f32 {
        (to - from).abs() / self.config.zoom_speed
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
