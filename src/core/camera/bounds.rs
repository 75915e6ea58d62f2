//=========================================================================
// Bounds Clamper
//=========================================================================
//
// Rectangular region the camera position is confined to.
//
// Applied as the last step of every position mutation (drag, momentum,
// animation). Zoom size is never clamped here; see `zoom.rs`.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::core::error::CameraError;

//=== BoundsConfig ========================================================

/// Axis-aligned rectangle in world units, inclusive on both ends.
///
/// There is no default: an unbounded camera is a configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsConfig {
    pub min_bounds: Vec2,
    pub max_bounds: Vec2,
}

impl BoundsConfig {
    /// Creates a bounds rectangle. Use [`validate`](Self::validate) before use.
    pub fn new(min_bounds: Vec2, max_bounds: Vec2) -> Self {
        Self { min_bounds, max_bounds }
    }

    /// Rejects inverted or non-finite rectangles.
    pub fn validate(&self) -> Result<(), CameraError> {
        let finite = self.min_bounds.is_finite() && self.max_bounds.is_finite();
        if !finite || self.min_bounds.cmpgt(self.max_bounds).any() {
            return Err(CameraError::InvertedBounds {
                min: self.min_bounds,
                max: self.max_bounds,
            });
        }
        Ok(())
    }

    /// Clamps `position` into this rectangle.
    #[inline]
    pub fn clamp(&self, position: Vec2) -> Vec2 {
        clamp(position, self.min_bounds, self.max_bounds)
    }

    /// Returns `true` if `position` already lies inside the rectangle.
    pub fn contains(&self, position: Vec2) -> bool {
        position.cmpge(self.min_bounds).all() && position.cmple(self.max_bounds).all()
    }
}

//=== clamp() =============================================================

/// Componentwise clamp of `position` into `[min_bounds, max_bounds]`.
///
/// Idempotent: clamping an in-bounds position returns it unchanged.
/// Callers guarantee `min_bounds <= max_bounds` (see [`BoundsConfig::validate`]).
#[inline]
pub fn clamp(position: Vec2, min_bounds: Vec2, max_bounds: Vec2) -> Vec2 {
    position.max(min_bounds).min(max_bounds)
}

//=========================================================================
// Unit Tests
//=========================================================================
