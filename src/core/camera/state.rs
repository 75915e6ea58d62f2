//=========================================================================
// Camera State
//=========================================================================
//
// The transform the controller owns and the renderer applies.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use serde::{Deserialize, Serialize};

//=== Coordinate Aliases ==================================================

/// Screen-space point in pixels, top-left origin, y pointing down.
pub type ScreenPoint = Vec2;

/// World-space point, y pointing up.
pub type WorldPoint = Vec2;

//=== CameraState =========================================================

/// Camera position plus orthographic half-height.
///
/// Snapshots are handed out by value; the controller is the only writer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub position: WorldPoint,
    pub zoom_size: f32,
}

impl CameraState {
    pub fn new(position: WorldPoint, zoom_size: f32) -> Self {
        Self { position, zoom_size }
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom_size: 10.0,
        }
    }
}
