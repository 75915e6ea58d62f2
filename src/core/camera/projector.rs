//=========================================================================
// Projector
//=========================================================================
//
// Screen → world conversion supplied by the host.
//
// The controller never constructs a projection on its own; it receives
// one at build time. Every call passes the camera state the conversion
// should use, so both ends of a drag delta are projected through the
// same transform.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::state::{CameraState, ScreenPoint, WorldPoint};

//=== Projector Trait =====================================================

/// Converts screen points to world points for a given camera state.
pub trait Projector: Send {
    fn screen_to_world(&self, screen: ScreenPoint, camera: &CameraState) -> WorldPoint;

    /// Called when the host window is resized. Default: ignored.
    fn set_viewport(&mut self, _width: f32, _height: f32) {}
}

//=== OrthographicProjector ===============================================

/// Orthographic projection over a `width x height` pixel viewport.
///
/// The camera position sits at the viewport centre; `zoom_size` is the
/// half-height in world units, so one pixel spans `2 * zoom_size / height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicProjector {
    viewport: Vec2,
}

impl OrthographicProjector {
    /// Creates a projector; non-positive dimensions are raised to one pixel.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Self::sanitize(width, height),
        }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// World units covered by one screen pixel at `zoom_size`.
    pub fn units_per_pixel(&self, zoom_size: f32) -> f32 {
        2.0 * zoom_size / self.viewport.y
    }

    fn sanitize(width: f32, height: f32) -> Vec2 {
        let dim = |v: f32| if v.is_finite() && v >= 1.0 { v } else { 1.0 };
        Vec2::new(dim(width), dim(height))
    }
}

impl Projector for OrthographicProjector {
    fn screen_to_world(&self, screen: ScreenPoint, camera: &CameraState) -> WorldPoint {
        let centered = Vec2::new(
            screen.x - self.viewport.x * 0.5,
            self.viewport.y * 0.5 - screen.y,
        );
        camera.position + centered * self.units_per_pixel(camera.zoom_size)
    }

    fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Self::sanitize(width, height);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
