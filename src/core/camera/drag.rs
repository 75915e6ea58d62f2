//=========================================================================
// Drag Session
//=========================================================================
//
// One in-progress single-pointer interaction.
//
// Lifecycle:
//   PointerDown → begin() → update()* → end() → DragOutcome
//
// A session starts as a press and is promoted to a drag the first time a
// single move exceeds the drag threshold in world units. Promotion is
// sticky. Velocity is the last move's delta over that tick's dt (not an
// average); it seeds momentum on release.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::projector::Projector;
use super::state::{CameraState, ScreenPoint};
use crate::core::error::CameraError;

//=== DragConfig ==========================================================

/// Drag classification and momentum tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Minimum world-space move that turns a press into a drag.
    pub drag_threshold: f32,

    /// Per-second exponential decay applied to release velocity.
    pub deceleration_rate: f32,

    /// Momentum stops once speed (world units/s) falls to this value.
    pub stop_speed: f32,
}

impl DragConfig {
    pub fn validate(&self) -> Result<(), CameraError> {
        if !(self.drag_threshold.is_finite() && self.drag_threshold >= 0.0) {
            return Err(CameraError::InvalidParameter {
                name: "drag_threshold",
                value: self.drag_threshold,
            });
        }
        if !(self.deceleration_rate.is_finite() && self.deceleration_rate > 0.0) {
            return Err(CameraError::InvalidParameter {
                name: "deceleration_rate",
                value: self.deceleration_rate,
            });
        }
        if !(self.stop_speed.is_finite() && self.stop_speed > 0.0) {
            return Err(CameraError::InvalidParameter { name: "stop_speed", value: self.stop_speed });
        }
        Ok(())
    }
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 0.01,
            deceleration_rate: 5.0,
            stop_speed: 0.1,
        }
    }
}

//=== DragOutcome =========================================================

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Threshold was crossed; carries the last velocity sample.
    Dragged { velocity: Vec2 },

    /// Threshold was never crossed; carries how long the pointer was held.
    Pressed { held_for: f32 },
}

//=== DragSession =========================================================

/// Live pointer interaction: press point, last point, classification, velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    origin: ScreenPoint,
    current: ScreenPoint,
    is_dragging: bool,
    velocity: Vec2,
    held_for: f32,
}

impl DragSession {
    /// Starts a session at `at` (screen space).
    pub fn begin(at: ScreenPoint) -> Self {
        debug!("pointer pressed at {at}");
        Self {
            origin: at,
            current: at,
            is_dragging: false,
            velocity: Vec2::ZERO,
            held_for: 0.0,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn origin(&self) -> ScreenPoint {
        self.origin
    }

    pub fn current(&self) -> ScreenPoint {
        self.current
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn held_for(&self) -> f32 {
        self.held_for
    }

    //--- Updates ----------------------------------------------------------

    /// Accumulates time the pointer has been held.
    pub fn age(&mut self, dt: f32) {
        if dt > 0.0 && dt.is_finite() {
            self.held_for += dt;
        }
    }

    /// Moves the pointer to `to` and returns the world delta the camera
    /// should travel (`previous_world - current_world`, so content follows
    /// the finger).
    ///
    /// Velocity is only resampled when `dt > 0`.
    pub fn update(
        &mut self,
        to: ScreenPoint,
        camera: &CameraState,
        projector: &dyn Projector,
        dt: f32,
        drag_threshold: f32,
    ) -> Vec2 {
        let previous = projector.screen_to_world(self.current, camera);
        let current = projector.screen_to_world(to, camera);
        let delta = previous - current;
        self.current = to;

        if !delta.is_finite() {
            trace!("non-finite drag delta ignored");
            return Vec2::ZERO;
        }

        if !self.is_dragging && delta.length() > drag_threshold {
            self.is_dragging = true;
            debug!("press promoted to drag (delta {delta})");
        }

        if dt > 0.0 && dt.is_finite() {
            self.velocity = delta / dt;
        }

        trace!("drag delta {delta}, velocity {}", self.velocity);
        delta
    }

    /// Ends the session.
    pub fn end(self) -> DragOutcome {
        if self.is_dragging {
            DragOutcome::Dragged { velocity: self.velocity }
        } else {
            DragOutcome::Pressed { held_for: self.held_for }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::camera::projector::OrthographicProjector;

    //--- Test Helpers -----------------------------------------------------

    /// 100x100 viewport at zoom 50: one pixel is one world unit.
    fn unit_projector() -> OrthographicProjector {
        OrthographicProjector::new(100.0, 100.0)
    }

    fn camera() -> CameraState {
        CameraState::new(Vec2::ZERO, 50.0)
    }

    const THRESHOLD: f32 = 0.01;

    //=====================================================================
    // Classification
    //=====================================================================

    #[test]
    fn new_session_is_pressed_not_dragging() {
        let session = DragSession::begin(Vec2::new(10.0, 10.0));
        assert!(!session.is_dragging());
        assert_eq!(session.origin(), session.current());
        assert_eq!(session.velocity(), Vec2::ZERO);
    }

    #[test]
    fn tiny_move_stays_pressed() {
        let projector = OrthographicProjector::new(100_000.0, 100_000.0);
        let mut session = DragSession::begin(Vec2::ZERO);
        // 1px at zoom 1 over 100k px is 0.00002 world units.
        session.update(Vec2::new(1.0, 0.0), &CameraState::new(Vec2::ZERO, 1.0), &projector, 0.016, THRESHOLD);
        assert!(!session.is_dragging());
        assert!(matches!(session.end(), DragOutcome::Pressed { .. }));
    }

    #[test]
    fn move_over_threshold_promotes_to_drag() {
        let mut session = DragSession::begin(Vec2::ZERO);
        session.update(Vec2::new(5.0, 0.0), &camera(), &unit_projector(), 0.1, THRESHOLD);
        assert!(session.is_dragging());
    }

    #[test]
    fn promotion_is_sticky() {
        let mut session = DragSession::begin(Vec2::ZERO);
        session.update(Vec2::new(5.0, 0.0), &camera(), &unit_projector(), 0.1, THRESHOLD);
        session.update(Vec2::new(5.0, 0.0), &camera(), &unit_projector(), 0.1, THRESHOLD);
        assert!(session.is_dragging());
    }

    //=====================================================================
    // Delta & Velocity
    //=====================================================================

    /// Dragging right moves the camera left (content follows the pointer).
    #[test]
    fn delta_is_previous_minus_current_world() {
        let mut session = DragSession::begin(Vec2::new(50.0, 50.0));
        let delta = session.update(Vec2::new(60.0, 40.0), &camera(), &unit_projector(), 0.1, THRESHOLD);
        assert!((delta - Vec2::new(-10.0, -10.0)).length() < 1e-4, "got {delta}");
    }

    #[test]
    fn velocity_is_last_sample_not_average() {
        let mut session = DragSession::begin(Vec2::ZERO);
        session.update(Vec2::new(10.0, 0.0), &camera(), &unit_projector(), 0.1, THRESHOLD);
        session.update(Vec2::new(11.0, 0.0), &camera(), &unit_projector(), 0.1, THRESHOLD);
        assert!((session.velocity() - Vec2::new(-10.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn stationary_move_zeroes_velocity() {
        let mut session = DragSession::begin(Vec2::ZERO);
        session.update(Vec2::new(10.0, 0.0), &camera(), &unit_projector(), 0.1, THRESHOLD);
        session.update(Vec2::new(10.0, 0.0), &camera(), &unit_projector(), 0.1, THRESHOLD);
        assert_eq!(session.velocity(), Vec2::ZERO);
    }

    #[test]
    fn zero_dt_keeps_previous_velocity() {
        let mut session = DragSession::begin(Vec2::ZERO);
        session.update(Vec2::new(10.0, 0.0), &camera(), &unit_projector(), 0.1, THRESHOLD);
        let before = session.velocity();
        let delta = session.update(Vec2::new(20.0, 0.0), &camera(), &unit_projector(), 0.0, THRESHOLD);
        assert_eq!(session.velocity(), before);
        assert!(delta.is_finite());
        assert!(session.velocity().is_finite());
    }

    //=====================================================================
    // Ending
    //=====================================================================

    #[test]
    fn end_after_drag_reports_velocity() {
        let mut session = DragSession::begin(Vec2::ZERO);
        session.update(Vec2::new(10.0, 0.0), &camera(), &unit_projector(), 0.5, THRESHOLD);
        match session.end() {
            DragOutcome::Dragged { velocity } => {
                assert!((velocity - Vec2::new(-20.0, 0.0)).length() < 1e-3)
            }
            other => panic!("expected drag, got {other:?}"),
        }
    }

    #[test]
    fn end_after_press_reports_hold_time() {
        let mut session = DragSession::begin(Vec2::ZERO);
        session.age(0.1);
        session.age(0.15);
        session.age(-1.0);
        match session.end() {
            DragOutcome::Pressed { held_for } => assert!((held_for - 0.25).abs() < 1e-6),
            other => panic!("expected press, got {other:?}"),
        }
    }

    //=====================================================================
    // Config
    //=====================================================================

    #[test]
    fn default_config_is_valid() {
        assert!(DragConfig::default().validate().is_ok());
    }

    #[test]
    fn config_rejects_negative_threshold() {
        let config = DragConfig { drag_threshold: -0.5, ..DragConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_rejects_zero_rate() {
        let config = DragConfig { deceleration_rate: 0.0, ..DragConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(CameraError::InvalidParameter { name: "deceleration_rate", .. })
        ));
    }
}
