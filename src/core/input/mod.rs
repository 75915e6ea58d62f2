//=========================================================================
// Input System
//
// Per-frame conversion of raw platform input into camera gestures.
//
// Responsibilities:
// - Aggregate and process batches of raw input events
// - Maintain persistent pointer/contact state (`StateTracker`)
// - Emit the tick's abstract gestures (`InputNormalizer`)
//
// Notes:
// This system is owned and updated by the CoreSystemsOrchestrator, once
// per tick, before the camera controller runs.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod normalizer;
mod state_tracker;

//=== Public API ==========================================================

pub use event::{GestureEvent, MouseButton, RawInputEvent, TouchPhase};
pub use normalizer::InputNormalizer;
pub use state_tracker::{Contact, StateTracker};

//=== External Crates =====================================================

use log::trace;

//=== InputSystem =========================================================

/// Owns the input state and produces one gesture list per frame.
#[derive(Default)]
pub struct InputSystem {
    tracker: StateTracker,
    normalizer: InputNormalizer,
}

impl InputSystem {
    //--- Construction -----------------------------------------------------
    pub fn new() -> Self {
        Self {
            tracker: StateTracker::new(),
            normalizer: InputNormalizer::new(),
        }
    }

    //--- process_frame() --------------------------------------------------
    //
    // Consumes all input batches received during the current frame,
    // updates the tracker, and returns the frame's gestures.
    //
    pub fn process_frame(&mut self, input_batches: &[Vec<RawInputEvent>]) -> &[GestureEvent] {
        self.tracker.clear();
        for batch in input_batches {
            self.tracker.process_events(batch);
        }

        let gestures = self.normalizer.normalize(&self.tracker);
        if !gestures.is_empty() {
            trace!("Input produced {} gestures", gestures.len());
        }
        gestures
    }

    //--- Query Methods ----------------------------------------------------

    /// Read-only access to the tracked pointer/contact state.
    pub fn state(&self) -> &StateTracker {
        &self.tracker
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    //--- Test Helpers -----------------------------------------------------
    fn mouse_down() -> RawInputEvent {
        RawInputEvent::MouseButtonDown { button: MouseButton::Left }
    }
    fn mouse_up() -> RawInputEvent {
        RawInputEvent::MouseButtonUp { button: MouseButton::Left }
    }
    fn mouse_move(x: f32, y: f32) -> RawInputEvent {
        RawInputEvent::MouseMoved { x, y }
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn batches_are_applied_in_order() {
        let mut system = InputSystem::new();

        let batches = vec![vec![mouse_move(4.0, 2.0)], vec![mouse_down()]];
        let gestures = system.process_frame(&batches).to_vec();

        assert_eq!(gestures, vec![GestureEvent::PointerDown(Vec2::new(4.0, 2.0))]);
        assert!(system.state().is_primary_down());
    }

    #[test]
    fn empty_frame_while_held_reports_move() {
        let mut system = InputSystem::new();
        system.process_frame(&[vec![mouse_down()]]);

        let gestures = system.process_frame(&[]).to_vec();
        assert_eq!(gestures, vec![GestureEvent::PointerMove(Vec2::ZERO)]);

        let gestures = system.process_frame(&[vec![mouse_up()]]).to_vec();
        assert_eq!(gestures, vec![GestureEvent::PointerUp(Vec2::ZERO)]);
    }

    #[test]
    fn idle_frames_produce_nothing() {
        let mut system = InputSystem::new();
        assert!(system.process_frame(&[]).is_empty());
        assert!(system.process_frame(&[vec![mouse_move(1.0, 1.0)]]).is_empty());
    }
}
