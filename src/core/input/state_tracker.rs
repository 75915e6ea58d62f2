//=========================================================================
// State Tracker
//=========================================================================
//
// Pointer and touch-contact state with per-frame delta tracking.
//
// Architecture:
//   RawInputEvent → process_events() → primary button + contacts → query
//
// Frame lifecycle: clear() → process_events() → query
//
// `clear()` snapshots every contact's position into `previous`, so after
// processing a frame each contact knows where it was one frame ago. The
// pinch separation delta is derived from that. A contact that started this
// frame keeps its start point in `previous`.
//
// Button transitions record the cursor position at the moment they
// happened, so motion later in the same frame is not attributed to them.
// This relies on events arriving in platform order.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::trace;

//=== Internal Dependencies ===============================================

use super::event::{MouseButton, RawInputEvent, TouchPhase};

//=== Contact =============================================================

/// One active touch contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub id: u64,
    pub position: Vec2,
    /// Position at the start of the current frame.
    pub previous: Vec2,
}

//=== StateTracker ========================================================

/// Tracks persistent pointer state and per-frame transitions.
///
/// Only [`MouseButton::Left`] is tracked as the primary button.
/// Contacts are kept in arrival order; the first two form a pinch.
pub struct StateTracker {
    //--- Persistent State (survives frame boundary) ----------------------
    primary_down: bool,
    cursor: Vec2,
    contacts: Vec<Contact>,

    //--- Frame Deltas (reset each frame via clear()) --------------------
    primary_pressed_at: Option<Vec2>,
    primary_released_at: Option<Vec2>,
    contacts_started_this_frame: Vec<u64>,
    contacts_ended_this_frame: Vec<Contact>,
}

impl StateTracker {
    /// Creates a new state tracker with empty state.
    pub fn new() -> Self {
        Self {
            primary_down: false,
            cursor: Vec2::ZERO,
            contacts: Vec::with_capacity(4),
            primary_pressed_at: None,
            primary_released_at: None,
            contacts_started_this_frame: Vec::with_capacity(4),
            contacts_ended_this_frame: Vec::with_capacity(4),
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears frame-specific deltas and snapshots contact positions.
    pub fn clear(&mut self) {
        self.primary_pressed_at = None;
        self.primary_released_at = None;
        self.contacts_started_this_frame.clear();
        self.contacts_ended_this_frame.clear();
        for contact in &mut self.contacts {
            contact.previous = contact.position;
        }
    }

    /// Processes input events, updating internal state.
    pub fn process_events(&mut self, events: &[RawInputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_event(&mut self, event: &RawInputEvent) {
        match *event {
            RawInputEvent::MouseButtonDown { button: MouseButton::Left } => {
                // Only mark as pressed if it wasn't already down
                if !self.primary_down {
                    self.primary_down = true;
                    self.primary_pressed_at = Some(self.cursor);
                }
            }

            RawInputEvent::MouseButtonUp { button: MouseButton::Left } => {
                // Only mark as released if it was actually down
                if self.primary_down {
                    self.primary_down = false;
                    self.primary_released_at = Some(self.cursor);
                }
            }

            RawInputEvent::MouseMoved { x, y } => {
                self.cursor = Vec2::new(x, y);
            }

            RawInputEvent::Touch { id, phase, x, y } => {
                self.process_touch(id, phase, Vec2::new(x, y));
            }

            // Secondary buttons and unrecognized events don't drive the camera
            RawInputEvent::MouseButtonDown { .. }
            | RawInputEvent::MouseButtonUp { .. }
            | RawInputEvent::Unidentified => {}
        }
    }

    fn process_touch(&mut self, id: u64, phase: TouchPhase, position: Vec2) {
        match phase {
            TouchPhase::Started => {
                if let Some(contact) = self.contact_mut(id) {
                    contact.position = position;
                } else {
                    self.contacts.push(Contact { id, position, previous: position });
                    self.contacts_started_this_frame.push(id);
                }
            }

            TouchPhase::Moved => match self.contact_mut(id) {
                Some(contact) => contact.position = position,
                None => trace!("move for unknown contact {id} ignored"),
            },

            TouchPhase::Ended | TouchPhase::Cancelled => {
                if let Some(index) = self.contacts.iter().position(|c| c.id == id) {
                    let mut contact = self.contacts.remove(index);
                    contact.position = position;
                    self.contacts_ended_this_frame.push(contact);
                }
            }
        }
    }

    fn contact_mut(&mut self, id: u64) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.id == id)
    }

    //=====================================================================
    // Query API - Mouse
    //=====================================================================

    /// Returns `true` while the primary button is held.
    pub fn is_primary_down(&self) -> bool {
        self.primary_down
    }

    /// Returns `true` if the primary button went UP → DOWN this frame.
    pub fn is_primary_pressed(&self) -> bool {
        self.primary_pressed_at.is_some()
    }

    /// Returns `true` if the primary button went DOWN → UP this frame.
    pub fn is_primary_released(&self) -> bool {
        self.primary_released_at.is_some()
    }

    /// Cursor position at the latest press this frame.
    pub fn primary_pressed_at(&self) -> Option<Vec2> {
        self.primary_pressed_at
    }

    /// Cursor position at the latest release this frame.
    pub fn primary_released_at(&self) -> Option<Vec2> {
        self.primary_released_at
    }

    /// Cursor position in screen coordinates (pixels, top-left origin).
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    //=====================================================================
    // Query API - Touch
    //=====================================================================

    /// Active contacts in arrival order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn contact_started_this_frame(&self, id: u64) -> bool {
        self.contacts_started_this_frame.contains(&id)
    }

    /// Contacts that lifted this frame, with their final position.
    pub fn ended_contacts(&self) -> &[Contact] {
        &self.contacts_ended_this_frame
    }

    pub fn ended_contact(&self, id: u64) -> Option<&Contact> {
        self.contacts_ended_this_frame.iter().find(|c| c.id == id)
    }

    /// Returns `true` if any touch is active or changed this frame.
    pub fn has_touch_activity(&self) -> bool {
        !self.contacts.is_empty() || !self.contacts_ended_this_frame.is_empty()
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn mouse_down(btn: MouseButton) -> RawInputEvent {
        RawInputEvent::MouseButtonDown { button: btn }
    }

    fn mouse_up(btn: MouseButton) -> RawInputEvent {
        RawInputEvent::MouseButtonUp { button: btn }
    }

    fn mouse_move(x: f32, y: f32) -> RawInputEvent {
        RawInputEvent::MouseMoved { x, y }
    }

    fn touch(id: u64, phase: TouchPhase, x: f32, y: f32) -> RawInputEvent {
        RawInputEvent::Touch { id, phase, x, y }
    }

    //=====================================================================
    // Mouse Tests
    //=====================================================================

    /// Pressed only on the transition frame, down while held.
    #[test]
    fn primary_pressed_only_on_transition_frame() {
        let mut tracker = StateTracker::new();

        tracker.clear();
        tracker.process_events(&[mouse_down(MouseButton::Left)]);
        assert!(tracker.is_primary_pressed());
        assert!(tracker.is_primary_down());

        tracker.clear();
        tracker.process_events(&[]);
        assert!(!tracker.is_primary_pressed());
        assert!(tracker.is_primary_down());

        tracker.clear();
        tracker.process_events(&[mouse_up(MouseButton::Left)]);
        assert!(tracker.is_primary_released());
        assert!(!tracker.is_primary_down());
    }

    /// Press + release in one frame registers both transitions.
    #[test]
    fn fast_click_both_transitions_captured() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[mouse_down(MouseButton::Left), mouse_up(MouseButton::Left)]);
        assert!(tracker.is_primary_pressed());
        assert!(tracker.is_primary_released());
        assert!(!tracker.is_primary_down());
    }

    #[test]
    fn spurious_release_ignored() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[mouse_up(MouseButton::Left)]);
        assert!(!tracker.is_primary_released());
    }

    #[test]
    fn secondary_buttons_ignored() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[mouse_down(MouseButton::Right), mouse_down(MouseButton::Middle)]);
        assert!(!tracker.is_primary_down());
        assert!(!tracker.is_primary_pressed());
    }

    #[test]
    fn transitions_record_cursor_at_event_time() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[
            mouse_move(10.0, 0.0),
            mouse_down(MouseButton::Left),
            mouse_move(20.0, 0.0),
            mouse_up(MouseButton::Left),
            mouse_move(35.0, 0.0),
        ]);
        assert_eq!(tracker.primary_pressed_at(), Some(Vec2::new(10.0, 0.0)));
        assert_eq!(tracker.primary_released_at(), Some(Vec2::new(20.0, 0.0)));
        assert_eq!(tracker.cursor(), Vec2::new(35.0, 0.0));

        tracker.clear();
        assert!(tracker.primary_pressed_at().is_none());
        assert!(tracker.primary_released_at().is_none());
    }

    #[test]
    fn contact_started_and_moved_in_one_frame_keeps_start_point() {
        let mut tracker = StateTracker::new();
        tracker.clear();
        tracker.process_events(&[
            touch(4, TouchPhase::Started, 50.0, 50.0),
            touch(4, TouchPhase::Moved, 40.0, 50.0),
        ]);
        let contact = tracker.contacts()[0];
        assert_eq!(contact.previous, Vec2::new(50.0, 50.0));
        assert_eq!(contact.position, Vec2::new(40.0, 50.0));
        assert!(tracker.contact_started_this_frame(4));
    }

    #[test]
    fn cursor_tracks_last_move() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[mouse_move(10.0, 20.0), mouse_move(30.0, 40.0)]);
        assert_eq!(tracker.cursor(), Vec2::new(30.0, 40.0));
    }

    //=====================================================================
    // Touch Tests
    //=====================================================================

    #[test]
    fn contact_lifecycle() {
        let mut tracker = StateTracker::new();

        tracker.clear();
        tracker.process_events(&[touch(7, TouchPhase::Started, 1.0, 2.0)]);
        assert_eq!(tracker.contacts().len(), 1);
        assert!(tracker.contact_started_this_frame(7));
        assert!(tracker.has_touch_activity());

        tracker.clear();
        tracker.process_events(&[touch(7, TouchPhase::Moved, 5.0, 6.0)]);
        let contact = tracker.contacts()[0];
        assert_eq!(contact.previous, Vec2::new(1.0, 2.0));
        assert_eq!(contact.position, Vec2::new(5.0, 6.0));
        assert!(!tracker.contact_started_this_frame(7));

        tracker.clear();
        tracker.process_events(&[touch(7, TouchPhase::Ended, 8.0, 9.0)]);
        assert!(tracker.contacts().is_empty());
        assert_eq!(tracker.ended_contact(7).map(|c| c.position), Some(Vec2::new(8.0, 9.0)));
        assert!(tracker.has_touch_activity());

        tracker.clear();
        assert!(!tracker.has_touch_activity());
    }

    #[test]
    fn previous_equals_position_without_movement() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[touch(1, TouchPhase::Started, 3.0, 3.0)]);
        tracker.clear();
        tracker.process_events(&[]);
        let contact = tracker.contacts()[0];
        assert_eq!(contact.previous, contact.position);
    }

    #[test]
    fn contacts_keep_arrival_order() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[
            touch(9, TouchPhase::Started, 0.0, 0.0),
            touch(2, TouchPhase::Started, 1.0, 0.0),
            touch(5, TouchPhase::Started, 2.0, 0.0),
        ]);
        let ids: Vec<_> = tracker.contacts().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![9, 2, 5]);
    }

    #[test]
    fn cancelled_contact_is_removed() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[touch(1, TouchPhase::Started, 0.0, 0.0)]);
        tracker.clear();
        tracker.process_events(&[touch(1, TouchPhase::Cancelled, 0.0, 0.0)]);
        assert!(tracker.contacts().is_empty());
        assert!(tracker.ended_contact(1).is_some());
    }

    #[test]
    fn move_for_unknown_contact_ignored() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[touch(3, TouchPhase::Moved, 1.0, 1.0)]);
        assert!(tracker.contacts().is_empty());
    }

    #[test]
    fn unidentified_events_ignored() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[RawInputEvent::Unidentified]);
        assert_eq!(tracker.cursor(), Vec2::ZERO);
        assert!(!tracker.has_touch_activity());
    }
}
