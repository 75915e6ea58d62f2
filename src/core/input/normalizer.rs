//=========================================================================
// Input Normalizer
//=========================================================================
//
// Turns tracked pointer/contact state into gesture events, once per tick.
//
// Rules:
// - Touch activity takes precedence over the mouse for the whole tick.
// - One contact drives the single pointer (down / move / up).
// - Exactly two contacts emit `PinchUpdate` and end pointer handling.
// - Three or more contacts emit nothing.
// - While a pointer is held, `PointerMove` is emitted every tick, even
//   without motion, so release velocity reflects the last tick only.
// - Presses and releases use the position recorded when they happened. A
//   press followed by motion in the same tick also emits that motion.
//
// After a pinch, the remaining finger does not become a pointer; a fresh
// press is required.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::event::GestureEvent;
use super::state_tracker::{Contact, StateTracker};

//=== PointerSource =======================================================

/// What currently drives the single pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerSource {
    Mouse,
    Touch(u64),
}

//=== InputNormalizer =====================================================

/// Stateful mapping from [`StateTracker`] to [`GestureEvent`]s.
#[derive(Debug, Default)]
pub struct InputNormalizer {
    active: Option<PointerSource>,
    gestures: Vec<GestureEvent>,
}

impl InputNormalizer {
    pub fn new() -> Self {
        Self {
            active: None,
            gestures: Vec::with_capacity(4),
        }
    }

    /// Whether a single pointer is currently held.
    pub fn has_active_pointer(&self) -> bool {
        self.active.is_some()
    }

    /// Produces this tick's gestures, in order.
    ///
    /// Call after the tracker has processed the tick's raw events.
    pub fn normalize(&mut self, tracker: &StateTracker) -> &[GestureEvent] {
        self.gestures.clear();

        if tracker.has_touch_activity() {
            self.normalize_touch(tracker);
        } else {
            self.normalize_mouse(tracker);
        }

        if !self.gestures.is_empty() {
            trace!("gestures: {:?}", self.gestures);
        }
        &self.gestures
    }

    //--- Mouse ------------------------------------------------------------

    fn normalize_mouse(&mut self, tracker: &StateTracker) {
        let cursor = tracker.cursor();

        // Release of a press from an earlier tick
        if let Some(released_at) = tracker.primary_released_at() {
            if self.active == Some(PointerSource::Mouse) {
                self.gestures.push(GestureEvent::PointerUp(released_at));
                self.active = None;
            }
        }

        if let Some(pressed_at) = tracker.primary_pressed_at() {
            self.gestures.push(GestureEvent::PointerDown(pressed_at));
            self.active = Some(PointerSource::Mouse);

            if !tracker.is_primary_down() {
                // Pressed and released inside one tick
                let released_at = tracker.primary_released_at().unwrap_or(pressed_at);
                self.gestures.push(GestureEvent::PointerUp(released_at));
                self.active = None;
            } else if cursor != pressed_at {
                self.gestures.push(GestureEvent::PointerMove(cursor));
            }
        } else if tracker.is_primary_down() && self.active == Some(PointerSource::Mouse) {
            self.gestures.push(GestureEvent::PointerMove(cursor));
        }
    }

    //--- Touch ------------------------------------------------------------

    fn normalize_touch(&mut self, tracker: &StateTracker) {
        // A mouse press can't survive a switch to touch input
        if self.active == Some(PointerSource::Mouse) {
            self.active = None;
        }

        if let Some(PointerSource::Touch(id)) = self.active {
            if let Some(ended) = tracker.ended_contact(id) {
                self.gestures.push(GestureEvent::PointerUp(ended.position));
                self.active = None;
            }
        }

        match tracker.contacts() {
            [] => self.single_frame_tap(tracker),

            [contact] => self.single_contact(tracker, contact),

            [a, b] => {
                if self.active.take().is_some() {
                    debug!("second contact landed, pointer handed over to pinch");
                }
                self.gestures.push(GestureEvent::PinchUpdate {
                    previous: a.previous.distance(b.previous),
                    current: a.position.distance(b.position),
                });
            }

            more => trace!("{} contacts active, ignored", more.len()),
        }
    }

    fn single_contact(&mut self, tracker: &StateTracker, contact: &Contact) {
        match self.active {
            Some(PointerSource::Touch(id)) if id == contact.id => {
                self.gestures.push(GestureEvent::PointerMove(contact.position));
            }
            None if tracker.contact_started_this_frame(contact.id) => {
                // `previous` still holds the start point on the first frame
                self.gestures.push(GestureEvent::PointerDown(contact.previous));
                if contact.position != contact.previous {
                    self.gestures.push(GestureEvent::PointerMove(contact.position));
                }
                self.active = Some(PointerSource::Touch(contact.id));
            }
            // Leftover finger after a pinch
            _ => {}
        }
    }

    /// A lone contact that started and ended inside one tick.
    fn single_frame_tap(&mut self, tracker: &StateTracker) {
        if self.active.is_some() {
            return;
        }
        if let [contact] = tracker.ended_contacts() {
            if tracker.contact_started_this_frame(contact.id) {
                self.gestures.push(GestureEvent::PointerDown(contact.previous));
                self.gestures.push(GestureEvent::PointerUp(contact.position));
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
