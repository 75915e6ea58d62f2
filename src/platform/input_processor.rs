//=========================================================================
// Input Processor
//=========================================================================
//
// Converts platform-specific Winit events into RawInputEvents.
//
// Architecture:
//   Winit Events → InputProcessor → RawInputEvent (core type) → InputBuffer
//
// Positions are physical pixels, top-left origin, the same space the
// camera's projector expects. Touch contacts are counted so the platform
// log can show when a gesture goes beyond two fingers.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;
use winit::event::{
    ElementState, MouseButton as WinitMouseButton, Touch, TouchPhase as WinitTouchPhase,
};

//=== Internal Dependencies ===============================================

use crate::core::input::{MouseButton, RawInputEvent, TouchPhase};

//=== InputProcessor ======================================================

/// Converts Winit events to core RawInputEvents.
pub(crate) struct InputProcessor {
    active_contacts: usize,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self { active_contacts: 0 }
    }

    pub(crate) fn active_contacts(&self) -> usize {
        self.active_contacts
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a Winit mouse button event.
    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> RawInputEvent {
        let button = MouseButton::from(button);

        match state {
            ElementState::Pressed => RawInputEvent::MouseButtonDown { button },
            ElementState::Released => RawInputEvent::MouseButtonUp { button },
        }
    }

    /// Creates a mouse move event (screen space).
    pub(crate) fn process_mouse_move(&self, x: f32, y: f32) -> RawInputEvent {
        RawInputEvent::MouseMoved { x, y }
    }

    /// Converts a Winit touch event and updates the contact count.
    pub(crate) fn process_touch(&mut self, touch: &Touch) -> RawInputEvent {
        let phase = TouchPhase::from(touch.phase);

        match phase {
            TouchPhase::Started => {
                self.active_contacts += 1;
                if self.active_contacts > 2 {
                    trace!(
                        target: "platform::input",
                        "{} contacts down, extra contacts are ignored by the camera",
                        self.active_contacts
                    );
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.active_contacts = self.active_contacts.saturating_sub(1);
            }
            TouchPhase::Moved => {}
        }

        RawInputEvent::Touch {
            id: touch.id,
            phase,
            x: touch.location.x as f32,
            y: touch.location.y as f32,
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit mouse buttons to core buttons.
///
/// Left/Right/Middle mapped directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

impl From<WinitTouchPhase> for TouchPhase {
    fn from(phase: WinitTouchPhase) -> Self {
        match phase {
            WinitTouchPhase::Started => TouchPhase::Started,
            WinitTouchPhase::Moved => TouchPhase::Moved,
            WinitTouchPhase::Ended => TouchPhase::Ended,
            WinitTouchPhase::Cancelled => TouchPhase::Cancelled,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
