//=========================================================================
// Input Event Types
//
// Raw pointer/touch events from the platform layer and the abstract
// gestures the camera consumes.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    RawInputEvent (this module)
//         ↓
//    StateTracker (persistent pointer + contact state)
//         ↓
//    InputNormalizer
//         ↓
//    GestureEvent (this module) → CameraController
// ```
//
// Equality & hashing on `RawInputEvent` ignore coordinates for moves so
// the platform buffer can coalesce them (last position wins).
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== Internal Dependencies ===============================================

use crate::core::camera::ScreenPoint;

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// Only `Left` drives the camera; the rest are carried so the platform
/// layer doesn't have to filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Side buttons, thumb buttons, macro keys.
    Other,
}

//=== TouchPhase ==========================================================

/// Lifecycle stage of a single touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

//=== RawInputEvent =======================================================

/// Low-level input event from the platform layer.
///
/// # Equality Rules
///
/// ```text
/// MouseButtonDown{Left} == MouseButtonDown{Left}          ✓
/// MouseMoved{..}        == MouseMoved{..}                 ✓ (coords ignored)
/// Touch{id 1, Moved}    == Touch{id 1, Moved, other xy}   ✓ (coords ignored)
/// Touch{id 1, Moved}    == Touch{id 2, Moved}             ✗
/// Touch{id 1, Started}  == Touch{id 1, Moved}             ✗
/// ```
#[derive(Debug, Clone, Copy)]
pub enum RawInputEvent {
    /// Mouse button pressed.
    MouseButtonDown { button: MouseButton },

    /// Mouse button released.
    MouseButtonUp { button: MouseButton },

    /// Cursor moved. Screen space, pixels, top-left origin.
    MouseMoved { x: f32, y: f32 },

    /// Touch contact changed. Screen space, pixels, top-left origin.
    Touch { id: u64, phase: TouchPhase, x: f32, y: f32 },

    /// Unrecognized or unsupported event; ignored downstream.
    Unidentified,
}

impl RawInputEvent {
    /// Moves are continuous (coalescable); everything else is discrete.
    pub fn is_continuous(&self) -> bool {
        matches!(
            self,
            Self::MouseMoved { .. } | Self::Touch { phase: TouchPhase::Moved, .. }
        )
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for RawInputEvent {
    fn eq(&self, other: &Self) -> bool {
        use RawInputEvent::*;
        match (self, other) {
            (MouseButtonDown { button: a }, MouseButtonDown { button: b }) => a == b,
            (MouseButtonUp { button: a }, MouseButtonUp { button: b }) => a == b,
            // coordinates ignored, always equal
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (Touch { id: a, phase: pa, .. }, Touch { id: b, phase: pb, .. }) => a == b && pa == pb,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for RawInputEvent {}

/// Consistent with `PartialEq`: coordinates are never hashed.
impl Hash for RawInputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::MouseButtonDown { button } | Self::MouseButtonUp { button } => {
                button.hash(state);
            }
            Self::Touch { id, phase, .. } => {
                id.hash(state);
                phase.hash(state);
            }
            _ => {}
        }
    }
}

//=== GestureEvent ========================================================

/// Input-source-independent gesture consumed by the camera controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Single pointer pressed at a screen point.
    PointerDown(ScreenPoint),

    /// Single pointer held at a screen point (emitted every held tick).
    PointerMove(ScreenPoint),

    /// Single pointer released at a screen point.
    PointerUp(ScreenPoint),

    /// Two-contact separation changed from `previous` to `current` pixels.
    PinchUpdate { previous: f32, current: f32 },
}

impl GestureEvent {
    pub fn is_pinch(&self) -> bool {
        matches!(self, Self::PinchUpdate { .. })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    //--- Test Helpers -----------------------------------------------------

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn touch(id: u64, phase: TouchPhase, x: f32, y: f32) -> RawInputEvent {
        RawInputEvent::Touch { id, phase, x, y }
    }

    //=====================================================================
    // Equality
    //=====================================================================

    #[test]
    fn mouse_moved_ignores_coordinates() {
        let a = RawInputEvent::MouseMoved { x: 1.0, y: 2.0 };
        let b = RawInputEvent::MouseMoved { x: 300.0, y: 400.0 };
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn touch_equality_uses_id_and_phase() {
        assert_eq!(touch(1, TouchPhase::Moved, 0.0, 0.0), touch(1, TouchPhase::Moved, 9.0, 9.0));
        assert_ne!(touch(1, TouchPhase::Moved, 0.0, 0.0), touch(2, TouchPhase::Moved, 0.0, 0.0));
        assert_ne!(touch(1, TouchPhase::Started, 0.0, 0.0), touch(1, TouchPhase::Moved, 0.0, 0.0));
    }

    #[test]
    fn button_events_compare_by_button() {
        let left = RawInputEvent::MouseButtonDown { button: MouseButton::Left };
        let right = RawInputEvent::MouseButtonDown { button: MouseButton::Right };
        let left_up = RawInputEvent::MouseButtonUp { button: MouseButton::Left };
        assert_ne!(left, right);
        assert_ne!(left, left_up);
        assert_ne!(hash_of(&left), hash_of(&left_up));
    }

    /// Two contacts moving in the same frame must not coalesce into one.
    #[test]
    fn distinct_touch_moves_survive_set_insertion() {
        let mut set = HashSet::new();
        set.replace(touch(1, TouchPhase::Moved, 0.0, 0.0));
        set.replace(touch(2, TouchPhase::Moved, 0.0, 0.0));
        set.replace(touch(1, TouchPhase::Moved, 5.0, 5.0));
        assert_eq!(set.len(), 2);
    }

    //=====================================================================
    // Classification
    //=====================================================================

    #[test]
    fn moves_are_continuous() {
        assert!(RawInputEvent::MouseMoved { x: 0.0, y: 0.0 }.is_continuous());
        assert!(touch(1, TouchPhase::Moved, 0.0, 0.0).is_continuous());
        assert!(!touch(1, TouchPhase::Started, 0.0, 0.0).is_continuous());
        assert!(!RawInputEvent::MouseButtonUp { button: MouseButton::Left }.is_continuous());
    }

    #[test]
    fn pinch_classification() {
        assert!(GestureEvent::PinchUpdate { previous: 1.0, current: 2.0 }.is_pinch());
        assert!(!GestureEvent::PointerDown(ScreenPoint::ZERO).is_pinch());
    }
}
