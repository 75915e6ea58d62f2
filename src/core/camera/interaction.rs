//=========================================================================
// Interaction State
//=========================================================================
//
// The single tagged state that decides who writes the camera each tick.
//
// Priority (highest first):
//   Pinching > Pressed/Dragging > Decelerating > Animating > Idle
//
// A higher-priority interaction always replaces a lower one; user input
// (press or pinch) replaces anything. Because only one variant can be
// live, two writers can never touch the camera in the same tick.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::animation::CameraAnimation;
use super::deceleration::DecelerationState;
use super::drag::DragSession;

//=== Interaction =========================================================

/// Current owner of the camera transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,

    /// Pointer down, drag threshold not yet crossed.
    Pressed(DragSession),

    /// Pointer down, threshold crossed.
    Dragging(DragSession),

    /// Two contacts active this tick.
    Pinching,

    /// Post-release momentum.
    Decelerating(DecelerationState),

    /// Programmatic pan/zoom.
    Animating(CameraAnimation),
}

//=== InteractionPhase ====================================================

/// Payload-free view of [`Interaction`], ordered by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InteractionPhase {
    Idle,
    Animating,
    Decelerating,
    Pressed,
    Dragging,
    Pinching,
}

impl Interaction {
    pub fn phase(&self) -> InteractionPhase {
        match self {
            Interaction::Idle => InteractionPhase::Idle,
            Interaction::Pressed(_) => InteractionPhase::Pressed,
            Interaction::Dragging(_) => InteractionPhase::Dragging,
            Interaction::Pinching => InteractionPhase::Pinching,
            Interaction::Decelerating(_) => InteractionPhase::Decelerating,
            Interaction::Animating(_) => InteractionPhase::Animating,
        }
    }

    /// The live pointer session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Interaction::Pressed(s) | Interaction::Dragging(s) => Some(s),
            _ => None,
        }
    }

    /// Whether user input currently owns the camera.
    pub fn is_user_driven(&self) -> bool {
        matches!(
            self,
            Interaction::Pressed(_) | Interaction::Dragging(_) | Interaction::Pinching
        )
    }

    /// Whether a programmatic animation may start (it would not preempt
    /// anything of higher priority).
    pub fn accepts_animation(&self) -> bool {
        matches!(self, Interaction::Idle | Interaction::Animating(_))
    }

    /// Wraps a session in `Pressed` or `Dragging` according to its state.
    pub fn from_session(session: DragSession) -> Self {
        if session.is_dragging() {
            Interaction::Dragging(session)
        } else {
            Interaction::Pressed(session)
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
