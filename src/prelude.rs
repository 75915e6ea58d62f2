//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_camera::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::engine::{Engine, EngineBuilder};

// Camera
pub use crate::core::camera::{
    BoundsConfig, CameraController, CameraControllerBuilder, CameraState, DragConfig, Easing,
    InteractionPhase, OrthographicProjector, Projector, ScreenPoint, TapConfig, TapPolicy,
    WorldPoint, ZoomConfig,
};

// Clock, config and errors
pub use crate::core::clock::{Clock, ManualClock, SystemClock};
pub use crate::core::config::CameraConfig;
pub use crate::core::error::CameraError;
pub use crate::core::PlatformError;

// Input
pub use crate::core::input::{GestureEvent, InputSystem, MouseButton, RawInputEvent, TouchPhase};
