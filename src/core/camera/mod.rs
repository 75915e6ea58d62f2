//=========================================================================
// Camera
//
// Pan, pinch-zoom and momentum for a 2D orthographic camera.
//
// Responsibilities:
// - Own the camera transform (`CameraState`) and keep it inside bounds
// - Classify presses into taps and drags (`DragSession`, `TapDispatcher`)
// - Integrate post-release momentum (`DecelerationState`)
// - Map pinch separation onto zoom (`ZoomController`)
// - Run cancellable programmatic pans and zooms (`CameraAnimation`)
//
// Notes:
// `CameraController` is the only public writer; every other type here is a
// building block it drives once per tick.
//
//=========================================================================

//=== Submodules ==========================================================

mod animation;
mod bounds;
mod controller;
mod deceleration;
mod drag;
mod interaction;
mod projector;
mod state;
mod tap;
mod zoom;

//=== Public API ==========================================================

pub use animation::{pan_target, AnimationConfig, AnimationProgress, CameraAnimation, Easing};
pub use bounds::{clamp, BoundsConfig};
pub use controller::{CameraController, CameraControllerBuilder};
pub use deceleration::{DecelerationState, DecelerationStep};
pub use drag::{DragConfig, DragOutcome, DragSession};
pub use interaction::{Interaction, InteractionPhase};
pub use projector::{OrthographicProjector, Projector};
pub use state::{CameraState, ScreenPoint, WorldPoint};
pub use tap::{TapCallback, TapConfig, TapDispatcher, TapPolicy};
pub use zoom::{ZoomConfig, ZoomController};
