//=========================================================================
// Aetheric Camera — Library Root
//
// Pan, pinch-zoom and momentum camera control for 2D orthographic views.
//
// Responsibilities:
// - Expose the platform-independent camera core (`core`)
// - Provide the windowed runtime facade (`Engine`, `EngineBuilder`)
// - Keep the winit integration (`platform`) hidden from end users
//
// Typical usage (headless, host-driven ticks):
// ```no_run
// use aetheric_camera::prelude::*;
//
// let mut camera = CameraController::builder()
//     .with_projector(OrthographicProjector::new(800.0, 600.0))
//     .with_config(CameraConfig::load("camera.toml")?)
//     .build()?;
//
// let mut input = InputSystem::new();
// let mut clock = SystemClock::new();
// loop {
//     let gestures = input.process_frame(&[/* raw events from the host */]);
//     camera.advance(&mut clock, gestures);
//     let _state = camera.current_camera_state();
// }
// # Ok::<(), CameraError>(())
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the camera, input, config and error types. It has no
// windowing dependency and can be driven by any host loop.
//
pub mod core;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the winit integration (window, event loop, input
// conversion) and is kept private.
//
// `engine` defines the runtime entry point and its builder.
//
mod engine;
mod platform;

pub mod prelude;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
