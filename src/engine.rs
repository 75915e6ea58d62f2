//=========================================================================
// Aetheric Camera Engine
//
// Main entry point: a window, a logic thread running the camera, and a
// snapshot channel the renderer reads from.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ camera_states()
//         ├─ with_channel_capacity() └─ run(): spawns logic thread,
//         ├─ with_config()                    runs platform,
//         ├─ with_projector()                 blocks until exit
//         └─ on_tap()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::camera::{CameraController, CameraState, OrthographicProjector, Projector, TapCallback};
use crate::core::config::CameraConfig;
use crate::core::error::CameraError;
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::CoreSystemsOrchestrator;
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Config**: [`CameraConfig::default()`], which has no bounds or zoom
///   section; supply them with [`with_config`](Self::with_config) or
///   `build()` fails with [`CameraError::MissingBounds`]
/// - **Projector**: [`OrthographicProjector`] sized to the initial window,
///   updated on every resize
///
/// # Examples
///
/// ```no_run
/// use aetheric_camera::EngineBuilder;
/// use aetheric_camera::core::config::CameraConfig;
///
/// let config = CameraConfig::load("camera.toml")?;
/// let engine = EngineBuilder::new()
///     .with_tps(120.0)
///     .with_config(config)
///     .on_tap(|| println!("tap"))
///     .build()?;
///
/// let states = engine.camera_states();
/// std::thread::spawn(move || {
///     for state in states {
///         // hand `state` to the renderer
///         let _ = state;
///     }
/// });
///
/// engine.run()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    config: CameraConfig,
    projector: Option<Box<dyn Projector>>,
    initial_state: Option<CameraState>,
    on_tap: Option<TapCallback>,
    title: String,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            config: CameraConfig::default(),
            projector: None,
            initial_state: None,
            on_tap: None,
            title: String::from("Aetheric Camera"),
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the capacity of both the platform → core channel and the
    /// camera snapshot channel.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Camera tuning (bounds, zoom range, drag, taps, animation).
    ///
    /// Bounds and zoom are required.
    pub fn with_config(mut self, config: CameraConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the default orthographic projector.
    pub fn with_projector(mut self, projector: impl Projector + 'static) -> Self {
        self.projector = Some(Box::new(projector));
        self
    }

    pub fn with_initial_state(mut self, state: CameraState) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Callback fired on the logic thread when a tap is recognized.
    pub fn on_tap(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_tap = Some(Box::new(callback));
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds the engine instance.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError`] if the configuration is invalid or lacks
    /// bounds or zoom.
    pub fn build(self) -> Result<Engine, CameraError> {
        info!("Building engine (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        let projector = self
            .projector
            .unwrap_or_else(|| Box::new(OrthographicProjector::new(800.0, 600.0)));

        let mut camera = CameraController::builder()
            .with_boxed_projector(projector)
            .with_config(self.config);
        if let Some(state) = self.initial_state {
            camera = camera.with_initial_state(state);
        }
        if let Some(callback) = self.on_tap {
            camera = camera.on_tap(callback);
        }
        let camera = camera.build()?;

        let (state_tx, state_rx): (Sender<CameraState>, Receiver<CameraState>) =
            bounded(self.channel_capacity);

        Ok(Engine {
            orchestrator: CoreSystemsOrchestrator::new(camera, state_tx),
            camera_states: state_rx,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            title: self.title,
        })
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Camera runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem → CameraController → CameraState snapshots
///   │
///   └─► Platform (Event Loop)
///         └─► Window, pointer/touch polling, resize
///
/// Communication: bounded crossbeam channels
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    camera_states: Receiver<CameraState>,
    tps: f64,
    channel_capacity: usize,
    title: String,
}

impl Engine {
    /// Receiver of one [`CameraState`] per logic tick.
    ///
    /// Snapshots are dropped (never blocked on) while the receiver is full,
    /// so slow consumers only ever miss intermediate frames.
    pub fn camera_states(&self) -> Receiver<CameraState> {
        self.camera_states.clone()
    }

    //--- Execution --------------------------------------------------------

    /// Starts the engine runtime and blocks until the application exits.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the bounded channel for platform → core communication
    /// 2. Spawns logic thread running at configured TPS
    /// 3. Runs platform event loop (blocks here)
    /// 4. On window close: platform exits → `WindowClosed` → logic thread terminates
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop fails. The logic thread
    /// is still joined before returning.
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        info!("Platform channel created (capacity: {})", self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, self.title);
        info!("Platform initialized, entering event loop");

        let result = platform.run();
        if let Err(e) = &result {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        match core_handle.join() {
            Ok(()) => {
                info!("Core thread terminated cleanly");
            }
            Err(e) => {
                error!("Core thread panicked: {:?}", e);
            }
        }

        info!("Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::camera::{BoundsConfig, ZoomConfig};
    use glam::Vec2;

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.config, CameraConfig::default());
        assert!(builder.projector.is_none());
    }

    #[test]
    fn builder_with_tps() {
        let builder = EngineBuilder::new().with_tps(120.0);
        assert_eq!(builder.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        EngineBuilder::new().with_tps(-60.0);
    }

    #[test]
    fn builder_with_channel_capacity() {
        let builder = EngineBuilder::new().with_channel_capacity(256);
        assert_eq!(builder.channel_capacity, 256);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    fn config() -> CameraConfig {
        CameraConfig::new(BoundsConfig::new(Vec2::splat(-5.0), Vec2::splat(5.0)), ZoomConfig::default())
    }

    #[test]
    fn builder_build_creates_engine() {
        assert!(EngineBuilder::new().with_config(config()).build().is_ok());
    }

    #[test]
    fn builder_requires_bounds_and_zoom() {
        let result = EngineBuilder::new().build();
        assert!(matches!(result.err(), Some(CameraError::MissingBounds)));

        let mut without_zoom = config();
        without_zoom.zoom = None;
        let result = EngineBuilder::new().with_config(without_zoom).build();
        assert!(matches!(result.err(), Some(CameraError::MissingZoom)));
    }

    #[test]
    fn builder_rejects_invalid_config() {
        let mut config = config();
        config.zoom = Some(ZoomConfig::new(10.0, 5.0));

        let result = EngineBuilder::new().with_config(config).build();
        assert!(matches!(result.err(), Some(CameraError::InvalidZoomRange { .. })));
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let mut config = config();
        config.bounds = Some(BoundsConfig::new(Vec2::splat(-1.0), Vec2::splat(1.0)));

        let engine = EngineBuilder::new()
            .with_tps(120.0)
            .with_channel_capacity(256)
            .with_config(config)
            .with_projector(OrthographicProjector::new(320.0, 240.0))
            .with_initial_state(CameraState::new(Vec2::new(3.0, 0.0), 7.0))
            .on_tap(|| {})
            .with_title("demo")
            .build()
            .unwrap();

        assert_eq!(engine.tps, 120.0);
        assert_eq!(engine.channel_capacity, 256);
        assert_eq!(engine.title, "demo");
        assert_eq!(engine.camera_states().capacity(), Some(256));
    }
}
