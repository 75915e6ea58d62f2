//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for the camera systems running on the logic
// (non-platform) thread.
//
// Responsibilities:
// - Own the InputSystem and the CameraController
// - Receive and process platform events via the bounded channel
// - Maintain deterministic pacing using a fixed tick rate (TPS)
// - Publish one CameraState snapshot per tick for the renderer
//
// Notes:
// The orchestrator runs independently from the platform layer.
// It owns each subsystem directly and updates them at a fixed rate
// in a background thread. Communication with the platform occurs only
// through message passing, so the camera never sees winit types.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod camera;
pub mod clock;
pub mod config;
pub mod error;
pub mod input;
pub(crate) mod platform_bridge;

pub use platform_bridge::PlatformError;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::{info, trace};

//=== Internal Modules ====================================================

use camera::{CameraController, CameraState};
use clock::{Clock, SystemClock};
use input::{InputSystem, RawInputEvent};
use platform_bridge::{EventCollector, PlatformEvent, TickControl};

//=== CoreSystemsOrchestrator =============================================
//
// Manages the lifetime and update scheduling of the core systems.
//
pub(crate) struct CoreSystemsOrchestrator {
    input: InputSystem,
    camera: CameraController,
    states: Sender<CameraState>,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------
    //
    // Takes ownership of a ready controller; does not yet start the thread.
    //
    pub fn new(camera: CameraController, states: Sender<CameraState>) -> Self {
        Self {
            input: InputSystem::new(),
            camera,
            states,
        }
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread that ticks the camera at a fixed update
    // frequency (TPS - ticks per second).
    //
    // Each tick:
    //  1. Collects platform events (input batches, resize, shutdown)
    //  2. Normalizes input and advances the camera by the measured dt
    //  3. Publishes the camera snapshot
    //  4. Sleeps to maintain fixed pacing
    //
    pub fn spawn_core_thread(
        mut self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut collector = EventCollector::new(receiver);
            let mut clock = SystemClock::new();

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!("Core thread exiting.");
                    break;
                }

                //--- Step 2-3: Update camera and publish -------------------
                if let Some((width, height)) = collector.resized() {
                    self.camera.set_viewport(width, height);
                }
                self.tick(collector.batches(), &mut clock);

                //--- Step 4: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }

    //--- tick() -----------------------------------------------------------
    //
    // One logic frame: raw batches → gestures → camera → snapshot.
    //
    fn tick(&mut self, batches: &[Vec<RawInputEvent>], clock: &mut dyn Clock) {
        let gestures = self.input.process_frame(batches);
        self.camera.advance(clock, gestures);
        self.publish();
    }

    fn publish(&self) {
        match self.states.try_send(self.camera.current_camera_state()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => trace!("Camera snapshot dropped, consumer behind"),
            Err(TrySendError::Disconnected(_)) => trace!("No camera snapshot consumer"),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
