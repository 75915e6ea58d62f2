//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the camera core thread.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  Winit Event Loop        │    │  Core Systems        │
//  │   ↓                      │    │                      │
//  │  InputProcessor          │    │  InputSystem         │
//  │   ├─ Mouse buttons       │    │  ↓                   │
//  │   ├─ Cursor moves        │    │  InputNormalizer     │
//  │   └─ Touch contacts      │    │  ↓                   │
//  │   ↓                      │    │  CameraController    │
//  │  InputBuffer             │    │  ↓                   │
//  │   ├─ ordered: Vec<>      │    │  CameraState ──────► │ camera_states()
//  │   └─ pending moves: Set<>│    └──────────────────────┘
//  │   ↓                      │             ↑
//  │  RedrawRequested         │             │
//  │   ↓ (flush)              │             │
//  │  Bounded channel ────────┼─────────────┘
//  └──────────────────────────┘    PlatformEvent
//
//  Frame Boundary: RedrawRequested
//    → All buffered input sent atomically
//    → Core processes at fixed TPS (independent of refresh rate)
//    → Empty buffers NOT sent
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: Batches all input atomically,
//   ensuring deterministic order even with high event rates
// - **Resize forwarded immediately**: The projector must know the new
//   viewport before the next drag delta is computed
// - **Graceful channel disconnect**: If core thread dies, platform logs
//   warning but continues running to allow window closure
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Platform ============================================================

/// Window manager and input event aggregator.
///
/// Runs on the main thread (Winit requirement on macOS/iOS) and sends
/// batched events to the core thread over the bounded channel.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(sender, title)` - initializes subsystems
/// 2. **Execution**: `platform.run()` - runs the event loop until exit
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: User closes window → sends `WindowClosed` → exits
///
/// # Thread Safety
///
/// This type is NOT Send/Sync - it must remain on the main thread.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Title used when the window is created.
    title: String,

    /// Buffers input in arrival order until frame boundary.
    buffer: InputBuffer,

    /// Channel to send events to core thread.
    event_sender: Sender<PlatformEvent>,

    /// Converts Winit events to core RawInputEvents.
    input_processor: InputProcessor,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance with the given event sender.
    ///
    /// Does not create window yet - that happens lazily in `resumed()`.
    pub fn new(event_sender: Sender<PlatformEvent>, title: impl Into<String>) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            title: title.into(),
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop on the calling thread until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop can't be created or
    /// terminates abnormally.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Flushes buffered input events to the core thread.
    ///
    /// Called on every `RedrawRequested`. If the channel is disconnected
    /// (core thread exited early) the events are dropped with a warning so
    /// the user can still close the window. If the channel is full the
    /// platform blocks until the core catches up; input is never dropped
    /// while the core is alive.
    fn flush_input_buffer(&mut self) {
        if let Some(events) = self.buffer.drain() {
            let count = events.len();
            let continuous_count = events.iter().filter(|e| e.is_continuous()).count();

            trace!(
                target: "platform::input",
                "Flushing {} events ({} continuous)",
                count,
                continuous_count
            );

            if self.event_sender.send(PlatformEvent::Inputs(events)).is_err() {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    count
                );
            }
        }
    }

    fn send_resize(&self, width: u32, height: u32) {
        let event = PlatformEvent::Resized { width: width as f32, height: height as f32 };
        if self.event_sender.send(event).is_err() {
            warn!(target: "platform", "Channel disconnected, dropping resize {}x{}", width, height);
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet and reports its size to
    /// the core so the projector matches the real viewport.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(800, 600));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    size.width,
                    size.height,
                    window.scale_factor()
                );
                self.send_resize(size.width, size.height);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                // Notify core of fatal error
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    /// Drops half-collected input; a press can't survive suspension.
    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        if !self.buffer.is_empty() {
            debug!(target: "platform::input", "Suspended, discarding {} buffered events", self.buffer.len());
        }
        self.buffer.clear();
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                debug!(target: "platform", "Window resized to {}x{}", size.width, size.height);
                self.send_resize(size.width, size.height);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self
                    .input_processor
                    .process_mouse_move(position.x as f32, position.y as f32);
                self.buffer.push(event);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(*button, *state);
                self.buffer.push(event);
            }

            WindowEvent::Touch(touch) => {
                let event = self.input_processor.process_touch(touch);
                trace!(
                    target: "platform::input",
                    "Touch {:?} ({} contacts down)",
                    event,
                    self.input_processor.active_contacts()
                );
                self.buffer.push(event);
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush all buffered input
                self.flush_input_buffer();

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {
                // Ignore: Focused, KeyboardInput, etc. (not needed for the camera)
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{MouseButton, RawInputEvent};
    use crossbeam_channel::unbounded;

    fn press() -> RawInputEvent {
        RawInputEvent::MouseButtonDown { button: MouseButton::Left }
    }

    //=====================================================================
    // PlatformEvent Tests
    //=====================================================================

    #[test]
    fn platform_event_is_cloneable_and_debug() {
        let event = PlatformEvent::Resized { width: 10.0, height: 20.0 };
        let cloned = event.clone();
        assert!(format!("{:?}", cloned).contains("Resized"));

        let debug_str = format!("{:?}", PlatformEvent::WindowClosed);
        assert!(debug_str.contains("WindowClosed"));
    }

    //=====================================================================
    // Platform Tests
    //=====================================================================

    #[test]
    fn platform_creation() {
        let (tx, _rx) = unbounded();
        let platform = Platform::new(tx, "test");
        assert!(platform.window().is_none(), "Window should be created lazily");
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, "test");

        platform.flush_input_buffer();

        assert!(rx.try_recv().is_err(), "No events should be sent for empty buffer");
    }

    #[test]
    fn flush_sends_buffered_events() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, "test");

        platform.buffer.push(press());
        platform.buffer.push(RawInputEvent::MouseMoved { x: 1.0, y: 2.0 });

        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs(events)) => {
                assert_eq!(events.len(), 2, "Should have both events");
                assert_eq!(events[0], press(), "Press arrived first");
                assert!(events[1].is_continuous());
            }
            other => panic!("Expected Inputs event, got {:?}", other),
        }
    }

    #[test]
    fn flush_handles_disconnected_channel() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, "test");

        platform.buffer.push(press());
        drop(rx);

        // Should not panic, just log warning
        platform.flush_input_buffer();
    }

    #[test]
    fn multiple_flushes_clear_buffer() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, "test");

        platform.buffer.push(press());

        platform.flush_input_buffer();
        platform.flush_input_buffer();

        assert!(rx.try_recv().is_ok(), "First flush should send");
        assert!(rx.try_recv().is_err(), "Second flush should not send");
    }

    #[test]
    fn resize_is_forwarded_as_floats() {
        let (tx, rx) = unbounded();
        let platform = Platform::new(tx, "test");

        platform.send_resize(1280, 720);

        match rx.try_recv() {
            Ok(PlatformEvent::Resized { width, height }) => {
                assert_eq!((width, height), (1280.0, 720.0));
            }
            other => panic!("Expected Resized event, got {:?}", other),
        }
    }

    //=====================================================================
    // PlatformError Tests
    //=====================================================================

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error + 'static>() {}
        assert_error::<PlatformError>();
    }
}
