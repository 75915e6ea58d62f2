//=========================================================================
// Camera Controller
//=========================================================================
//
// Single writer of the camera transform. One `tick()` per frame:
//
//   1. sanitize dt, age the live press
//   2. apply the tick's gestures in order
//        - a pinch in the tick suppresses every pointer gesture
//        - PointerDown cancels momentum/animation and starts a session
//        - PointerMove pans (content follows the pointer), then clamps
//        - PointerUp arms momentum (drag) or evaluates a tap (press)
//   3. step the autonomous owner (momentum or animation), then clamp
//
// Which of these may touch the camera is decided by `Interaction`; only
// one variant is live, so there is never more than one writer per tick.
//
// Construction goes through `CameraControllerBuilder`, which fails fast on
// missing collaborators or invalid configuration.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use super::animation::{pan_target, AnimationConfig, AnimationProgress, CameraAnimation};
use super::bounds::BoundsConfig;
use super::deceleration::{DecelerationState, DecelerationStep};
use super::drag::{DragConfig, DragOutcome, DragSession};
use super::interaction::{Interaction, InteractionPhase};
use super::projector::Projector;
use super::state::{CameraState, ScreenPoint, WorldPoint};
use super::tap::{TapCallback, TapConfig, TapDispatcher};
use super::zoom::{ZoomConfig, ZoomController};
use crate::core::clock::Clock;
use crate::core::config::CameraConfig;
use crate::core::error::CameraError;
use crate::core::input::GestureEvent;

//=========================================================================
// CameraController
//=========================================================================

/// Owns [`CameraState`] and every state machine that mutates it.
pub struct CameraController {
    state: CameraState,
    interaction: Interaction,

    projector: Box<dyn Projector>,
    bounds: BoundsConfig,
    zoom: ZoomController,
    drag: DragConfig,
    animation: AnimationConfig,
    taps: TapDispatcher,
}

impl CameraController {
    pub fn builder() -> CameraControllerBuilder {
        CameraControllerBuilder::new()
    }

    //=====================================================================
    // Per-Tick Entry Points
    //=====================================================================

    /// Advances every state machine by one frame of `dt` seconds.
    ///
    /// `gestures` are the tick's normalized events, in arrival order.
    /// Negative or non-finite `dt` is treated as zero.
    pub fn tick(&mut self, dt: f32, gestures: &[GestureEvent]) {
        let dt = sanitize_dt(dt);
        let pinching = gestures.iter().any(GestureEvent::is_pinch);

        if let Interaction::Pressed(session) | Interaction::Dragging(session) = &mut self.interaction {
            session.age(dt);
        }

        for gesture in gestures {
            match *gesture {
                GestureEvent::PinchUpdate { previous, current } => self.on_pinch(previous, current),
                _ if pinching => trace!("{gesture:?} suppressed by pinch"),
                GestureEvent::PointerDown(at) => self.on_pointer_down(at),
                GestureEvent::PointerMove(to) => self.on_pointer_move(to, dt),
                GestureEvent::PointerUp(at) => self.on_pointer_up(at, dt),
            }
        }

        if !pinching && self.interaction == Interaction::Pinching {
            debug!("pinch ended at zoom {:.3}", self.state.zoom_size);
            self.interaction = Interaction::Idle;
        }

        self.step_autonomous(dt);
    }

    /// [`tick`](Self::tick) with `dt` read from `clock`.
    pub fn advance(&mut self, clock: &mut dyn Clock, gestures: &[GestureEvent]) {
        let dt = clock.elapsed_since_last_tick();
        self.tick(dt, gestures);
    }

    //=====================================================================
    // Programmatic Control
    //=====================================================================

    /// Animates the camera to `target` (clamped to bounds), keeping zoom.
    ///
    /// `None` uses the configured default duration. Returns `false` when a
    /// user interaction or momentum currently owns the camera.
    pub fn pan_to(&mut self, target: WorldPoint, duration: Option<f32>) -> bool {
        if !target.is_finite() {
            warn!("pan_to rejected: non-finite target {target}");
            return false;
        }
        let target = pan_target(self.state, self.bounds.clamp(target));
        self.start_animation("pan_to", target, duration.unwrap_or(self.animation.default_duration))
    }

    /// Animates the zoom to `zoom_size` (clamped to range), keeping position.
    pub fn zoom_to(&mut self, zoom_size: f32, duration: Option<f32>) -> bool {
        if !zoom_size.is_finite() {
            warn!("zoom_to rejected: non-finite size {zoom_size}");
            return false;
        }
        let target = CameraState {
            zoom_size: self.zoom.config().clamp(zoom_size),
            ..self.state
        };
        self.start_animation("zoom_to", target, duration.unwrap_or(self.animation.default_duration))
    }

    /// Animates to the far end of the zoom range at the configured zoom speed.
    pub fn toggle_zoom(&mut self) -> bool {
        let target = self.zoom.toggle_target(self.state.zoom_size);
        let duration = self.zoom.travel_time(self.state.zoom_size, target);
        let target = CameraState { zoom_size: target, ..self.state };
        self.start_animation("toggle_zoom", target, duration)
    }

    /// Flags the running animation for cancellation; it stops at the next
    /// tick and leaves the camera where it is.
    ///
    /// Returns `false` if nothing was animating.
    pub fn cancel_animation(&mut self) -> bool {
        match &mut self.interaction {
            Interaction::Animating(animation) if !animation.is_cancelled() => {
                animation.cancel();
                debug!("animation cancel requested");
                true
            }
            _ => false,
        }
    }

    /// Re-arms a one-shot tap latch.
    pub fn rearm_tap(&mut self) {
        self.taps.rearm();
    }

    /// Forwards a viewport resize to the projector.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        debug!("viewport resized to {width}x{height}");
        self.projector.set_viewport(width, height);
    }

    //=====================================================================
    // Queries
    //=====================================================================

    /// Snapshot for the renderer.
    pub fn current_camera_state(&self) -> CameraState {
        self.state
    }

    pub fn phase(&self) -> InteractionPhase {
        self.interaction.phase()
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Live drag velocity or residual momentum, zero otherwise.
    pub fn velocity(&self) -> Vec2 {
        match &self.interaction {
            Interaction::Pressed(session) | Interaction::Dragging(session) => session.velocity(),
            Interaction::Decelerating(momentum) => momentum.velocity(),
            _ => Vec2::ZERO,
        }
    }

    pub fn taps(&self) -> &TapDispatcher {
        &self.taps
    }

    pub fn bounds(&self) -> &BoundsConfig {
        &self.bounds
    }

    pub fn zoom_config(&self) -> &ZoomConfig {
        self.zoom.config()
    }

    //=====================================================================
    // Gesture Handlers
    //=====================================================================

    fn on_pointer_down(&mut self, at: ScreenPoint) {
        match self.interaction.phase() {
            InteractionPhase::Idle => {}
            phase => debug!("press preempts {phase:?}"),
        }
        self.interaction = Interaction::Pressed(DragSession::begin(at));
    }

    fn on_pointer_move(&mut self, to: ScreenPoint, dt: f32) {
        let Some(mut session) = self.interaction.session().copied() else {
            trace!("move without press ignored");
            return;
        };

        let delta = session.update(to, &self.state, self.projector.as_ref(), dt, self.drag.drag_threshold);
        if delta != Vec2::ZERO {
            self.state.position = self.bounds.clamp(self.state.position + delta);
        }
        self.interaction = Interaction::from_session(session);
    }

    fn on_pointer_up(&mut self, at: ScreenPoint, dt: f32) {
        let Some(current) = self.interaction.session().map(DragSession::current) else {
            trace!("release without press ignored");
            return;
        };
        // Motion folded into the release still pans
        if current != at {
            self.on_pointer_move(at, dt);
        }

        let Some(session) = self.interaction.session().copied() else {
            return;
        };
        self.interaction = Interaction::Idle;

        match session.end() {
            DragOutcome::Dragged { velocity } => {
                self.interaction = Interaction::Decelerating(DecelerationState::new(velocity));
            }
            DragOutcome::Pressed { held_for } => {
                self.taps.on_press_released(held_for);
            }
        }
    }

    fn on_pinch(&mut self, previous: f32, current: f32) {
        if self.interaction != Interaction::Pinching {
            debug!("pinch started, {:?} cancelled", self.interaction.phase());
            self.interaction = Interaction::Pinching;
        }

        if let Some(zoom_size) = self.zoom.apply_pinch(self.state.zoom_size, previous, current) {
            self.state.zoom_size = zoom_size;
        }
    }

    //=====================================================================
    // Autonomous Owners
    //=====================================================================

    fn step_autonomous(&mut self, dt: f32) {
        let settled = match &mut self.interaction {
            Interaction::Decelerating(momentum) => {
                match momentum.step(dt, self.drag.deceleration_rate, self.drag.stop_speed) {
                    DecelerationStep::Moving(displacement) => {
                        self.state.position = self.bounds.clamp(self.state.position + displacement);
                        false
                    }
                    DecelerationStep::Stopped => {
                        debug!("momentum settled at {}", self.state.position);
                        true
                    }
                }
            }

            Interaction::Animating(animation) => match animation.advance(dt) {
                AnimationProgress::Running(frame) => {
                    self.state = constrain(&self.bounds, &self.zoom, frame);
                    false
                }
                AnimationProgress::Finished(target) => {
                    self.state = constrain(&self.bounds, &self.zoom, target);
                    debug!("animation finished at {:?}", self.state);
                    true
                }
                AnimationProgress::Cancelled => {
                    debug!("animation cancelled at {:?}", self.state);
                    true
                }
            },

            _ => false,
        };

        if settled {
            self.interaction = Interaction::Idle;
        }
    }

    fn start_animation(&mut self, source: &str, target: CameraState, duration: f32) -> bool {
        if !self.interaction.accepts_animation() {
            warn!("{source} rejected while {:?}", self.interaction.phase());
            return false;
        }
        if let Interaction::Animating(_) = self.interaction {
            debug!("{source} replaces running animation");
        }

        let animation = CameraAnimation::new(self.state, target, duration, self.animation.easing);
        debug!("{source}: {:?} -> {:?} over {:.3}s", self.state, target, animation.duration());
        self.interaction = Interaction::Animating(animation);
        true
    }
}

fn constrain(bounds: &BoundsConfig, zoom: &ZoomController, state: CameraState) -> CameraState {
    CameraState {
        position: bounds.clamp(state.position),
        zoom_size: zoom.config().clamp(state.zoom_size),
    }
}

fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        trace!("degenerate dt {dt} treated as zero");
        0.0
    }
}

//=========================================================================
// CameraControllerBuilder
//=========================================================================

/// Builder for [`CameraController`].
///
/// Projector, bounds and zoom configuration are required; drag, tap and
/// animation tuning fall back to defaults.
pub struct CameraControllerBuilder {
    projector: Option<Box<dyn Projector>>,
    bounds: Option<BoundsConfig>,
    zoom: Option<ZoomConfig>,
    drag: DragConfig,
    tap: TapConfig,
    animation: AnimationConfig,
    initial_state: Option<CameraState>,
    on_tap: Option<TapCallback>,
}

impl CameraControllerBuilder {
    pub fn new() -> Self {
        Self {
            projector: None,
            bounds: None,
            zoom: None,
            drag: DragConfig::default(),
            tap: TapConfig::default(),
            animation: AnimationConfig::default(),
            initial_state: None,
            on_tap: None,
        }
    }

    pub fn with_projector(self, projector: impl Projector + 'static) -> Self {
        self.with_boxed_projector(Box::new(projector))
    }

    pub fn with_boxed_projector(mut self, projector: Box<dyn Projector>) -> Self {
        self.projector = Some(projector);
        self
    }

    pub fn with_bounds(mut self, bounds: BoundsConfig) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_zoom(mut self, zoom: ZoomConfig) -> Self {
        self.zoom = Some(zoom);
        self
    }

    pub fn with_drag(mut self, drag: DragConfig) -> Self {
        self.drag = drag;
        self
    }

    pub fn with_tap(mut self, tap: TapConfig) -> Self {
        self.tap = tap;
        self
    }

    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Applies every section of a loaded configuration.
    ///
    /// Absent bounds or zoom sections leave the builder's value in place,
    /// so `build` still reports them missing if nothing else set them.
    pub fn with_config(mut self, config: CameraConfig) -> Self {
        if let Some(bounds) = config.bounds {
            self.bounds = Some(bounds);
        }
        if let Some(zoom) = config.zoom {
            self.zoom = Some(zoom);
        }
        self.with_drag(config.drag)
            .with_tap(config.tap)
            .with_animation(config.animation)
    }

    /// Starting transform; clamped into bounds and zoom range on build.
    /// Defaults to the clamped origin, fully zoomed out.
    pub fn with_initial_state(mut self, state: CameraState) -> Self {
        self.initial_state = Some(state);
        self
    }

    pub fn on_tap(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_tap = Some(Box::new(callback));
        self
    }

    pub fn build(self) -> Result<CameraController, CameraError> {
        let projector = self.projector.ok_or(CameraError::MissingProjector)?;
        let bounds = self.bounds.ok_or(CameraError::MissingBounds)?;
        let zoom = self.zoom.ok_or(CameraError::MissingZoom)?;

        bounds.validate()?;
        zoom.validate()?;
        self.drag.validate()?;
        self.tap.validate()?;
        self.animation.validate()?;

        let initial = self
            .initial_state
            .unwrap_or_else(|| CameraState::new(Vec2::ZERO, zoom.zoom_out_size));
        if !initial.position.is_finite() {
            let bad = if initial.position.x.is_finite() { initial.position.y } else { initial.position.x };
            return Err(CameraError::InvalidParameter { name: "initial_position", value: bad });
        }
        if !initial.zoom_size.is_finite() {
            return Err(CameraError::InvalidParameter {
                name: "initial_zoom_size",
                value: initial.zoom_size,
            });
        }

        let state = CameraState::new(bounds.clamp(initial.position), zoom.clamp(initial.zoom_size));
        info!(
            "Camera controller ready at {} (zoom {:.3}, tap policy {:?})",
            state.position, state.zoom_size, self.tap.policy
        );

        Ok(CameraController {
            state,
            interaction: Interaction::Idle,
            projector,
            bounds,
            zoom: ZoomController::new(zoom),
            drag: self.drag,
            animation: self.animation,
            taps: TapDispatcher::new(self.tap, self.on_tap),
        })
    }
}

impl Default for CameraControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
