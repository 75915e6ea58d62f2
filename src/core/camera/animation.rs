//=========================================================================
// Camera Animation
//=========================================================================
//
// Resumable multi-tick pan/zoom toward a target.
//
// Holds everything needed to resume on the next tick: start and target
// transforms, elapsed time, duration, easing and a cooperative cancel
// flag. The controller advances it once per tick; nothing runs in the
// background.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::trace;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::state::CameraState;
use crate::core::error::CameraError;

//=== Easing ==============================================================

/// Interpolation curve for animations. Input and output lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Fast start, slow end.
    QuadraticOut,
    /// Slow start and end.
    #[default]
    SmoothStep,
}

impl Easing {
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Easing::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }
}

//=== AnimationConfig =====================================================

/// Defaults for programmatic camera moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Duration used by `pan_to` callers that don't pick one, in seconds.
    pub default_duration: f32,
    pub easing: Easing,
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<(), CameraError> {
        if !(self.default_duration.is_finite() && self.default_duration >= 0.0) {
            return Err(CameraError::InvalidParameter {
                name: "default_duration",
                value: self.default_duration,
            });
        }
        Ok(())
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            default_duration: 0.5,
            easing: Easing::SmoothStep,
        }
    }
}

//=== AnimationProgress ===================================================

/// Result of advancing an animation by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationProgress {
    /// Still running; apply this intermediate state.
    Running(CameraState),

    /// Reached the target; apply this final state.
    Finished(CameraState),

    /// Cancel flag was observed; camera stays where it is.
    Cancelled,
}

//=== CameraAnimation =====================================================

/// Explicit resumable animation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraAnimation {
    start: CameraState,
    target: CameraState,
    elapsed: f32,
    duration: f32,
    easing: Easing,
    cancelled: bool,
}

impl CameraAnimation {
    /// Creates an animation from `start` to `target` over `duration` seconds.
    ///
    /// Negative or non-finite durations are treated as zero (finish on the
    /// next tick).
    pub fn new(start: CameraState, target: CameraState, duration: f32, easing: Easing) -> Self {
        let duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
        Self {
            start,
            target,
            elapsed: 0.0,
            duration,
            easing,
            cancelled: false,
        }
    }

    pub fn target(&self) -> CameraState {
        self.target
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Sets the cancel flag; honoured at the next [`advance`](Self::advance).
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Resumes the animation for `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> AnimationProgress {
        if self.cancelled {
            return AnimationProgress::Cancelled;
        }

        if dt > 0.0 && dt.is_finite() {
            self.elapsed += dt;
        }

        if self.elapsed >= self.duration {
            return AnimationProgress::Finished(self.target);
        }

        let t = self.easing.evaluate(self.elapsed / self.duration);
        let state = CameraState {
            position: self.start.position.lerp(self.target.position, t),
            zoom_size: self.start.zoom_size + (self.target.zoom_size - self.start.zoom_size) * t,
        };

        trace!("animation {:.3}/{:.3}s -> {state:?}", self.elapsed, self.duration);
        AnimationProgress::Running(state)
    }
}

/// Target that moves to `position` and keeps the zoom of `from`.
pub fn pan_target(from: CameraState, position: Vec2) -> CameraState {
    CameraState { position, ..from }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn state(x: f32, y: f32, zoom: f32) -> CameraState {
        CameraState::new(Vec2::new(x, y), zoom)
    }

    //=====================================================================
    // Easing
    //=====================================================================

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::QuadraticOut, Easing::SmoothStep] {
            assert_eq!(easing.evaluate(0.0), 0.0, "{easing:?}");
            assert!(approx_eq(easing.evaluate(1.0), 1.0), "{easing:?}");
        }
    }

    #[test]
    fn easing_clamps_input() {
        assert_eq!(Easing::Linear.evaluate(-2.0), 0.0);
        assert_eq!(Easing::Linear.evaluate(3.0), 1.0);
    }

    #[test]
    fn smoothstep_is_symmetric_at_midpoint() {
        assert!(approx_eq(Easing::SmoothStep.evaluate(0.5), 0.5));
    }

    //=====================================================================
    // Advancing
    //=====================================================================

    #[test]
    fn linear_animation_interpolates_both_channels() {
        let mut anim = CameraAnimation::new(state(0.0, 0.0, 10.0), state(4.0, -2.0, 6.0), 1.0, Easing::Linear);
        match anim.advance(0.25) {
            AnimationProgress::Running(s) => {
                assert!(approx_eq(s.position.x, 1.0));
                assert!(approx_eq(s.position.y, -0.5));
                assert!(approx_eq(s.zoom_size, 9.0));
            }
            other => panic!("expected running, got {other:?}"),
        }
    }

    #[test]
    fn finishes_exactly_on_target() {
        let target = state(4.0, -2.0, 6.0);
        let mut anim = CameraAnimation::new(state(0.0, 0.0, 10.0), target, 0.5, Easing::SmoothStep);
        assert_eq!(anim.target(), target);
        assert!(matches!(anim.advance(0.3), AnimationProgress::Running(_)));
        assert_eq!(anim.advance(0.3), AnimationProgress::Finished(target));
    }

    #[test]
    fn zero_duration_finishes_on_first_tick() {
        let target = state(1.0, 1.0, 5.0);
        let mut anim = CameraAnimation::new(state(0.0, 0.0, 5.0), target, -3.0, Easing::Linear);
        assert_eq!(anim.duration(), 0.0);
        assert_eq!(anim.advance(0.0), AnimationProgress::Finished(target));
    }

    #[test]
    fn zero_dt_does_not_progress() {
        let mut anim = CameraAnimation::new(state(0.0, 0.0, 5.0), state(1.0, 0.0, 5.0), 1.0, Easing::Linear);
        anim.advance(0.0);
        assert_eq!(anim.elapsed(), 0.0);
    }

    #[test]
    fn cancel_is_observed_on_next_advance() {
        let mut anim = CameraAnimation::new(state(0.0, 0.0, 5.0), state(1.0, 0.0, 5.0), 1.0, Easing::Linear);
        anim.cancel();
        assert!(anim.is_cancelled());
        assert_eq!(anim.advance(0.1), AnimationProgress::Cancelled);
    }

    #[test]
    fn pan_target_keeps_zoom() {
        let target = pan_target(state(0.0, 0.0, 7.0), Vec2::new(3.0, 3.0));
        assert_eq!(target, state(3.0, 3.0, 7.0));
    }

    #[test]
    fn config_rejects_negative_duration() {
        let config = AnimationConfig { default_duration: -1.0, ..AnimationConfig::default() };
        assert!(config.validate().is_err());
    }
}
