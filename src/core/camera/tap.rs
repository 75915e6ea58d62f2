//=========================================================================
// Tap Dispatcher
//=========================================================================
//
// Decides whether a completed press (no drag) counts as a tap, and fires
// the host callback when it does.
//
// Policy:
// - `OneShot`: the first qualifying tap fires, later ones are suppressed
//   until `rearm()` is called.
// - `Repeatable`: every qualifying tap fires.
//
// An optional duration limit turns long presses into non-taps.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::core::error::CameraError;

//=== TapPolicy ===========================================================

/// Re-arming behaviour of the tap callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TapPolicy {
    /// Fire once per controller lifetime unless re-armed externally.
    #[default]
    OneShot,

    /// Fire on every tap.
    Repeatable,
}

//=== TapConfig ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TapConfig {
    pub policy: TapPolicy,

    /// Presses held longer than this many seconds are not taps.
    pub max_tap_duration: Option<f32>,
}

impl TapConfig {
    pub fn validate(&self) -> Result<(), CameraError> {
        if let Some(limit) = self.max_tap_duration {
            if !(limit.is_finite() && limit > 0.0) {
                return Err(CameraError::InvalidParameter { name: "max_tap_duration", value: limit });
            }
        }
        Ok(())
    }
}

//=== TapCallback =========================================================

/// Host callback invoked when a tap fires.
pub type TapCallback = Box<dyn FnMut() + Send>;

//=== TapDispatcher =======================================================

/// Owns the tap latch and the host callback.
pub struct TapDispatcher {
    config: TapConfig,
    has_fired: bool,
    on_tap: Option<TapCallback>,
    fired_count: u64,
}

impl TapDispatcher {
    pub fn new(config: TapConfig, on_tap: Option<TapCallback>) -> Self {
        Self {
            config,
            has_fired: false,
            on_tap,
            fired_count: 0,
        }
    }

    /// Evaluates a completed non-drag press held for `held_for` seconds.
    ///
    /// Returns `true` if the callback fired.
    pub fn on_press_released(&mut self, held_for: f32) -> bool {
        if let Some(limit) = self.config.max_tap_duration {
            if held_for > limit {
                debug!("press held {held_for:.3}s exceeds tap limit {limit:.3}s");
                return false;
            }
        }

        if self.config.policy == TapPolicy::OneShot && self.has_fired {
            debug!("tap suppressed: one-shot latch already fired");
            return false;
        }

        self.has_fired = true;
        self.fired_count += 1;
        debug!("tap fired (#{})", self.fired_count);

        if let Some(callback) = self.on_tap.as_mut() {
            callback();
        }
        true
    }

    /// Clears the latch so a one-shot policy can fire again.
    pub fn rearm(&mut self) {
        if self.has_fired {
            debug!("tap latch re-armed");
        }
        self.has_fired = false;
    }

    pub fn has_fired(&self) -> bool {
        self.has_fired
    }

    /// Total taps fired over the dispatcher's lifetime.
    pub fn fired_count(&self) -> u64 {
        self.fired_count
    }

    pub fn policy(&self) -> TapPolicy {
        self.config.policy
    }
}

impl std::fmt::Debug for TapDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TapDispatcher")
            .field("config", &self.config)
            .field("has_fired", &self.has_fired)
            .field("fired_count", &self.fired_count)
            .field("has_callback", &self.on_tap.is_some())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
