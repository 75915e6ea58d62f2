//=========================================================================
// Deceleration Engine
//=========================================================================
//
// Post-release momentum.
//
// Each tick the velocity is lerped toward zero by `dt * rate` (clamped to
// [0, 1], so it can never overshoot and reverse), then integrated into a
// displacement. Once speed is at or below the stop threshold the engine
// stops and the velocity is zeroed exactly.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::{debug, trace};

//=== DecelerationStep ====================================================

/// Result of advancing momentum by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecelerationStep {
    /// Camera should move by this displacement; momentum continues.
    Moving(Vec2),

    /// Speed fell below the stop threshold; momentum is over.
    Stopped,
}

//=== DecelerationState ===================================================

/// Residual velocity after a drag release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecelerationState {
    velocity: Vec2,
}

impl DecelerationState {
    /// Arms momentum with a release velocity. Non-finite input arms at rest.
    pub fn new(velocity: Vec2) -> Self {
        let velocity = if velocity.is_finite() { velocity } else { Vec2::ZERO };
        debug!("momentum armed at {velocity} ({:.3} u/s)", velocity.length());
        Self { velocity }
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Advances momentum by `dt` seconds.
    ///
    /// Ticks with `dt <= 0` neither decay nor move.
    pub fn step(&mut self, dt: f32, deceleration_rate: f32, stop_speed: f32) -> DecelerationStep {
        if self.velocity.length() <= stop_speed {
            self.velocity = Vec2::ZERO;
            debug!("momentum stopped");
            return DecelerationStep::Stopped;
        }

        if !(dt > 0.0 && dt.is_finite()) {
            return DecelerationStep::Moving(Vec2::ZERO);
        }

        let t = (dt * deceleration_rate).clamp(0.0, 1.0);
        self.velocity = self.velocity.lerp(Vec2::ZERO, t);
        let displacement = self.velocity * dt;

        trace!("momentum velocity {}, displacement {displacement}", self.velocity);
        DecelerationStep::Moving(displacement)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
