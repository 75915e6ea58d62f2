//=========================================================================
// Frame Clock
//=========================================================================
//
// Source of the per-tick `dt` handed to the camera controller.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::VecDeque;
use std::time::Instant;

//=== Clock Trait =========================================================

/// Reports seconds elapsed since the previous call.
pub trait Clock {
    fn elapsed_since_last_tick(&mut self) -> f32;
}

//=== SystemClock =========================================================

/// Monotonic wall clock. The first call measures from construction.
#[derive(Debug)]
pub struct SystemClock {
    last: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { last: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed_since_last_tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

//=== ManualClock =========================================================

/// Deterministic clock for fixed-step hosts and tests.
///
/// Returns queued steps first, then `step` forever.
#[derive(Debug, Clone)]
pub struct ManualClock {
    step: f32,
    queued: VecDeque<f32>,
}

impl ManualClock {
    pub fn fixed(step: f32) -> Self {
        Self { step, queued: VecDeque::new() }
    }

    /// Queues a one-off step, used before falling back to the fixed step.
    pub fn push(&mut self, dt: f32) {
        self.queued.push_back(dt);
    }
}

impl Clock for ManualClock {
    fn elapsed_since_last_tick(&mut self) -> f32 {
        self.queued.pop_front().unwrap_or(self.step)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_drains_queue_then_uses_fixed_step() {
        let mut clock = ManualClock::fixed(0.016);
        clock.push(0.5);
        clock.push(0.0);
        assert_eq!(clock.elapsed_since_last_tick(), 0.5);
        assert_eq!(clock.elapsed_since_last_tick(), 0.0);
        assert_eq!(clock.elapsed_since_last_tick(), 0.016);
        assert_eq!(clock.elapsed_since_last_tick(), 0.016);
    }

    #[test]
    fn system_clock_is_non_negative() {
        let mut clock = SystemClock::new();
        assert!(clock.elapsed_since_last_tick() >= 0.0);
        assert!(clock.elapsed_since_last_tick() >= 0.0);
    }
}
