//=========================================================================
// Input Buffer
//
// Collects raw pointer and touch events for one frame, in arrival order.
// Acts as a transient event aggregator between the Platform and the core
// thread.
//
// Responsibilities:
// - Store incoming platform events per frame
// - Deduplicate repeated discrete inputs (e.g., a doubled button press)
// - Coalesce continuous inputs (cursor moves, per-contact touch moves)
//   between two discrete events
// - Hand the ordered list over at the frame boundary via `drain()`
//
// Notes:
// Continuous events only coalesce within the run between discrete events.
// A discrete event seals the pending moves ahead of itself, so a touch
// start is always seen before that contact's moves and a release before
// any later cursor motion.
//
// The InputBuffer exists only for the current frame and is emptied when
// the platform flushes on RedrawRequested.
//=========================================================================

//=== Standard Library Imports ============================================
use std::collections::HashSet;

//=== Internal Modules ====================================================
use crate::core::input::RawInputEvent;

//=== InputBuffer Struct ==================================================
//
// Represents the transient event store for one frame of input.
//
// Internally maintains:
// - `ordered`: events sealed so far, in arrival order
// - `pending`: last-known position per move source (cursor, contact id)
//   since the most recent discrete event
//
pub(crate) struct InputBuffer {
    ordered: Vec<RawInputEvent>,
    pending: HashSet<RawInputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Preallocates for a typical frame's worth of pointer traffic.
    //
    pub(crate) fn new() -> Self {
        const ORDERED_BASE: usize = 32;
        const PENDING_BASE: usize = 8;

        Self {
            ordered: Vec::with_capacity(ORDERED_BASE),
            pending: HashSet::with_capacity(PENDING_BASE),
        }
    }

    //--- Routing ----------------------------------------------------------
    //
    // Sends an event to the matching path based on its kind.
    //
    pub(crate) fn push(&mut self, event: RawInputEvent) {
        if event.is_continuous() {
            self.push_continuous(event);
        } else {
            self.push_discrete(event);
        }
    }

    //--- Continuous Event Handling ---------------------------------------
    //
    // Inserts or replaces a continuous input. The latest move for a given
    // source (the cursor, or one touch id) replaces the previous one.
    //
    pub(crate) fn push_continuous(&mut self, event: RawInputEvent) {
        self.pending.replace(event);
    }

    //--- Discrete Event Handling -----------------------------------------
    //
    // Seals pending moves, then appends the discrete input. A repeat of
    // the event just appended is ignored.
    //
    pub(crate) fn push_discrete(&mut self, event: RawInputEvent) {
        self.seal_pending();
        if self.ordered.last() != Some(&event) {
            self.ordered.push(event);
        }
    }

    fn seal_pending(&mut self) {
        self.ordered.extend(self.pending.drain());
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns this frame's events in arrival order and empties the buffer,
    // or `None` if nothing was collected.
    //
    pub(crate) fn drain(&mut self) -> Option<Vec<RawInputEvent>> {
        if self.is_empty() {
            return None;
        }
        self.seal_pending();
        Some(std::mem::take(&mut self.ordered))
    }

    //--- Utilities --------------------------------------------------------
    pub(crate) fn clear(&mut self) {
        self.ordered.clear();
        self.pending.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.ordered.len() + self.pending.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.ordered.is_empty() && self.pending.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
