//! Delayed computer move with generation-based cancellation.
//!
//! A scheduled move remembers the session generation it was created for.
//! When it fires, the session compares that against its current generation
//! and drops the move if anything changed in between.

use std::time::Duration;

/// A computer move waiting for its delay to elapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledMove {
    pub generation: u64,
    pub remaining: Duration,
}

/// Holds at most one pending computer move.
#[derive(Debug, Clone, Default)]
pub struct MoveTimer {
    pending: Option<ScheduledMove>,
}

impl MoveTimer {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule a move for `generation`, replacing any pending one.
    pub fn schedule(&mut self, generation: u64, delay: Duration) {
        self.pending = Some(ScheduledMove {
            generation,
            remaining: delay,
        });
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Let `elapsed` pass. Returns the generation of a move that just fired.
    pub fn advance(&mut self, elapsed: Duration) -> Option<u64> {
        let scheduled = self.pending.as_mut()?;
        scheduled.remaining = scheduled.remaining.saturating_sub(elapsed);
        if !scheduled.remaining.is_zero() {
            return None;
        }
        self.pending.take().map(|s| s.generation)
    }
}
