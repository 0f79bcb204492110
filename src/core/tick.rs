//! Per-tick game driver.
//!
//! `game_tick()` advances the session clock by one tick and returns a
//! [`TickResult`] describing what happened, so the presentation layer
//! (main.rs) can log and redraw without the game logic knowing about it.

use crate::game::{ComputerTurn, GameSession, Mark, Outcome};
use rand::Rng;
use std::time::{Duration, Instant};

/// A single event produced by a game tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickEvent {
    /// The computer placed its mark.
    ComputerMoved { index: usize, mark: Mark },

    /// A pending computer move was dropped because the board changed.
    StaleMoveDiscarded,

    /// A game was won on this tick.
    GameWon(Mark),

    /// A game ended in a draw on this tick.
    GameDrawn,
}

/// Result of processing a single game tick.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// Events produced during this tick, in chronological order.
    pub events: Vec<TickEvent>,
}

impl TickResult {
    /// True if the board changed and should be redrawn.
    pub fn board_changed(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, TickEvent::ComputerMoved { .. }))
    }
}

/// Wall-clock bookkeeping for the main loop.
///
/// Time is handed to the session either on a regular tick or, via
/// [`TickClock::settle`], right before input is applied. Settling first
/// means a move scheduled by that input only ever sees time measured from
/// the moment it was made.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    last_tick: Instant,
    interval: Duration,
}

impl TickClock {
    pub fn new(now: Instant, interval: Duration) -> Self {
        Self {
            last_tick: now,
            interval,
        }
    }

    /// Time since the last tick or settle, restarting the count at `now`.
    pub fn settle(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        elapsed
    }

    /// Elapsed time once a full interval has passed, otherwise `None`.
    pub fn due(&mut self, now: Instant) -> Option<Duration> {
        if now.saturating_duration_since(self.last_tick) < self.interval {
            return None;
        }
        Some(self.settle(now))
    }
}

/// Processes a single game tick of length `elapsed`.
///
/// Pass `&mut rand::thread_rng()` in production, or a seeded
/// `rand_chacha::ChaCha8Rng` in tests for deterministic behavior.
pub fn game_tick<R: Rng + ?Sized>(
    session: &mut GameSession,
    elapsed: Duration,
    rng: &mut R,
) -> TickResult {
    let mut result = TickResult::default();

    match session.advance(elapsed, rng) {
        Some(ComputerTurn::Moved {
            index,
            mark,
            outcome,
        }) => {
            result.events.push(TickEvent::ComputerMoved { index, mark });
            match outcome {
                Some(Outcome::Win(winner)) => result.events.push(TickEvent::GameWon(winner)),
                Some(Outcome::Draw) => result.events.push(TickEvent::GameDrawn),
                None => {}
            }
        }
        Some(ComputerTurn::Stale) => result.events.push(TickEvent::StaleMoveDiscarded),
        Some(ComputerTurn::NoMoves) | None => {}
    }

    result
}
