//! Timing constants and the per-tick driver.

pub mod constants;
pub mod tick;

pub use constants::*;
pub use tick::{game_tick, TickClock, TickEvent, TickResult};
