//! Tic-Tac-Toe - terminal game library
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod core;
pub mod game;
pub mod input;
pub mod utils;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;

pub use game::{
    GameSession, GameStatus, HistoryEntry, HistoryLedger, Mark, Mode, Outcome,
    MAX_HISTORY_LENGTH,
};
pub use ui::draw_ui;
