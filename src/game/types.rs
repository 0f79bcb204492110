//! Tic-Tac-Toe data structures.
//!
//! 3x3 board stored row-major, X always moves first.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// Board side length.
pub const BOARD_SIDE: usize = 3;

/// A player's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Mark that plays on move number `move_count` (0-based).
    pub fn for_move(move_count: u8) -> Self {
        if move_count % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// Long name used in the history list.
    pub fn label(&self) -> &'static str {
        match self {
            Mark::X => "Cross",
            Mark::O => "Circle",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(*mark),
        }
    }
}

/// Row-major 3x3 grid.
pub type Board = [Cell; BOARD_CELLS];

/// Board contents plus turn bookkeeping.
///
/// `move_count` always equals the number of marked cells; only
/// [`crate::game::logic::apply_move`] mutates a live board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub cells: Board,
    /// Moves made so far (0-9)
    pub move_count: u8,
    /// Set once the game has been decided
    pub locked: bool,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
            move_count: 0,
            locked: false,
        }
    }

    /// Mark that places the next stone.
    pub fn current_mark(&self) -> Mark {
        Mark::for_move(self.move_count)
    }

    /// Clear every cell and release the lock.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Final result of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

/// Result of checking a board for a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    Decided(Outcome),
    NoOutcome,
}

/// Game state machine position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Drawn,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Who plays O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans share the keyboard
    #[default]
    #[serde(rename = "multi")]
    TwoPlayer,
    /// The computer plays O
    #[serde(rename = "single")]
    SinglePlayer,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::SinglePlayer, Mode::TwoPlayer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::TwoPlayer => "multi",
            Mode::SinglePlayer => "single",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::TwoPlayer => "Two Players",
            Mode::SinglePlayer => "Single Player",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Mode::TwoPlayer => Mode::SinglePlayer,
            Mode::SinglePlayer => Mode::TwoPlayer,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "multi" => Ok(Mode::TwoPlayer),
            "single" => Ok(Mode::SinglePlayer),
            other => Err(format!(
                "unknown mode '{}' (expected 'single' or 'multi')",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = BoardState::new();
        assert!(board.cells.iter().all(Cell::is_empty));
        assert_eq!(board.move_count, 0);
        assert!(!board.locked);
        assert_eq!(board.current_mark(), Mark::X);
    }

    #[test]
    fn test_marks_alternate_by_move_count() {
        assert_eq!(Mark::for_move(0), Mark::X);
        assert_eq!(Mark::for_move(1), Mark::O);
        assert_eq!(Mark::for_move(8), Mark::X);
    }

    #[test]
    fn test_mark_labels() {
        assert_eq!(Mark::X.label(), "Cross");
        assert_eq!(Mark::O.label(), "Circle");
        assert_eq!(Mark::O.to_string(), "O");
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("single".parse::<Mode>(), Ok(Mode::SinglePlayer));
        assert_eq!(" MULTI ".parse::<Mode>(), Ok(Mode::TwoPlayer));
        assert!("solo".parse::<Mode>().is_err());
        assert_eq!(Mode::default(), Mode::TwoPlayer);
        assert_eq!(Mode::SinglePlayer.toggled(), Mode::TwoPlayer);
    }

    #[test]
    fn test_mode_serde_uses_short_names() {
        let json = serde_json::to_string(&Mode::SinglePlayer).unwrap();
        assert_eq!(json, "\"single\"");
        let mode: Mode = serde_json::from_str("\"multi\"").unwrap();
        assert_eq!(mode, Mode::TwoPlayer);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut board = BoardState::new();
        board.cells[4] = Cell::Marked(Mark::X);
        board.move_count = 1;
        board.locked = true;
        board.clear();
        assert_eq!(board, BoardState::new());
    }
}
