//! Input handling for the game screen.
//!
//! Key events are first mapped to UI-agnostic [`GameInput`] values, then
//! dispatched against the session.

use crate::game::{GameSession, Mode, BOARD_SIDE};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Input actions for the game (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Up,
    Down,
    Left,
    Right,
    /// Place a mark at the cursor
    Place,
    /// Place a mark at a specific cell (0-8)
    Cell(usize),
    ToggleMode,
    SetMode(Mode),
    Reset,
    Quit,
    Other,
}

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Board cursor, (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    /// Starts on the center cell.
    pub fn new() -> Self {
        Self { row: 1, col: 1 }
    }

    pub fn index(&self) -> usize {
        self.row * BOARD_SIDE + self.col
    }

    pub fn move_by(&mut self, d_row: i32, d_col: i32) {
        let max = BOARD_SIDE as i32 - 1;
        self.row = (self.row as i32 + d_row).clamp(0, max) as usize;
        self.col = (self.col as i32 + d_col).clamp(0, max) as usize;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a terminal key event to a game input.
pub fn map_key(key: KeyEvent) -> GameInput {
    if key.kind != KeyEventKind::Press {
        return GameInput::Other;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => GameInput::Up,
        KeyCode::Down | KeyCode::Char('j') => GameInput::Down,
        KeyCode::Left | KeyCode::Char('h') => GameInput::Left,
        KeyCode::Right | KeyCode::Char('l') => GameInput::Right,
        KeyCode::Enter | KeyCode::Char(' ') => GameInput::Place,
        KeyCode::Char(c @ '1'..='9') => GameInput::Cell(c as usize - '1' as usize),
        KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Tab => GameInput::ToggleMode,
        KeyCode::Char('s') | KeyCode::Char('S') => GameInput::SetMode(Mode::SinglePlayer),
        KeyCode::Char('t') | KeyCode::Char('T') => GameInput::SetMode(Mode::TwoPlayer),
        KeyCode::Char('r') | KeyCode::Char('R') => GameInput::Reset,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameInput::Quit,
        _ => GameInput::Other,
    }
}

/// Apply one input to the session and cursor.
pub fn process_input(
    session: &mut GameSession,
    cursor: &mut Cursor,
    input: GameInput,
) -> InputResult {
    match input {
        GameInput::Up => cursor.move_by(-1, 0),
        GameInput::Down => cursor.move_by(1, 0),
        GameInput::Left => cursor.move_by(0, -1),
        GameInput::Right => cursor.move_by(0, 1),
        GameInput::Place => {
            session.select_cell(cursor.index());
        }
        GameInput::Cell(index) => {
            cursor.row = index / BOARD_SIDE;
            cursor.col = index % BOARD_SIDE;
            session.select_cell(index);
        }
        GameInput::ToggleMode => session.set_mode(session.mode().toggled()),
        GameInput::SetMode(mode) => session.set_mode(mode),
        GameInput::Reset => session.reset(),
        GameInput::Quit => return InputResult::Quit,
        GameInput::Other => {}
    }
    InputResult::Continue
}
