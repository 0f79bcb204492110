//! Game session: turn sequencing, mode switching and the computer's turn.

use super::computer::choose_move;
use super::history::HistoryLedger;
use super::logic::{apply_move, evaluate, winning_line};
use super::schedule::MoveTimer;
use super::{BoardState, Evaluation, GameStatus, Mark, Mode, Outcome};
use crate::core::constants::COMPUTER_MOVE_DELAY_MS;
use chrono::{DateTime, Local};
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info};

/// Title shown while a game is running.
pub const DEFAULT_TITLE: &str = "Tic Tac Toe Game In Rust";

/// Title shown after a draw.
pub const DRAW_TITLE: &str = "It's a Draw!";

/// What happened when the computer's timer fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputerTurn {
    /// The computer placed its mark
    Moved {
        index: usize,
        mark: Mark,
        outcome: Option<Outcome>,
    },
    /// The board changed after scheduling; the move was dropped
    Stale,
    /// No empty cell was left
    NoMoves,
}

/// One running game plus the session-wide history.
///
/// Every change to the board bumps `generation`, which invalidates any
/// computer move scheduled against the previous board.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: BoardState,
    mode: Mode,
    history: HistoryLedger,
    generation: u64,
    timer: MoveTimer,
}

impl GameSession {
    pub fn new(mode: Mode) -> Self {
        Self {
            board: BoardState::new(),
            mode,
            history: HistoryLedger::new(),
            generation: 0,
            timer: MoveTimer::new(),
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> GameStatus {
        match evaluate(&self.board) {
            Evaluation::Decided(Outcome::Win(mark)) => GameStatus::Won(mark),
            Evaluation::Decided(Outcome::Draw) => GameStatus::Drawn,
            Evaluation::NoOutcome => GameStatus::InProgress,
        }
    }

    /// Cells of the line that decided the game, if any.
    pub fn winning_cells(&self) -> Option<[usize; 3]> {
        winning_line(&self.board).map(|(cells, _)| cells)
    }

    /// True while O belongs to the computer and it is O's turn.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == Mode::SinglePlayer
            && self.status() == GameStatus::InProgress
            && self.board.current_mark() == Mark::O
    }

    /// True while a computer move is waiting on its delay.
    pub fn computer_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Title text derived from the current state.
    pub fn display_message(&self) -> String {
        match self.status() {
            GameStatus::InProgress => DEFAULT_TITLE.to_string(),
            GameStatus::Drawn => DRAW_TITLE.to_string(),
            GameStatus::Won(mark) => format!("Congratulations {} Wins", mark),
        }
    }

    /// Apply a move for whoever's turn it is and settle the game if it ended.
    ///
    /// Illegal moves leave the session untouched and return `None`.
    pub fn play(&mut self, index: usize) -> Option<Outcome> {
        self.play_at(index, Local::now())
    }

    /// [`Self::play`] with an explicit clock for the history entry.
    pub fn play_at(&mut self, index: usize, now: DateTime<Local>) -> Option<Outcome> {
        let mark = self.board.current_mark();
        if !apply_move(&mut self.board, index) {
            debug!(index, "move ignored");
            return None;
        }
        self.generation += 1;
        debug!(index, %mark, move_count = self.board.move_count, "move applied");

        let outcome = match evaluate(&self.board) {
            Evaluation::Decided(outcome) => {
                self.board.locked = true;
                self.history.record(outcome, now);
                info!(?outcome, history_len = self.history.len(), "game over");
                Some(outcome)
            }
            Evaluation::NoOutcome => None,
        };
        self.sync_timer();
        outcome
    }

    /// Human cell selection. Ignored while the computer owns the turn.
    pub fn select_cell(&mut self, index: usize) -> Option<Outcome> {
        if self.is_computer_turn() {
            debug!(index, "selection ignored during computer turn");
            return None;
        }
        self.play(index)
    }

    /// Clear the board and cancel any pending computer move. History stays.
    pub fn reset(&mut self) {
        self.board.clear();
        self.generation += 1;
        self.timer.cancel();
        self.sync_timer();
        info!(mode = %self.mode, generation = self.generation, "board reset");
    }

    /// Switch mode and start a fresh game.
    pub fn set_mode(&mut self, mode: Mode) {
        debug!(from = %self.mode, to = %mode, "mode change");
        self.mode = mode;
        self.reset();
    }

    /// Let time pass; plays the computer's move once its delay elapses.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        elapsed: Duration,
        rng: &mut R,
    ) -> Option<ComputerTurn> {
        let generation = self.timer.advance(elapsed)?;
        if generation != self.generation || !self.is_computer_turn() {
            debug!(
                scheduled = generation,
                current = self.generation,
                "stale computer move discarded"
            );
            // Re-arm for the current board if the computer still owes a move
            self.sync_timer();
            return Some(ComputerTurn::Stale);
        }
        let Some(index) = choose_move(&self.board, rng) else {
            return Some(ComputerTurn::NoMoves);
        };
        let mark = self.board.current_mark();
        let outcome = self.play(index);
        Some(ComputerTurn::Moved {
            index,
            mark,
            outcome,
        })
    }

    /// Schedule or cancel the computer move to match the current state.
    fn sync_timer(&mut self) {
        if self.is_computer_turn() {
            self.timer
                .schedule(self.generation, Duration::from_millis(COMPUTER_MOVE_DELAY_MS));
        } else {
            self.timer.cancel();
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
