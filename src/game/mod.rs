//! Tic-Tac-Toe rules, computer opponent, and win history.

pub mod computer;
pub mod history;
pub mod logic;
pub mod schedule;
pub mod session;
pub mod types;

pub use computer::{available_moves, choose_move};
pub use history::{HistoryEntry, HistoryLedger, MAX_HISTORY_LENGTH};
pub use logic::{apply_move, evaluate, winning_line, WIN_TRIPLES};
pub use schedule::{MoveTimer, ScheduledMove};
pub use session::{ComputerTurn, GameSession, DEFAULT_TITLE, DRAW_TITLE};
pub use types::*;
