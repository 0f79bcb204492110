//! Bounded ledger of past wins.

use super::{Mark, Outcome};
use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Maximum number of games kept in the ledger.
pub const MAX_HISTORY_LENGTH: usize = 10;

/// Timestamp format shown in the history list.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One recorded win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub winner: Mark,
    pub recorded_at: DateTime<Local>,
}

impl HistoryEntry {
    /// "Game 3: Cross won at 2024-05-01 12:00:00" (`number` is 1-based).
    pub fn display_line(&self, number: usize) -> String {
        format!(
            "Game {}: {} won at {}",
            number,
            self.winner.label(),
            self.recorded_at.format(TIMESTAMP_FORMAT)
        )
    }
}

/// Most recent wins in insertion order. The oldest entry is evicted once
/// the ledger holds more than [`MAX_HISTORY_LENGTH`].
#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(MAX_HISTORY_LENGTH + 1),
        }
    }

    /// Record a finished game. Draws are not recorded.
    pub fn record(&mut self, outcome: Outcome, now: DateTime<Local>) {
        let Outcome::Win(winner) = outcome else {
            return;
        };
        self.entries.push_back(HistoryEntry {
            winner,
            recorded_at: now,
        });
        while self.entries.len() > MAX_HISTORY_LENGTH {
            self.entries.pop_front();
        }
    }

    /// Entries oldest first.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Numbered display lines, oldest first.
    pub fn display_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| entry.display_line(i + 1))
            .collect()
    }
}
