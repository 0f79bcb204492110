//! Move application and win/draw detection.

use super::{BoardState, Cell, Evaluation, Mark, Outcome, BOARD_CELLS};

/// The 8 winning lines, checked in this order: rows, columns, diagonals.
pub const WIN_TRIPLES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Place the current player's mark at `index`.
///
/// Out-of-range indices, occupied cells and locked boards are ignored, so
/// repeated or late intents are harmless. Returns true if the board changed.
pub fn apply_move(board: &mut BoardState, index: usize) -> bool {
    if board.locked || index >= BOARD_CELLS || !board.cells[index].is_empty() {
        return false;
    }
    board.cells[index] = Cell::Marked(board.current_mark());
    board.move_count += 1;
    true
}

/// First uniform, non-empty triple in [`WIN_TRIPLES`] order.
pub fn winning_line(board: &BoardState) -> Option<([usize; 3], Mark)> {
    WIN_TRIPLES.iter().find_map(|&[a, b, c]| {
        let mark = board.cells[a].mark()?;
        (board.cells[b] == board.cells[a] && board.cells[c] == board.cells[a])
            .then_some(([a, b, c], mark))
    })
}

/// Check the board for a finished game. Pure.
pub fn evaluate(board: &BoardState) -> Evaluation {
    if let Some((_, mark)) = winning_line(board) {
        return Evaluation::Decided(Outcome::Win(mark));
    }
    if board.move_count as usize == BOARD_CELLS {
        return Evaluation::Decided(Outcome::Draw);
    }
    Evaluation::NoOutcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(moves: &[usize]) -> BoardState {
        let mut board = BoardState::new();
        for &m in moves {
            assert!(apply_move(&mut board, m), "move {} should be legal", m);
        }
        board
    }

    #[test]
    fn test_apply_move_alternates() {
        let board = play_all(&[4, 0, 8]);
        assert_eq!(board.cells[4], Cell::Marked(Mark::X));
        assert_eq!(board.cells[0], Cell::Marked(Mark::O));
        assert_eq!(board.cells[8], Cell::Marked(Mark::X));
        assert_eq!(board.move_count, 3);
        assert_eq!(board.current_mark(), Mark::O);
    }

    #[test]
    fn test_apply_move_occupied_is_noop() {
        let mut board = play_all(&[4]);
        let before = board.clone();
        assert!(!apply_move(&mut board, 4));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_locked_is_noop() {
        let mut board = BoardState::new();
        board.locked = true;
        assert!(!apply_move(&mut board, 0));
        assert_eq!(board.move_count, 0);
        assert!(board.cells[0].is_empty());
    }

    #[test]
    fn test_apply_move_out_of_range_is_noop() {
        let mut board = BoardState::new();
        assert!(!apply_move(&mut board, 9));
        assert_eq!(board, BoardState::new());
    }

    #[test]
    fn test_evaluate_empty_board() {
        assert_eq!(evaluate(&BoardState::new()), Evaluation::NoOutcome);
    }

    #[test]
    fn test_every_triple_wins() {
        for triple in WIN_TRIPLES {
            let mut board = BoardState::new();
            for i in triple {
                board.cells[i] = Cell::Marked(Mark::O);
            }
            board.move_count = 3;
            assert_eq!(
                evaluate(&board),
                Evaluation::Decided(Outcome::Win(Mark::O)),
                "triple {:?}",
                triple
            );
            assert_eq!(winning_line(&board), Some((triple, Mark::O)));
        }
    }

    #[test]
    fn test_mixed_triple_does_not_win() {
        let mut board = BoardState::new();
        board.cells[0] = Cell::Marked(Mark::X);
        board.cells[1] = Cell::Marked(Mark::O);
        board.cells[2] = Cell::Marked(Mark::X);
        board.move_count = 3;
        assert_eq!(evaluate(&board), Evaluation::NoOutcome);
    }

    #[test]
    fn test_rows_checked_before_columns() {
        // Row 0 and column 0 both uniform; the row comes first.
        let mut board = BoardState::new();
        for i in [0, 1, 2, 3, 6] {
            board.cells[i] = Cell::Marked(Mark::X);
        }
        board.move_count = 5;
        assert_eq!(winning_line(&board), Some(([0, 1, 2], Mark::X)));
    }

    #[test]
    fn test_columns_checked_before_diagonals() {
        // Column 0 and the 0-4-8 diagonal both uniform; the column comes first.
        let mut board = BoardState::new();
        for i in [0, 3, 6, 4, 8] {
            board.cells[i] = Cell::Marked(Mark::O);
        }
        board.move_count = 5;
        assert_eq!(winning_line(&board), Some(([0, 3, 6], Mark::O)));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = play_all(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(board.move_count, 9);
        assert_eq!(evaluate(&board), Evaluation::Decided(Outcome::Draw));
    }

    #[test]
    fn test_win_on_last_move_beats_draw() {
        // X completes the 0-4-8 diagonal on the ninth move.
        let board = play_all(&[0, 1, 4, 2, 5, 3, 6, 7, 8]);
        assert_eq!(board.move_count, 9);
        assert_eq!(evaluate(&board), Evaluation::Decided(Outcome::Win(Mark::X)));
    }
}
