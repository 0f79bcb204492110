//! Computer opponent: picks uniformly among the empty cells.

use super::BoardState;
use rand::seq::SliceRandom;
use rand::Rng;

/// Indices of empty cells in ascending order.
pub fn available_moves(board: &BoardState) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(i, _)| i)
        .collect()
}

/// Choose a move uniformly at random. `None` if the board is full.
pub fn choose_move<R: Rng + ?Sized>(board: &BoardState, rng: &mut R) -> Option<usize> {
    available_moves(board).choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::logic::apply_move;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_available_moves_empty_board() {
        assert_eq!(available_moves(&BoardState::new()), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_available_moves_skips_occupied() {
        let mut board = BoardState::new();
        apply_move(&mut board, 0);
        apply_move(&mut board, 4);
        assert_eq!(available_moves(&board), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_choose_move_full_board_is_none() {
        let mut board = BoardState::new();
        for i in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            apply_move(&mut board, i);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(choose_move(&board, &mut rng), None);
    }

    #[test]
    fn test_choose_move_zero_source_picks_first_empty() {
        let mut board = BoardState::new();
        apply_move(&mut board, 0);
        let mut rng = StepRng::new(0, 0);
        assert_eq!(choose_move(&board, &mut rng), Some(1));
    }

    #[test]
    fn test_choose_move_never_picks_occupied() {
        let mut board = BoardState::new();
        for i in [0, 4, 8] {
            apply_move(&mut board, i);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for _ in 0..200 {
            let pick = choose_move(&board, &mut rng).unwrap();
            assert!(board.cells[pick].is_empty());
        }
    }
}
