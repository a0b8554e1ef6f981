//! Square-pair lookup for click-to-move callers.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::move_descriptions::Move;

/// First legal move of either side going from `from` to `to`, or
/// [`Move::Invalid`] when none matches.
pub fn create_move(board: &Board, from: Square, to: Square) -> Move {
    board
        .all_legal_moves()
        .find(|mv| mv.current_square() == Some(from) && mv.destination() == Some(to))
        .copied()
        .unwrap_or(Move::Invalid)
}

#[cfg(test)]
mod tests {
    use super::create_move;
    use crate::game_state::board::Board;
    use crate::moves::move_descriptions::Move;

    #[test]
    fn finds_moves_for_either_side() {
        let board = Board::initial();
        assert!(matches!(create_move(&board, 52, 36), Move::PawnDoubleMove(_)));
        // Black's moves are visible even with White to move.
        assert!(matches!(create_move(&board, 1, 18), Move::Normal(_)));
    }

    #[test]
    fn unmatched_pair_is_invalid() {
        let board = Board::initial();
        assert_eq!(create_move(&board, 52, 28), Move::Invalid);
        assert_eq!(create_move(&board, 30, 22), Move::Invalid);
    }
}
