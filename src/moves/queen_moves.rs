use crate::game_state::board::BoardLayout;
use crate::game_state::piece::Piece;
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::sliding_moves;

/// Union of the rook and bishop directions.
pub const QUEEN_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub fn queen_moves(piece: Piece, layout: &BoardLayout) -> Vec<Move> {
    sliding_moves(piece, layout, &QUEEN_OFFSETS)
}
