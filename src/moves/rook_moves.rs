use crate::game_state::board::BoardLayout;
use crate::game_state::piece::Piece;
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::sliding_moves;

pub const ROOK_OFFSETS: [i8; 4] = [-8, -1, 1, 8];

pub fn rook_moves(piece: Piece, layout: &BoardLayout) -> Vec<Move> {
    sliding_moves(piece, layout, &ROOK_OFFSETS)
}
