//! Single-step king moves. Castling is added per player in
//! [`legal_move_checks`](crate::move_generation::legal_move_checks), since it
//! depends on the opponent's attacks.

use crate::game_state::board::BoardLayout;
use crate::game_state::board_geometry::crosses_side_edge;
use crate::game_state::piece::Piece;
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::stepping_moves;

pub const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub fn king_moves(piece: Piece, layout: &BoardLayout) -> Vec<Move> {
    stepping_moves(piece, layout, &KING_OFFSETS, crosses_side_edge)
}
