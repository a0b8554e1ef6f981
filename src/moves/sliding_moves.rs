//! Shared ray and single-step walkers used by the per-piece generators.

use crate::game_state::board::BoardLayout;
use crate::game_state::board_geometry::{crosses_side_edge, offset_square};
use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::moves::move_descriptions::{Move, MoveCore};

/// Move onto `destination`: a capture if an enemy stands there, `None` if a
/// friendly piece does, otherwise a quiet move.
#[inline]
pub fn occupancy_move(piece: Piece, layout: &BoardLayout, destination: Square) -> Option<Move> {
    let core = MoveCore::new(piece, destination);
    match layout.tile(destination) {
        None => Some(Move::Normal(core)),
        Some(occupant) if occupant.side() != piece.side() => Some(Move::Capture {
            core,
            targeted: occupant,
        }),
        Some(_) => None,
    }
}

/// Walks each offset until the board edge or the first occupied square.
pub fn sliding_moves(piece: Piece, layout: &BoardLayout, offsets: &[i8]) -> Vec<Move> {
    let mut moves = Vec::new();
    for &offset in offsets {
        let mut current = piece.square();
        loop {
            if crosses_side_edge(current, offset) {
                break;
            }
            let Some(next) = offset_square(current, offset) else {
                break;
            };
            let Some(mv) = occupancy_move(piece, layout, next) else {
                break;
            };
            let stop = mv.is_capture();
            moves.push(mv);
            if stop {
                break;
            }
            current = next;
        }
    }
    moves
}

/// One step per offset, rejecting wraps with `crosses_edge`.
pub fn stepping_moves(
    piece: Piece,
    layout: &BoardLayout,
    offsets: &[i8],
    crosses_edge: fn(Square, i8) -> bool,
) -> Vec<Move> {
    offsets
        .iter()
        .filter(|&&offset| !crosses_edge(piece.square(), offset))
        .filter_map(|&offset| offset_square(piece.square(), offset))
        .filter_map(|destination| occupancy_move(piece, layout, destination))
        .collect()
}
