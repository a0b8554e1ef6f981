//! Attack queries and castling generation.
//!
//! A square counts as attacked when any of the opponent's allowed moves lands
//! on it. Castling is generated here rather than by the king generator because
//! it needs those opponent moves.

use crate::game_state::board::BoardLayout;
use crate::game_state::chess_rules::{castle_lanes, CastleLane, CastleWing};
use crate::game_state::chess_types::{Side, Square};
use crate::game_state::piece::Piece;
use crate::moves::move_descriptions::{CastleRook, Move, MoveCore};

/// Moves from `moves` whose destination is `square`.
pub fn attacks_on(square: Square, moves: &[Move]) -> Vec<Move> {
    moves
        .iter()
        .filter(|mv| mv.destination() == Some(square))
        .copied()
        .collect()
}

#[inline]
pub fn is_attacked(square: Square, moves: &[Move]) -> bool {
    moves.iter().any(|mv| mv.destination() == Some(square))
}

/// Castling moves available to `king`.
///
/// Requires an unmoved king and rook on their home squares, empty squares
/// between them, no check, and no attack on the squares the king passes
/// through or lands on.
pub fn calculate_castling_moves(
    layout: &BoardLayout,
    side: Side,
    king: Piece,
    in_check: bool,
    opponent_moves: &[Move],
) -> Vec<Move> {
    if in_check || !king.is_first_move() {
        return Vec::new();
    }
    castle_lanes(side)
        .iter()
        .filter_map(|lane| castle_move(layout, side, king, lane, opponent_moves))
        .collect()
}

fn castle_move(
    layout: &BoardLayout,
    side: Side,
    king: Piece,
    lane: &CastleLane,
    opponent_moves: &[Move],
) -> Option<Move> {
    if king.square() != lane.king_origin {
        return None;
    }
    let rook = layout.tile(lane.rook_origin)?;
    if !rook.is_rook() || rook.side() != side || !rook.is_first_move() {
        return None;
    }
    if lane.empty_squares.iter().any(|&sq| layout.is_occupied(sq)) {
        return None;
    }
    if lane.king_path.iter().any(|&sq| is_attacked(sq, opponent_moves)) {
        return None;
    }

    let core = MoveCore::new(king, lane.king_destination);
    let rook = CastleRook {
        rook,
        destination: lane.rook_destination,
    };
    Some(match lane.wing {
        CastleWing::KingSide => Move::KingSideCastle { core, rook },
        CastleWing::QueenSide => Move::QueenSideCastle { core, rook },
    })
}
