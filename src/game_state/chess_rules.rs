//! Canonical chess-rule constants.
//!
//! Starting layout and the fixed squares involved in castling, expressed in
//! mailbox indices (`0 == a8`, `63 == h1`).

use crate::game_state::chess_types::{PieceKind, Side, Square};

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// First square of each side's back rank.
#[inline]
pub const fn back_rank_start(side: Side) -> Square {
    match side {
        Side::White => 56,
        Side::Black => 0,
    }
}

/// First square of each side's pawn rank.
#[inline]
pub const fn pawn_rank_start(side: Side) -> Square {
    match side {
        Side::White => 48,
        Side::Black => 8,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleWing {
    KingSide,
    QueenSide,
}

/// Fixed geometry of one castling option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleLane {
    pub wing: CastleWing,
    pub king_origin: Square,
    pub king_destination: Square,
    pub rook_origin: Square,
    pub rook_destination: Square,
    /// Squares between king and rook that must be empty.
    pub empty_squares: &'static [Square],
    /// Squares the king crosses or lands on; none may be attacked.
    pub king_path: &'static [Square],
}

pub const WHITE_CASTLE_LANES: [CastleLane; 2] = [
    CastleLane {
        wing: CastleWing::KingSide,
        king_origin: 60,
        king_destination: 62,
        rook_origin: 63,
        rook_destination: 61,
        empty_squares: &[61, 62],
        king_path: &[61, 62],
    },
    CastleLane {
        wing: CastleWing::QueenSide,
        king_origin: 60,
        king_destination: 58,
        rook_origin: 56,
        rook_destination: 59,
        empty_squares: &[57, 58, 59],
        king_path: &[59, 58],
    },
];

pub const BLACK_CASTLE_LANES: [CastleLane; 2] = [
    CastleLane {
        wing: CastleWing::KingSide,
        king_origin: 4,
        king_destination: 6,
        rook_origin: 7,
        rook_destination: 5,
        empty_squares: &[5, 6],
        king_path: &[5, 6],
    },
    CastleLane {
        wing: CastleWing::QueenSide,
        king_origin: 4,
        king_destination: 2,
        rook_origin: 0,
        rook_destination: 3,
        empty_squares: &[1, 2, 3],
        king_path: &[3, 2],
    },
];

#[inline]
pub const fn castle_lanes(side: Side) -> &'static [CastleLane; 2] {
    match side {
        Side::White => &WHITE_CASTLE_LANES,
        Side::Black => &BLACK_CASTLE_LANES,
    }
}
