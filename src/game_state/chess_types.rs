//! Primitive chess vocabulary shared by every layer of the engine.
//!
//! Squares are plain indices into a 64-entry mailbox. Index `0` is the
//! top-left corner (a8, Black's back rank) and `63` is the bottom-right
//! corner (h1, White's back rank), so `row = square / 8` and
//! `column = square % 8`.

use std::fmt;

/// Mailbox square index (`0..64`).
pub type Square = u8;

/// Number of squares on the board.
pub const TOTAL_SQUARES: usize = 64;

/// Side of the board a piece or player belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Sign of a forward step: White advances toward index 0, Black toward 63.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Piece kind; the side is stored separately on [`crate::game_state::piece::Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value used by the evaluator.
    #[inline]
    pub const fn points(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10_000,
        }
    }

    /// Upper-case letter used when rendering White pieces.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "PAWN",
            PieceKind::Knight => "KNIGHT",
            PieceKind::Bishop => "BISHOP",
            PieceKind::Rook => "ROOK",
            PieceKind::Queen => "QUEEN",
            PieceKind::King => "KING",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{PieceKind, Side};

    #[test]
    fn sides_flip_and_point_in_opposite_directions() {
        assert_eq!(Side::White.opposite(), Side::Black);
        assert_eq!(Side::Black.opposite(), Side::White);
        assert_eq!(Side::White.direction(), -Side::Black.direction());
    }

    #[test]
    fn minor_pieces_share_a_value() {
        assert_eq!(PieceKind::Knight.points(), PieceKind::Bishop.points());
        assert!(PieceKind::King.points() > 8 * PieceKind::Queen.points());
    }
}
