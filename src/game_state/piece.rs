//! Immutable piece values.
//!
//! A `Piece` is identified structurally by (kind, side, square, first-move
//! flag). Moving a piece never mutates it; the move produces a fresh value on
//! the destination square.

use std::fmt;

use crate::game_state::board::BoardLayout;
use crate::game_state::chess_types::{PieceKind, Side, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    side: Side,
    square: Square,
    first_move: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    #[inline]
    pub const fn new(kind: PieceKind, side: Side, square: Square) -> Self {
        Self {
            kind,
            side,
            square,
            first_move: true,
        }
    }

    #[inline]
    pub const fn with_first_move(
        kind: PieceKind,
        side: Side,
        square: Square,
        first_move: bool,
    ) -> Self {
        Self {
            kind,
            side,
            square,
            first_move,
        }
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub const fn is_first_move(&self) -> bool {
        self.first_move
    }

    #[inline]
    pub const fn points(&self) -> i32 {
        self.kind.points()
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    #[inline]
    pub fn is_rook(&self) -> bool {
        self.kind == PieceKind::Rook
    }

    #[inline]
    pub fn is_pawn(&self) -> bool {
        self.kind == PieceKind::Pawn
    }

    /// Same piece relocated to `destination`; it has now moved at least once.
    #[inline]
    pub const fn moved_to(self, destination: Square) -> Self {
        Self::with_first_move(self.kind, self.side, destination, false)
    }

    /// Queen replacing a pawn that reached the far row. No under-promotion.
    #[inline]
    pub const fn promoted(self, destination: Square) -> Self {
        Self::with_first_move(PieceKind::Queen, self.side, destination, false)
    }

    /// Moves this piece could make on `layout`, ignoring king safety and castling.
    pub fn allowed_moves(&self, layout: &BoardLayout) -> Vec<Move> {
        match self.kind {
            PieceKind::Pawn => pawn_moves(*self, layout),
            PieceKind::Knight => knight_moves(*self, layout),
            PieceKind::Bishop => bishop_moves(*self, layout),
            PieceKind::Rook => rook_moves(*self, layout),
            PieceKind::Queen => queen_moves(*self, layout),
            PieceKind::King => king_moves(*self, layout),
        }
    }
}

impl fmt::Display for Piece {
    /// Upper-case for White, lower-case for Black.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.kind.letter();
        match self.side {
            Side::White => write!(f, "{letter}"),
            Side::Black => write!(f, "{}", letter.to_ascii_lowercase()),
        }
    }
}
