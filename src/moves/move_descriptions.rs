//! Move values.
//!
//! Every move kind is one variant of [`Move`]; the fields all moves share
//! (moving piece and destination) live in [`MoveCore`]. Moves carry no board
//! reference and are plain `Copy` data, so two moves compare equal exactly
//! when their kind and pieces match.

use std::fmt;

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_apply::execute_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveCore {
    pub moving_piece: Piece,
    pub destination: Square,
}

impl MoveCore {
    #[inline]
    pub const fn new(moving_piece: Piece, destination: Square) -> Self {
        Self {
            moving_piece,
            destination,
        }
    }
}

/// Rook half of a castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRook {
    pub rook: Piece,
    pub destination: Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Quiet move onto an empty square.
    Normal(MoveCore),
    Capture {
        core: MoveCore,
        targeted: Piece,
    },
    /// Pawn advancing two squares from its start row.
    PawnDoubleMove(MoveCore),
    /// Diagonal pawn move onto an empty square, capturing the pawn beside it.
    EnPassant {
        core: MoveCore,
        targeted: Piece,
    },
    KingSideCastle {
        core: MoveCore,
        rook: CastleRook,
    },
    QueenSideCastle {
        core: MoveCore,
        rook: CastleRook,
    },
    /// Pawn reaching the far row, optionally capturing on arrival. Always a queen.
    PawnPromotion {
        core: MoveCore,
        targeted: Option<Piece>,
    },
    /// Sentinel returned when no legal move matches a request.
    Invalid,
}

impl Move {
    #[inline]
    pub fn core(&self) -> Option<&MoveCore> {
        match self {
            Move::Normal(core) | Move::PawnDoubleMove(core) => Some(core),
            Move::Capture { core, .. }
            | Move::EnPassant { core, .. }
            | Move::KingSideCastle { core, .. }
            | Move::QueenSideCastle { core, .. }
            | Move::PawnPromotion { core, .. } => Some(core),
            Move::Invalid => None,
        }
    }

    #[inline]
    pub fn moving_piece(&self) -> Option<Piece> {
        self.core().map(|core| core.moving_piece)
    }

    #[inline]
    pub fn current_square(&self) -> Option<Square> {
        self.moving_piece().map(|piece| piece.square())
    }

    #[inline]
    pub fn destination(&self) -> Option<Square> {
        self.core().map(|core| core.destination)
    }

    /// Piece removed by this move, if any.
    #[inline]
    pub fn targeted_piece(&self) -> Option<Piece> {
        match self {
            Move::Capture { targeted, .. } | Move::EnPassant { targeted, .. } => Some(*targeted),
            Move::PawnPromotion { targeted, .. } => *targeted,
            _ => None,
        }
    }

    #[inline]
    pub fn castle_rook(&self) -> Option<CastleRook> {
        match self {
            Move::KingSideCastle { rook, .. } | Move::QueenSideCastle { rook, .. } => Some(*rook),
            _ => None,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.targeted_piece().is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.castle_rook().is_some()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        matches!(self, Move::PawnPromotion { .. })
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        matches!(self, Move::EnPassant { .. })
    }

    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Move::Invalid)
    }

    /// Builds the successor board. Does not check legality; see
    /// [`Player::make_move`](crate::player::player::Player::make_move).
    pub fn execute(&self, board: &Board) -> ChessResult<Board> {
        execute_move(self, board)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::KingSideCastle { .. } => f.write_str("O-O"),
            Move::QueenSideCastle { .. } => f.write_str("O-O-O"),
            Move::Invalid => f.write_str("INVALID"),
            _ => match self.core() {
                Some(core) => write!(
                    f,
                    "{} {} -> {}",
                    core.moving_piece.kind().name(),
                    core.moving_piece.square(),
                    core.destination
                ),
                None => f.write_str("INVALID"),
            },
        }
    }
}
