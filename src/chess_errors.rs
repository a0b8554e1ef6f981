//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type returned by board construction, move
//! execution, perft and search. Rule outcomes that are part of normal play
//! (an illegal move request, a move that leaves the king in check) are *not*
//! errors; they are reported through
//! [`MoveStatus`](crate::player::move_transition::MoveStatus) instead.
//!
//! Variants here mean either malformed input handed to the library (a board
//! without a king, a piece off the board) or a search request that cannot be
//! answered (no legal moves at the root).

use thiserror::Error;

use crate::game_state::chess_types::Side;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A board was built without a king for `Side`.
    #[error("board has no {0} king")]
    MissingKing(Side),

    /// A board was built with more than one king for `Side`.
    #[error("board has more than one {0} king")]
    ExtraKing(Side),

    /// The `Invalid` move sentinel was executed.
    #[error("cannot execute an invalid move")]
    InvalidMoveExecuted,

    /// The moving piece of a move is not on the board it was executed against.
    ///
    /// Payload: the square the piece was expected on.
    #[error("no matching piece on square {0}")]
    NoPieceOnSquare(u8),

    /// A piece was placed outside `0..64`.
    #[error("square index {0} is outside the board")]
    SquareOutOfRange(usize),

    /// Search was asked for a move in a position where the mover has none.
    #[error("{0} has no legal moves")]
    NoLegalMoves(Side),

    /// A root-parallel search worker panicked.
    #[error("search worker thread panicked")]
    SearchWorkerPanicked,
}

pub type ChessResult<T> = Result<T, ChessError>;
