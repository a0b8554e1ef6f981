//! Result of asking a player to make a move.

use crate::game_state::board::Board;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    Completed,
    /// Move is not in the player's legal set.
    IllegalMove,
    /// Move would leave the mover's own king attacked.
    LeavesKingInCheck,
}

impl MoveStatus {
    #[inline]
    pub fn is_completed(self) -> bool {
        self == MoveStatus::Completed
    }
}

/// Outcome of [`Player::make_move`](crate::player::player::Player::make_move).
///
/// A completed transition owns the successor board; a rejected one only
/// points back at the unchanged original.
#[derive(Debug)]
pub struct MoveTransition<'a> {
    original: &'a Board,
    successor: Option<Board>,
    mv: Move,
    status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    pub(crate) fn completed(original: &'a Board, successor: Board, mv: Move) -> Self {
        Self {
            original,
            successor: Some(successor),
            mv,
            status: MoveStatus::Completed,
        }
    }

    pub(crate) fn rejected(original: &'a Board, mv: Move, status: MoveStatus) -> Self {
        Self {
            original,
            successor: None,
            mv,
            status,
        }
    }

    #[inline]
    pub fn status(&self) -> MoveStatus {
        self.status
    }

    #[inline]
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// Successor board if the move completed, otherwise the original.
    pub fn board(&self) -> &Board {
        self.successor.as_ref().unwrap_or(self.original)
    }

    /// Successor board, or `None` when the move was rejected.
    pub fn into_board(self) -> Option<Board> {
        self.successor
    }
}
