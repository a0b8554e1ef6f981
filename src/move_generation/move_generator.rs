//! Move aggregation over a whole side.
//!
//! Two layers: [`side_piece_moves`] collects what every piece of a side could
//! do on a layout (no castling, no king safety), and
//! [`generate_completed_moves`] runs each of a player's legal moves through
//! `make_move`, keeping only those that complete along with the board they
//! produce.

use crate::chess_errors::ChessResult;
use crate::game_state::board::{Board, BoardLayout};
use crate::game_state::chess_types::Side;
use crate::moves::move_descriptions::Move;

/// A move that completed, paired with the board it produced.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub mv: Move,
    pub board_after_move: Board,
}

/// Allowed moves of every piece of `side`, in square order then per-piece order.
pub fn side_piece_moves(layout: &BoardLayout, side: Side) -> Vec<Move> {
    layout
        .pieces(side)
        .flat_map(|piece| piece.allowed_moves(layout))
        .collect()
}

/// Completing moves of `side` on `board`, in legal-move enumeration order.
pub fn generate_completed_moves(board: &Board, side: Side) -> ChessResult<Vec<GeneratedMove>> {
    let player = board.player(side);
    let mut out = Vec::with_capacity(player.legal_moves().len());
    for mv in player.legal_moves() {
        let transition = player.make_move(mv)?;
        if let Some(board_after_move) = transition.into_board() {
            out.push(GeneratedMove {
                mv: *mv,
                board_after_move,
            });
        }
    }
    Ok(out)
}
