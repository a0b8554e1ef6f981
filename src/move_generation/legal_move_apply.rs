//! Move execution: builds the successor board for a move.
//!
//! Execution never checks legality. The moving piece must be on the board,
//! and the `Invalid` sentinel is rejected.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::moves::move_descriptions::Move;

pub fn execute_move(mv: &Move, board: &Board) -> ChessResult<Board> {
    let Some(core) = mv.core() else {
        return Err(ChessError::InvalidMoveExecuted);
    };
    let moving_piece = core.moving_piece;
    if board.tile(moving_piece.square()) != Some(moving_piece) {
        return Err(ChessError::NoPieceOnSquare(moving_piece.square()));
    }

    let mover = moving_piece.side();
    let castle_rook = mv.castle_rook();
    let targeted = mv.targeted_piece();

    let mut builder = Board::builder();
    for piece in board.pieces(mover) {
        let is_castle_rook = castle_rook.is_some_and(|castle| castle.rook == piece);
        if piece != moving_piece && !is_castle_rook {
            builder.put_piece(piece);
        }
    }
    for piece in board.pieces(mover.opposite()) {
        if Some(piece) != targeted {
            builder.put_piece(piece);
        }
    }

    let placed = if mv.is_promotion() {
        moving_piece.promoted(core.destination)
    } else {
        moving_piece.moved_to(core.destination)
    };
    builder.put_piece(placed);

    if let Some(castle) = castle_rook {
        builder.put_piece(castle.rook.moved_to(castle.destination));
    }

    for side in [mover, mover.opposite()] {
        builder.set_castled(side, board.has_castled(side));
    }
    if castle_rook.is_some() {
        builder.set_castled(mover, true);
    }

    if matches!(mv, Move::PawnDoubleMove(_)) {
        builder.set_en_passant(placed);
    }

    builder.set_mover(mover.opposite());
    builder.build()
}
