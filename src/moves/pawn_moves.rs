//! Pawn pushes, captures, promotions and en passant.
//!
//! Direction is `side.direction() * 8`: White walks towards index 0, Black
//! towards index 63. Every pawn reaching the far row becomes a queen.

use crate::game_state::board::BoardLayout;
use crate::game_state::board_geometry::{
    crosses_side_edge, is_pawn_start_square, is_promotion_square, offset_square,
};
use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::moves::move_descriptions::{Move, MoveCore};

/// Diagonal step sizes before applying the side's direction.
const CAPTURE_STEPS: [i8; 2] = [7, 9];

pub fn pawn_moves(piece: Piece, layout: &BoardLayout) -> Vec<Move> {
    let mut moves = Vec::new();
    let side = piece.side();
    let forward = 8 * side.direction();

    if let Some(single) = offset_square(piece.square(), forward) {
        if !layout.is_occupied(single) {
            moves.push(advance(piece, single, None));

            if piece.is_first_move() && is_pawn_start_square(side, piece.square()) {
                if let Some(double) = offset_square(single, forward) {
                    if !layout.is_occupied(double) {
                        moves.push(Move::PawnDoubleMove(MoveCore::new(piece, double)));
                    }
                }
            }
        }
    }

    for step in CAPTURE_STEPS {
        let offset = step * side.direction();
        if crosses_side_edge(piece.square(), offset) {
            continue;
        }
        let Some(destination) = offset_square(piece.square(), offset) else {
            continue;
        };

        match layout.tile(destination) {
            Some(occupant) if occupant.side() != side => {
                moves.push(advance(piece, destination, Some(occupant)));
            }
            Some(_) => {}
            None => {
                if let Some(targeted) = en_passant_target(piece, layout, destination) {
                    moves.push(Move::EnPassant {
                        core: MoveCore::new(piece, destination),
                        targeted,
                    });
                }
            }
        }
    }

    moves
}

/// Forward move or diagonal capture, promoting on the far row.
fn advance(piece: Piece, destination: Square, targeted: Option<Piece>) -> Move {
    let core = MoveCore::new(piece, destination);
    if is_promotion_square(piece.side(), destination) {
        return Move::PawnPromotion { core, targeted };
    }
    match targeted {
        Some(targeted) => Move::Capture { core, targeted },
        None => Move::Normal(core),
    }
}

/// Enemy pawn that double-stepped last ply and now sits beside `piece`,
/// directly behind `destination`.
fn en_passant_target(piece: Piece, layout: &BoardLayout, destination: Square) -> Option<Piece> {
    let pawn = layout.en_passant_pawn()?;
    let behind = offset_square(destination, -8 * piece.side().direction())?;
    (pawn.side() != piece.side() && pawn.square() == behind).then_some(pawn)
}

#[cfg(test)]
mod tests {
    use super::pawn_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{PieceKind, Side};
    use crate::game_state::piece::Piece;
    use crate::moves::move_descriptions::Move;

    fn kings() -> crate::game_state::board::BoardBuilder {
        let mut builder = Board::builder();
        builder
            .put_piece(Piece::new(PieceKind::King, Side::White, 60))
            .put_piece(Piece::new(PieceKind::King, Side::Black, 4));
        builder
    }

    #[test]
    fn unmoved_pawn_pushes_one_or_two() {
        let board = Board::initial();
        let pawn = board.tile(52).expect("e2 pawn");
        let moves = pawn_moves(pawn, board.layout());
        assert_eq!(moves.len(), 2);
        assert!(matches!(moves[0], Move::Normal(_)));
        assert!(matches!(moves[1], Move::PawnDoubleMove(_)));
    }

    #[test]
    fn blocked_pawn_cannot_double_step() {
        let mut builder = kings();
        builder
            .put_piece(Piece::new(PieceKind::Pawn, Side::White, 51))
            .put_piece(Piece::new(PieceKind::Knight, Side::Black, 35));
        let board = builder.build().expect("fixture should build");
        let pawn = board.tile(51).expect("d2 pawn");
        let moves = pawn_moves(pawn, board.layout());
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].destination(), Some(43));
    }

    #[test]
    fn moved_pawn_off_start_row_single_steps_only() {
        let mut builder = kings();
        builder.put_piece(Piece::with_first_move(
            PieceKind::Pawn,
            Side::Black,
            20,
            false,
        ));
        let board = builder.build().expect("fixture should build");
        let pawn = board.tile(20).expect("black pawn");
        let moves = pawn_moves(pawn, board.layout());
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].destination(), Some(28));
    }

    #[test]
    fn edge_pawn_captures_only_inwards() {
        let mut builder = kings();
        builder
            .put_piece(Piece::new(PieceKind::Pawn, Side::White, 48))
            .put_piece(Piece::new(PieceKind::Rook, Side::Black, 41))
            .put_piece(Piece::new(PieceKind::Rook, Side::Black, 39));
        let board = builder.build().expect("fixture should build");
        let pawn = board.tile(48).expect("a2 pawn");
        let captures: Vec<_> = pawn_moves(pawn, board.layout())
            .into_iter()
            .filter(|mv| mv.is_capture())
            .collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].destination(), Some(41));
    }

    #[test]
    fn reaching_far_row_promotes() {
        let mut builder = kings();
        builder
            .put_piece(Piece::with_first_move(PieceKind::Pawn, Side::White, 8, false))
            .put_piece(Piece::new(PieceKind::Bishop, Side::Black, 1));
        let board = builder.build().expect("fixture should build");
        let pawn = board.tile(8).expect("a7 pawn");
        let moves = pawn_moves(pawn, board.layout());
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| mv.is_promotion()));
        assert_eq!(moves.iter().filter(|mv| mv.is_capture()).count(), 1);
    }

    #[test]
    fn en_passant_requires_adjacent_enemy_double_stepper() {
        let black_pawn = Piece::with_first_move(PieceKind::Pawn, Side::Black, 27, false);
        let mut builder = kings();
        builder
            .put_piece(Piece::with_first_move(PieceKind::Pawn, Side::White, 28, false))
            .put_piece(black_pawn)
            .set_en_passant(black_pawn)
            .set_mover(Side::White);
        let board = builder.build().expect("fixture should build");
        let pawn = board.tile(28).expect("e5 pawn");
        let moves = pawn_moves(pawn, board.layout());
        let en_passant: Vec<_> = moves.iter().filter(|mv| mv.is_en_passant()).collect();
        assert_eq!(en_passant.len(), 1);
        assert_eq!(en_passant[0].destination(), Some(19));
        assert_eq!(en_passant[0].targeted_piece(), Some(black_pawn));
    }
}
