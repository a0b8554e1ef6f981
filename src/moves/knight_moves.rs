use crate::game_state::board::BoardLayout;
use crate::game_state::board_geometry::knight_crosses_edge;
use crate::game_state::piece::Piece;
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::stepping_moves;

pub const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

pub fn knight_moves(piece: Piece, layout: &BoardLayout) -> Vec<Move> {
    stepping_moves(piece, layout, &KNIGHT_OFFSETS, knight_crosses_edge)
}

#[cfg(test)]
mod tests {
    use super::knight_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{PieceKind, Side};
    use crate::game_state::piece::Piece;

    fn knight_targets(square: u8) -> Vec<u8> {
        let mut builder = Board::builder();
        builder
            .put_piece(Piece::new(PieceKind::King, Side::White, 63))
            .put_piece(Piece::new(PieceKind::King, Side::Black, 0))
            .put_piece(Piece::new(PieceKind::Knight, Side::White, square));
        let board = builder.build().expect("fixture should build");
        let knight = board.tile(square).expect("knight placed");
        let mut targets: Vec<u8> = knight_moves(knight, board.layout())
            .iter()
            .filter_map(|mv| mv.destination())
            .collect();
        targets.sort_unstable();
        targets
    }

    #[test]
    fn knight_from_d5_has_eight_targets() {
        assert_eq!(knight_targets(27).len(), 8);
    }

    #[test]
    fn knight_on_edges_never_wraps() {
        // a4
        assert_eq!(knight_targets(32), vec![17, 26, 42, 49]);
        // h4
        assert_eq!(knight_targets(39), vec![22, 29, 45, 54]);
        // b4
        assert_eq!(knight_targets(33), vec![16, 18, 27, 43, 48, 50]);
        // g4
        assert_eq!(knight_targets(38), vec![21, 23, 28, 44, 53, 55]);
    }
}
