use crate::game_state::board::BoardLayout;
use crate::game_state::piece::Piece;
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::sliding_moves;

pub const BISHOP_OFFSETS: [i8; 4] = [-9, -7, 7, 9];

pub fn bishop_moves(piece: Piece, layout: &BoardLayout) -> Vec<Move> {
    sliding_moves(piece, layout, &BISHOP_OFFSETS)
}

#[cfg(test)]
mod tests {
    use super::bishop_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{PieceKind, Side};
    use crate::game_state::piece::Piece;

    fn lone_bishop_board(square: u8) -> Board {
        let mut builder = Board::builder();
        builder
            .put_piece(Piece::new(PieceKind::King, Side::White, 63))
            .put_piece(Piece::new(PieceKind::King, Side::Black, 7))
            .put_piece(Piece::new(PieceKind::Bishop, Side::White, square));
        builder.build().expect("fixture should build")
    }

    #[test]
    fn bishop_in_centre_stops_before_own_king() {
        let board = lone_bishop_board(27);
        let bishop = board.tile(27).expect("bishop on d5");
        // h1 is blocked by the white king.
        assert_eq!(bishop_moves(bishop, board.layout()).len(), 12);
    }

    #[test]
    fn bishop_on_a_file_does_not_wrap() {
        let board = lone_bishop_board(32);
        let bishop = board.tile(32).expect("bishop on a4");
        let destinations: Vec<u8> = bishop_moves(bishop, board.layout())
            .iter()
            .filter_map(|mv| mv.destination())
            .collect();
        assert!(destinations.iter().all(|sq| sq % 8 != 7));
        assert_eq!(destinations.len(), 7);
    }
}
