//! Plain-text board renderer.
//!
//! Upper-case letters are White, lower-case Black, `-` an empty square.
//! Rank 8 (square 0) is printed first.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

pub fn render_game_state(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank_label = char::from(b'8' - row);
        out.push(rank_label);
        out.push(' ');

        for column in 0..8u8 {
            let square: Square = row * 8 + column;
            match board.tile(square) {
                Some(piece) => out.push_str(&piece.to_string()),
                None => out.push('-'),
            }
            if column < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::board::Board;

    #[test]
    fn renders_initial_position() {
        let rendered = render_game_state(&Board::initial());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 r n b q k b n r 8");
        assert_eq!(lines[2], "7 p p p p p p p p 7");
        assert_eq!(lines[4], "5 - - - - - - - - 5");
        assert_eq!(lines[8], "1 R N B Q K B N R 1");
        assert_eq!(Board::initial().to_string(), rendered);
    }
}
