#![allow(dead_code)]

use mailbox_chess::game_state::board::{Board, BoardBuilder};
use mailbox_chess::game_state::chess_types::{PieceKind, Side, Square};
use mailbox_chess::game_state::piece::Piece;
use mailbox_chess::move_generation::move_creator::create_move;
use mailbox_chess::player::move_transition::MoveStatus;

/// Mailbox index of an algebraic square name, `"a8" == 0`, `"h1" == 63`.
pub fn sq(name: &str) -> Square {
    let bytes = name.as_bytes();
    assert_eq!(bytes.len(), 2, "square name must be two characters: {name}");
    let file = bytes[0] - b'a';
    let rank = bytes[1] - b'0';
    assert!(file < 8 && (1..=8).contains(&rank), "bad square name: {name}");
    (8 - rank) * 8 + file
}

/// Plays `from -> to` for the side to move and returns the successor board.
pub fn play(board: &Board, from: &str, to: &str) -> Board {
    let mv = create_move(board, sq(from), sq(to));
    assert!(!mv.is_invalid(), "no legal move {from}-{to}");
    let transition = board
        .current_player()
        .make_move(&mv)
        .expect("move should execute");
    assert_eq!(transition.status(), MoveStatus::Completed, "{from}-{to}");
    transition.into_board().expect("completed move has a board")
}

pub fn play_line(board: &Board, line: &[(&str, &str)]) -> Board {
    line.iter()
        .fold(board.clone(), |current, (from, to)| play(&current, from, to))
}

pub fn piece(kind: PieceKind, side: Side, square: &str) -> Piece {
    Piece::new(kind, side, sq(square))
}

pub fn moved_piece(kind: PieceKind, side: Side, square: &str) -> Piece {
    Piece::with_first_move(kind, side, sq(square), false)
}

pub fn builder_with(pieces: &[Piece]) -> BoardBuilder {
    let mut builder = Board::builder();
    for piece in pieces {
        builder.put_piece(*piece);
    }
    builder
}
