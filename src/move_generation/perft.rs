use std::thread;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::move_generation::move_generator::{generate_completed_moves, GeneratedMove};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Counts completing move sequences of length `depth` from `board`, starting
/// with the side to move.
pub fn perft(board: &Board, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for generated in generate_completed_moves(board, board.side_to_move())? {
        perft_recurse(&generated, depth, 1, &mut total)?;
    }
    Ok(total)
}

/// Same as [`perft`], with one scoped thread per root move.
pub fn perft_multi_threaded(board: &Board, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return perft(board, depth);
    }

    let root_moves = generate_completed_moves(board, board.side_to_move())?;
    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|generated| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(generated, depth, 1, &mut local).map(|()| local)
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            let local = handle
                .join()
                .map_err(|_| ChessError::SearchWorkerPanicked)??;
            total.merge(local);
        }
        Ok(total)
    })
}

fn perft_recurse(
    generated: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    let next = &generated.board_after_move;

    if current_depth == search_depth {
        let mv = &generated.mv;
        counts.nodes += 1;
        if mv.is_capture() {
            counts.captures += 1;
        }
        if mv.is_en_passant() {
            counts.en_passant += 1;
        }
        if mv.is_castle() {
            counts.castles += 1;
        }
        if mv.is_promotion() {
            counts.promotions += 1;
        }

        let defender = next.current_player();
        if defender.is_in_check() {
            counts.checks += 1;
            if defender.is_checkmate() {
                counts.checkmates += 1;
            }
        }
        return Ok(());
    }

    for child in generate_completed_moves(next, next.side_to_move())? {
        perft_recurse(&child, search_depth, current_depth + 1, counts)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_multi_threaded, PerftCounts};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{PieceKind, Side};
    use crate::game_state::piece::Piece;

    #[test]
    fn start_position_shallow_counts() {
        let board = Board::initial();
        assert_eq!(perft(&board, 0).expect("perft 0").nodes, 1);
        assert_eq!(perft(&board, 1).expect("perft 1").nodes, 20);
        assert_eq!(perft(&board, 2).expect("perft 2").nodes, 400);
    }

    #[test]
    fn start_position_depth_three_breakdown() {
        let board = Board::initial();
        let counts = perft(&board, 3).expect("perft 3");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                checks: 12,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn threaded_perft_matches_single_threaded() {
        let board = Board::initial();
        assert_eq!(
            perft_multi_threaded(&board, 2).expect("threaded perft"),
            perft(&board, 2).expect("perft")
        );
    }

    #[test]
    fn castles_and_promotions_are_counted() {
        let mut builder = Board::builder();
        builder
            .put_piece(Piece::new(PieceKind::King, Side::White, 60))
            .put_piece(Piece::new(PieceKind::Rook, Side::White, 63))
            .put_piece(Piece::with_first_move(PieceKind::Pawn, Side::White, 9, false))
            .put_piece(Piece::new(PieceKind::King, Side::Black, 24));
        let board = builder.build().expect("fixture should build");
        let counts = perft(&board, 1).expect("perft 1");
        // King 5 + O-O 1 + rook 9 + promotion 1.
        assert_eq!(counts.nodes, 16);
        assert_eq!(counts.castles, 1);
        assert_eq!(counts.promotions, 1);
    }
}
