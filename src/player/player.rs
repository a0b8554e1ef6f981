//! Per-side view of a board: legal moves, check, checkmate and stalemate.
//!
//! [`PlayerRecord`] is the data computed once when a board is built.
//! [`Player`] borrows a record together with its board and answers rule
//! queries, running candidate moves through [`Player::make_move`] to decide
//! legality.

use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::{Board, BoardLayout};
use crate::game_state::chess_types::Side;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_checks::{attacks_on, calculate_castling_moves, is_attacked};
use crate::moves::move_descriptions::Move;
use crate::player::move_transition::{MoveStatus, MoveTransition};

#[derive(Debug, Clone)]
pub struct PlayerRecord {
    side: Side,
    king: Piece,
    legal_moves: Vec<Move>,
    in_check: bool,
    escape: OnceLock<bool>,
}

impl PlayerRecord {
    /// `own_moves` and `opponent_moves` are the allowed piece moves of each
    /// side on `layout`; castling is appended here.
    pub fn new(
        layout: &BoardLayout,
        side: Side,
        own_moves: &[Move],
        opponent_moves: &[Move],
    ) -> ChessResult<Self> {
        let mut kings = layout.pieces(side).filter(Piece::is_king);
        let king = kings.next().ok_or(ChessError::MissingKing(side))?;
        if kings.next().is_some() {
            return Err(ChessError::ExtraKing(side));
        }

        let in_check = is_attacked(king.square(), opponent_moves);
        let mut legal_moves = own_moves.to_vec();
        legal_moves.extend(calculate_castling_moves(
            layout,
            side,
            king,
            in_check,
            opponent_moves,
        ));

        Ok(Self {
            side,
            king,
            legal_moves,
            in_check,
            escape: OnceLock::new(),
        })
    }

    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Player<'a> {
    board: &'a Board,
    record: &'a PlayerRecord,
}

impl<'a> Player<'a> {
    #[inline]
    pub(crate) fn new(board: &'a Board, record: &'a PlayerRecord) -> Self {
        Self { board, record }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.record.side
    }

    #[inline]
    pub fn king(&self) -> Piece {
        self.record.king
    }

    #[inline]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Allowed piece moves plus castling. Moves exposing the king are still
    /// included and are rejected by [`Player::make_move`].
    #[inline]
    pub fn legal_moves(&self) -> &'a [Move] {
        &self.record.legal_moves
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.record.in_check
    }

    #[inline]
    pub fn has_castled(&self) -> bool {
        self.board.has_castled(self.side())
    }

    pub fn active_pieces(&self) -> impl Iterator<Item = Piece> + 'a {
        self.board.pieces(self.record.side)
    }

    #[inline]
    pub fn opponent(&self) -> Player<'a> {
        self.board.player(self.side().opposite())
    }

    #[inline]
    pub fn is_legal_move(&self, mv: &Move) -> bool {
        self.record.legal_moves.contains(mv)
    }

    /// Tries `mv` for this player.
    ///
    /// Moves outside the legal set come back as [`MoveStatus::IllegalMove`],
    /// moves that leave the own king attacked as
    /// [`MoveStatus::LeavesKingInCheck`]; neither is an error. `Err` means an
    /// invariant broke while building the successor board.
    pub fn make_move(&self, mv: &Move) -> ChessResult<MoveTransition<'a>> {
        if !self.is_legal_move(mv) {
            debug!(side = %self.side(), mv = %mv, "rejected move outside legal set");
            return Ok(MoveTransition::rejected(self.board, *mv, MoveStatus::IllegalMove));
        }

        let successor = mv.execute(self.board)?;
        let own_king = successor.player(self.side()).king();
        let opponent_moves = successor.player(self.side().opposite()).legal_moves();
        if !attacks_on(own_king.square(), opponent_moves).is_empty() {
            debug!(side = %self.side(), mv = %mv, "rejected move leaving king in check");
            return Ok(MoveTransition::rejected(
                self.board,
                *mv,
                MoveStatus::LeavesKingInCheck,
            ));
        }

        Ok(MoveTransition::completed(self.board, successor, *mv))
    }

    /// True when at least one legal move completes. Computed once per board.
    pub fn has_escape_move(&self) -> bool {
        *self.record.escape.get_or_init(|| {
            self.legal_moves().iter().any(|mv| match self.make_move(mv) {
                Ok(transition) => transition.status().is_completed(),
                Err(err) => {
                    warn!(side = %self.side(), mv = %mv, error = %err, "move probe failed");
                    false
                }
            })
        })
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_escape_move()
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_escape_move()
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{PieceKind, Side};
    use crate::game_state::piece::Piece;
    use crate::move_generation::move_creator::create_move;
    use crate::player::move_transition::MoveStatus;

    #[test]
    fn initial_players() {
        let board = Board::initial();
        let white = board.current_player();
        assert_eq!(white.side(), Side::White);
        assert_eq!(white.king().square(), 60);
        assert_eq!(white.active_pieces().count(), 16);
        assert_eq!(white.opponent().side(), Side::Black);
        assert!(!white.is_checkmate());
        assert!(!white.is_stalemate());
        assert!(white.has_escape_move());
    }

    #[test]
    fn make_move_rejects_moves_outside_the_legal_set() {
        let board = Board::initial();
        let black_move = create_move(&board, 12, 28);
        let transition = board
            .white_player()
            .make_move(&black_move)
            .expect("rejection is not an error");
        assert_eq!(transition.status(), MoveStatus::IllegalMove);
        assert_eq!(transition.mv(), black_move);
        assert!(std::ptr::eq(transition.board(), &board));
    }

    #[test]
    fn make_move_rejects_self_check() {
        // The e2 knight is pinned by the e8 rook.
        let mut builder = Board::builder();
        builder
            .put_piece(Piece::new(PieceKind::King, Side::White, 60))
            .put_piece(Piece::new(PieceKind::Knight, Side::White, 52))
            .put_piece(Piece::new(PieceKind::Rook, Side::Black, 4))
            .put_piece(Piece::new(PieceKind::King, Side::Black, 0));
        let board = builder.build().expect("fixture should build");

        let knight_move = create_move(&board, 52, 37);
        let transition = board
            .white_player()
            .make_move(&knight_move)
            .expect("rejection is not an error");
        assert_eq!(transition.status(), MoveStatus::LeavesKingInCheck);
        assert!(transition.into_board().is_none());
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut builder = Board::builder();
        builder
            .put_piece(Piece::new(PieceKind::King, Side::White, 60))
            .put_piece(Piece::new(PieceKind::Rook, Side::Black, 5))
            .put_piece(Piece::new(PieceKind::King, Side::Black, 0));
        let board = builder.build().expect("fixture should build");
        let white = board.white_player();

        let into_file = white
            .make_move(&create_move(&board, 60, 61))
            .expect("probe");
        assert_eq!(into_file.status(), MoveStatus::LeavesKingInCheck);

        let sideways = white
            .make_move(&create_move(&board, 60, 59))
            .expect("probe");
        assert_eq!(sideways.status(), MoveStatus::Completed);
    }
}
