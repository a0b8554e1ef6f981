//! Immutable board snapshots and the builder that produces them.
//!
//! A [`Board`] is created once per ply by [`BoardBuilder::build`] and never
//! mutated afterwards. Both sides' [`PlayerRecord`]s (king, legal moves, check
//! status) are computed eagerly during construction, because each side needs
//! the opponent's moves to decide whether its own king is attacked.

use std::collections::BTreeMap;
use std::fmt;

use tracing::trace;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{back_rank_start, pawn_rank_start, BACK_RANK_ORDER};
use crate::game_state::chess_types::{PieceKind, Side, Square, TOTAL_SQUARES};
use crate::game_state::piece::Piece;
use crate::move_generation::move_generator::side_piece_moves;
use crate::moves::move_descriptions::Move;
use crate::player::player::{Player, PlayerRecord};
use crate::utils::render_game_state::render_game_state;

/// Piece placement plus the pending en-passant pawn.
///
/// This is everything per-piece move generation needs to probe squares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    tiles: [Option<Piece>; TOTAL_SQUARES],
    en_passant_pawn: Option<Piece>,
}

impl BoardLayout {
    #[inline]
    pub fn tile(&self, square: Square) -> Option<Piece> {
        self.tiles.get(square as usize).copied().flatten()
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.tile(square).is_some()
    }

    /// Pawn that double-stepped on the previous ply, if any.
    #[inline]
    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    /// Active pieces of `side` in square order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Piece> + '_ {
        self.tiles
            .iter()
            .flatten()
            .copied()
            .filter(move |piece| piece.side() == side)
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    layout: BoardLayout,
    side_to_move: Side,
    castled: [bool; 2],
    players: [PlayerRecord; 2],
}

impl Board {
    #[inline]
    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    /// Standard starting position, White to move.
    pub fn initial() -> Self {
        let mut builder = BoardBuilder::new();
        for side in [Side::Black, Side::White] {
            let back_rank = back_rank_start(side);
            let pawn_rank = pawn_rank_start(side);
            for (file, kind) in BACK_RANK_ORDER.iter().enumerate() {
                let file = file as Square;
                builder.put_piece(Piece::new(*kind, side, back_rank + file));
                builder.put_piece(Piece::new(PieceKind::Pawn, side, pawn_rank + file));
            }
        }
        builder.set_mover(Side::White);
        builder
            .build()
            .expect("standard starting position should always build")
    }

    #[inline]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    #[inline]
    pub fn tile(&self, square: Square) -> Option<Piece> {
        self.layout.tile(square)
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.layout.en_passant_pawn()
    }

    #[inline]
    pub fn has_castled(&self, side: Side) -> bool {
        self.castled[side.index()]
    }

    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Piece> + '_ {
        self.layout.pieces(side)
    }

    #[inline]
    pub fn player(&self, side: Side) -> Player<'_> {
        Player::new(self, &self.players[side.index()])
    }

    #[inline]
    pub fn white_player(&self) -> Player<'_> {
        self.player(Side::White)
    }

    #[inline]
    pub fn black_player(&self) -> Player<'_> {
        self.player(Side::Black)
    }

    #[inline]
    pub fn current_player(&self) -> Player<'_> {
        self.player(self.side_to_move)
    }

    /// Legal moves of both sides, White's first.
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> + '_ {
        self.players[Side::White.index()]
            .legal_moves()
            .iter()
            .chain(self.players[Side::Black.index()].legal_moves().iter())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}

/// Mutable scratch space consumed into an immutable [`Board`].
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    piece_positions: BTreeMap<Square, Piece>,
    mover: Side,
    en_passant_pawn: Option<Piece>,
    castled: [bool; 2],
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self {
            piece_positions: BTreeMap::new(),
            mover: Side::White,
            en_passant_pawn: None,
            castled: [false; 2],
        }
    }

    /// Places `piece` on its own square, replacing any previous occupant.
    pub fn put_piece(&mut self, piece: Piece) -> &mut Self {
        self.piece_positions.insert(piece.square(), piece);
        self
    }

    pub fn set_mover(&mut self, side: Side) -> &mut Self {
        self.mover = side;
        self
    }

    pub fn set_en_passant(&mut self, pawn: Piece) -> &mut Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    pub fn set_castled(&mut self, side: Side, castled: bool) -> &mut Self {
        self.castled[side.index()] = castled;
        self
    }

    pub fn build(self) -> ChessResult<Board> {
        let mut tiles = [None; TOTAL_SQUARES];
        for (square, piece) in self.piece_positions {
            let slot = tiles
                .get_mut(square as usize)
                .ok_or(ChessError::SquareOutOfRange(square as usize))?;
            *slot = Some(piece);
        }

        let layout = BoardLayout {
            tiles,
            en_passant_pawn: self.en_passant_pawn,
        };

        let white_moves = side_piece_moves(&layout, Side::White);
        let black_moves = side_piece_moves(&layout, Side::Black);
        let white = PlayerRecord::new(&layout, Side::White, &white_moves, &black_moves)?;
        let black = PlayerRecord::new(&layout, Side::Black, &black_moves, &white_moves)?;

        trace!(
            white_moves = white.legal_moves().len(),
            black_moves = black.legal_moves().len(),
            mover = %self.mover,
            "built board"
        );

        Ok(Board {
            layout,
            side_to_move: self.mover,
            castled: self.castled,
            players: [white, black],
        })
    }
}
