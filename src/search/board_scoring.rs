//! Pluggable board evaluation.
//!
//! Scores are always White minus Black: positive favours White regardless of
//! whose turn it is. Search maximizes on White's plies and minimizes on
//! Black's.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Side;
use crate::player::player::Player;

pub const CHECK_BONUS: i32 = 50;
pub const CASTLED_BONUS: i32 = 60;
pub const CHECKMATE_BONUS: i32 = 10_000;

pub trait BoardScorer: Send + Sync {
    /// `depth` is the remaining search depth at the node being scored.
    fn score(&self, board: &Board, depth: u8) -> i32;
}

/// Mates found with more depth left (closer to the root) weigh more.
#[inline]
pub const fn depth_multiplier(depth: u8) -> i32 {
    if depth == 0 {
        1
    } else {
        100 * depth as i32
    }
}

/// Material, mobility, check, checkmate and castling terms per side.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl StandardScorer {
    fn side_score(board: &Board, side: Side, depth: u8) -> i32 {
        let player = board.player(side);
        let opponent = player.opponent();
        material(&player)
            + mobility(&player)
            + check_bonus(&opponent)
            + checkmate_bonus(&opponent, depth)
            + castled_bonus(&player)
    }
}

impl BoardScorer for StandardScorer {
    fn score(&self, board: &Board, depth: u8) -> i32 {
        Self::side_score(board, Side::White, depth) - Self::side_score(board, Side::Black, depth)
    }
}

/// Piece values only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board, _depth: u8) -> i32 {
        material(&board.white_player()) - material(&board.black_player())
    }
}

#[inline]
fn material(player: &Player<'_>) -> i32 {
    player.active_pieces().map(|piece| piece.points()).sum()
}

#[inline]
fn mobility(player: &Player<'_>) -> i32 {
    player.legal_moves().len() as i32
}

#[inline]
fn check_bonus(opponent: &Player<'_>) -> i32 {
    if opponent.is_in_check() {
        CHECK_BONUS
    } else {
        0
    }
}

#[inline]
fn checkmate_bonus(opponent: &Player<'_>, depth: u8) -> i32 {
    if opponent.is_checkmate() {
        CHECKMATE_BONUS * depth_multiplier(depth)
    } else {
        0
    }
}

#[inline]
fn castled_bonus(player: &Player<'_>) -> i32 {
    if player.has_castled() {
        CASTLED_BONUS
    } else {
        0
    }
}
