//! Computer-player abstraction.
//!
//! Engines pick a move for the side to move on a board. Callers apply the
//! move themselves through
//! [`Player::make_move`](crate::player::player::Player::make_move).

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the side to move has no completing move.
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, board: &Board) -> ChessResult<EngineOutput>;
}
