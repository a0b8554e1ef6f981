//! Random-move engine.
//!
//! Picks uniformly among completing moves. Used for self-play opponents and
//! randomized playout tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::move_generation::move_generator::generate_completed_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible move sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, board: &Board) -> ChessResult<EngineOutput> {
        let completed = generate_completed_moves(board, board.side_to_move())?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            completed.len()
        ));
        out.best_move = completed
            .as_slice()
            .choose(&mut self.rng)
            .map(|generated| generated.mv);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board::Board;

    #[test]
    fn same_seed_same_choice() {
        let board = Board::initial();
        let a = RandomEngine::with_seed(7).choose_move(&board).expect("choice");
        let b = RandomEngine::with_seed(7).choose_move(&board).expect("choice");
        assert_eq!(a.best_move, b.best_move);
        let mv = a.best_move.expect("opening has moves");
        assert!(board.white_player().is_legal_move(&mv));
    }
}
