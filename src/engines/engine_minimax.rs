//! Engine wrapper around [`Minimax`].

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::search::board_scoring::{BoardScorer, StandardScorer};
use crate::search::minimax::{Minimax, SearchConfig};

pub struct MinimaxEngine<S: BoardScorer = StandardScorer> {
    search: Minimax<S>,
}

impl MinimaxEngine<StandardScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            search: Minimax::from_config(config),
        }
    }
}

impl Default for MinimaxEngine<StandardScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        Self {
            search: Minimax::with_scorer(config, scorer),
        }
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose_move(&mut self, board: &Board) -> ChessResult<EngineOutput> {
        let mut out = EngineOutput::default();
        match self.search.search(board) {
            Ok(result) => {
                out.info_lines.push(format!(
                    "info depth {} score {} nodes {} time_ms {}",
                    self.search.config().depth.max(1),
                    result.best_score,
                    result.nodes,
                    result.elapsed.as_millis()
                ));
                out.best_move = Some(result.best_move);
                Ok(out)
            }
            Err(ChessError::NoLegalMoves(_)) => {
                out.info_lines.push("info string no legal moves".to_owned());
                Ok(out)
            }
            Err(err) => Err(err),
        }
    }
}
