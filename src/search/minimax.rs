//! Fixed-depth minimax without pruning.
//!
//! White maximizes and Black minimizes the scorer's White-minus-Black value.
//! Every completing move is explored to the configured depth. Among root moves
//! with equal scores the first one enumerated wins, so results are
//! reproducible for a given board.

use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Side;
use crate::move_generation::move_generator::{generate_completed_moves, GeneratedMove};
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{BoardScorer, StandardScorer};

pub const DEPTH_ENV_VAR: &str = "MAILBOX_CHESS_DEPTH";
pub const PARALLEL_ENV_VAR: &str = "MAILBOX_CHESS_PARALLEL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    /// Score root moves on scoped worker threads.
    pub parallel_root: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            parallel_root: false,
        }
    }
}

impl SearchConfig {
    /// Defaults overridden by `MAILBOX_CHESS_DEPTH` and `MAILBOX_CHESS_PARALLEL`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(DEPTH_ENV_VAR) {
            match raw.trim().parse::<u8>() {
                Ok(depth) if depth > 0 => config.depth = depth,
                _ => warn!(value = %raw, "ignoring malformed {DEPTH_ENV_VAR}"),
            }
        }

        if let Ok(raw) = std::env::var(PARALLEL_ENV_VAR) {
            match parse_flag(&raw) {
                Some(flag) => config.parallel_root = flag,
                None => warn!(value = %raw, "ignoring malformed {PARALLEL_ENV_VAR}"),
            }
        }

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    pub best_move: Move,
    pub best_score: i32,
    pub nodes: u64,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct Minimax<S: BoardScorer = StandardScorer> {
    config: SearchConfig,
    scorer: S,
}

impl Minimax<StandardScorer> {
    pub fn new(depth: u8) -> Self {
        Self::from_config(SearchConfig {
            depth,
            ..SearchConfig::default()
        })
    }

    pub fn from_config(config: SearchConfig) -> Self {
        Self::with_scorer(config, StandardScorer)
    }
}

impl<S: BoardScorer> Minimax<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        Self { config, scorer }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Best move for the side to move on `board`.
    pub fn run(&self, board: &Board) -> ChessResult<Move> {
        self.search(board).map(|result| result.best_move)
    }

    pub fn search(&self, board: &Board) -> ChessResult<SearchResult> {
        let started = Instant::now();
        let side = board.side_to_move();
        let depth = self.config.depth.max(1);

        info!(%side, depth, parallel = self.config.parallel_root, "minimax search started");

        let root_moves = generate_completed_moves(board, side)?;
        if root_moves.is_empty() {
            return Err(ChessError::NoLegalMoves(side));
        }

        let scored = if self.config.parallel_root {
            self.score_root_parallel(&root_moves, side, depth)?
        } else {
            let mut scored = Vec::with_capacity(root_moves.len());
            for generated in &root_moves {
                scored.push(self.score_root_move(generated, side, depth)?);
            }
            scored
        };

        let mut nodes = 1u64;
        let mut best: Option<(Move, i32)> = None;
        for (generated, (score, subtree_nodes)) in root_moves.iter().zip(scored) {
            nodes += subtree_nodes;
            debug!(mv = %generated.mv, score, "root move scored");
            // Strict comparison: the first-enumerated move keeps a tie.
            let improves = match best {
                None => true,
                Some((_, best_score)) => match side {
                    Side::White => score > best_score,
                    Side::Black => score < best_score,
                },
            };
            if improves {
                best = Some((generated.mv, score));
            }
        }

        let (best_move, best_score) = best.ok_or(ChessError::NoLegalMoves(side))?;
        let elapsed = started.elapsed();
        info!(
            %side,
            depth,
            nodes,
            elapsed_ms = elapsed.as_millis() as u64,
            best_move = %best_move,
            best_score,
            "minimax search finished"
        );

        Ok(SearchResult {
            best_move,
            best_score,
            nodes,
            elapsed,
        })
    }

    fn score_root_parallel(
        &self,
        root_moves: &[GeneratedMove],
        side: Side,
        depth: u8,
    ) -> ChessResult<Vec<(i32, u64)>> {
        thread::scope(|scope| {
            let handles: Vec<_> = root_moves
                .iter()
                .map(|generated| scope.spawn(move || self.score_root_move(generated, side, depth)))
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or(Err(ChessError::SearchWorkerPanicked))
                })
                .collect()
        })
    }

    /// Score of one root move plus the nodes visited below it.
    fn score_root_move(
        &self,
        generated: &GeneratedMove,
        side: Side,
        depth: u8,
    ) -> ChessResult<(i32, u64)> {
        let mut nodes = 0u64;
        let next = &generated.board_after_move;
        let score = match side {
            Side::White => self.min_value(next, depth - 1, &mut nodes)?,
            Side::Black => self.max_value(next, depth - 1, &mut nodes)?,
        };
        Ok((score, nodes))
    }

    fn is_leaf(board: &Board, depth: u8) -> bool {
        let player = board.current_player();
        depth == 0 || player.is_checkmate() || player.is_stalemate()
    }

    fn max_value(&self, board: &Board, depth: u8, nodes: &mut u64) -> ChessResult<i32> {
        *nodes += 1;
        if Self::is_leaf(board, depth) {
            return Ok(self.scorer.score(board, depth));
        }

        let mut best = i32::MIN;
        for child in generate_completed_moves(board, board.side_to_move())? {
            best = best.max(self.min_value(&child.board_after_move, depth - 1, nodes)?);
        }
        Ok(best)
    }

    fn min_value(&self, board: &Board, depth: u8, nodes: &mut u64) -> ChessResult<i32> {
        *nodes += 1;
        if Self::is_leaf(board, depth) {
            return Ok(self.scorer.score(board, depth));
        }

        let mut best = i32::MAX;
        for child in generate_completed_moves(board, board.side_to_move())? {
            best = best.min(self.max_value(&child.board_after_move, depth - 1, nodes)?);
        }
        Ok(best)
    }
}
