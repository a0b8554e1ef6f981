//! Crate root module declarations for the mailbox chess engine.
//!
//! Exposes the board model, per-piece move generation, player rule queries,
//! minimax search and the engine wrappers so binaries, tests and benches can
//! import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod board_geometry;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod move_creator;
    pub mod move_generator;
    pub mod perft;
}

pub mod player {
    pub mod move_transition;
    pub mod player;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod logging;
    pub mod render_game_state;
}
