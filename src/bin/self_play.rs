//! Minimax (White) against a random mover (Black).
//!
//! Run with:
//! `cargo run --release --bin self_play -- --plies 40 --depth 2 --seed 7 --verbose`
//!
//! Without `--depth` the search depth comes from `MAILBOX_CHESS_DEPTH`.

use mailbox_chess::engines::engine_minimax::MinimaxEngine;
use mailbox_chess::engines::engine_random::RandomEngine;
use mailbox_chess::engines::engine_trait::Engine;
use mailbox_chess::game_state::board::Board;
use mailbox_chess::game_state::chess_types::Side;
use mailbox_chess::search::minimax::SearchConfig;
use mailbox_chess::utils::logging::{init_logging, init_logging_with_default};
use tracing::{info, warn};

struct Options {
    plies: usize,
    depth: Option<u8>,
    seed: Option<u64>,
    verbose: bool,
}

fn parse_options() -> Result<Options, String> {
    let mut options = Options {
        plies: 40,
        depth: None,
        seed: None,
        verbose: false,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--verbose" | "-v" => options.verbose = true,
            "--plies" => options.plies = parse_value(&arg, args.next())?,
            "--depth" => options.depth = Some(parse_value(&arg, args.next())?),
            "--seed" => options.seed = Some(parse_value(&arg, args.next())?),
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(options)
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .map_err(|_| format!("invalid value for {flag}: {value}"))
}

fn main() -> Result<(), String> {
    let options = parse_options()?;
    if options.verbose {
        init_logging_with_default("debug");
    } else {
        init_logging();
    }

    let mut config = SearchConfig::from_env();
    if let Some(depth) = options.depth {
        config.depth = depth;
    }

    let mut white = MinimaxEngine::new(config);
    let mut black = match options.seed {
        Some(seed) => RandomEngine::with_seed(seed),
        None => RandomEngine::new(),
    };
    white.new_game();
    black.new_game();

    let mut board = Board::initial();
    println!("{board}\n");

    for ply in 1..=options.plies {
        let player = board.current_player();
        if player.is_checkmate() {
            info!(loser = %player.side(), ply, "checkmate");
            println!("{} is checkmated", player.side());
            break;
        }
        if player.is_stalemate() {
            info!(side = %player.side(), ply, "stalemate");
            println!("{} is stalemated", player.side());
            break;
        }

        let engine: &mut dyn Engine = match board.side_to_move() {
            Side::White => &mut white,
            Side::Black => &mut black,
        };
        let output = engine.choose_move(&board).map_err(|e| e.to_string())?;
        for line in &output.info_lines {
            info!(engine = engine.name(), "{line}");
        }
        let Some(mv) = output.best_move else {
            warn!(engine = engine.name(), "engine returned no move");
            break;
        };

        let transition = board
            .current_player()
            .make_move(&mv)
            .map_err(|e| e.to_string())?;
        let status = transition.status();
        let Some(next) = transition.into_board() else {
            return Err(format!("{} chose a rejected move {mv}: {status:?}", engine.name()));
        };

        println!("{ply:>3}. {} {mv}", engine.name());
        println!("{next}\n");
        board = next;
    }

    Ok(())
}
