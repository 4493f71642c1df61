//! Self-play driver: the engine plays both sides from a start position,
//! printing the board after every move.
//!
//! Run with:
//! `cargo run --release -- --depth 8`
//! `cargo run --release -- --position "bbbb/bbbb/bbbb/..../..../wwww/wwww/wwww w" --log-level debug`

use std::time::Duration;

use clap::Parser;
use log::{error, info};

use checkers_engine::engines::engine_alpha_beta::{AlphaBetaEngine, SearchConfig};
use checkers_engine::errors::CheckersError;
use checkers_engine::game_state::checkers_rules::STARTING_POSITION_TEXT;
use checkers_engine::game_state::checkers_types::Position;
use checkers_engine::search::transposition_table::TranspositionTable;
use checkers_engine::utils::engine_match_harness::{play_engine_match_with, MatchConfig};
use checkers_engine::utils::render_game_state::render_game_state;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maximum search depth in plies.
    #[arg(long, default_value_t = 6)]
    depth: u8,
    /// Stop the game as a draw after this many plies.
    #[arg(long, default_value_t = 200)]
    max_plies: u16,
    /// Transposition table holds 2^N entries.
    #[arg(long, default_value_t = TranspositionTable::DEFAULT_SIZE_LOG2)]
    tt_size_log2: u8,
    /// Stop deepening once this many milliseconds have passed.
    #[arg(long)]
    move_time_ms: Option<u64>,
    /// Start position in text snapshot form.
    #[arg(long, default_value = STARTING_POSITION_TEXT)]
    position: String,
    /// error, warn, info, debug or trace.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), CheckersError> {
    let args = Args::parse();
    let level = args.log_level.parse().unwrap_or(log::Level::Info);
    if let Err(e) = simple_logger::init_with_level(level) {
        eprintln!("logger already initialised: {e}");
    }

    let started = chrono::Local::now();
    let start = Position::from_text(&args.position)?;

    println!("Initial board state:");
    println!("{}", render_game_state(&start));

    let config = SearchConfig {
        max_depth: args.depth,
        move_time: args.move_time_ms.map(Duration::from_millis),
        table_size_log2: args.tt_size_log2,
    };
    let mut white = AlphaBetaEngine::new(config)?;
    let mut black = AlphaBetaEngine::new(config)?;

    let match_config = MatchConfig {
        max_plies: args.max_plies,
        ..MatchConfig::default()
    };
    let result = play_engine_match_with(&mut white, &mut black, start, &match_config, |position, mv, _| {
        println!("\nBest move: {mv}");
        println!("Board after move:");
        println!("{}", render_game_state(position));
    });

    let elapsed = chrono::Local::now() - started;
    match result {
        Ok(result) => {
            println!("\nGame over: {:?}", result.outcome);
            info!("{}", result.report());
        }
        Err(e) => {
            error!("game aborted: {e}");
            return Err(e);
        }
    }
    println!(
        "Execution time: {} ms (started {})",
        elapsed.num_milliseconds(),
        started.format("%Y-%m-%d %H:%M:%S")
    );
    Ok(())
}
