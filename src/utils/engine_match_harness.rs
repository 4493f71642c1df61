//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other from a start
//! position, with an optional seeded random opening prefix, and stops on a
//! side without moves, three-fold repetition or the ply cap.

use std::time::Instant;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::{Position, Side};
use crate::move_generation::legal_move_apply::{apply_legal_move, apply_move};
use crate::move_generation::legal_move_generator::generate_moves;
use crate::moves::move_descriptions::Move;
use crate::search::repetition::RepetitionHistory;

/// Occurrences of one position that end the game as a draw.
pub const REPETITION_DRAW_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The named side won because its opponent had no legal move.
    Win(Side),
    DrawRepetition,
    DrawMaxPlies,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_random_plies: u8,
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_random_plies: 0,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_position: Position,
    pub opening_moves: Vec<Move>,
    pub played_moves: Vec<Move>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchResult {
    pub fn report(&self) -> String {
        let avg_ms = |total_ns: u128, moves: u32| {
            if moves == 0 {
                0.0
            } else {
                total_ns as f64 / f64::from(moves) / 1_000_000.0
            }
        };
        format!(
            "outcome={:?} plies={} white_avg_ms={:.3} black_avg_ms={:.3}",
            self.outcome,
            self.opening_moves.len() + self.played_moves.len(),
            avg_ms(self.white_total_time_ns, self.white_move_count),
            avg_ms(self.black_total_time_ns, self.black_move_count)
        )
    }
}

pub fn play_engine_match(
    white: &mut dyn Engine,
    black: &mut dyn Engine,
    start: Position,
    config: &MatchConfig,
) -> CheckersResult<MatchResult> {
    play_engine_match_with(white, black, start, config, |_, _, _| {})
}

/// Like [`play_engine_match`], calling `on_move` with the position after
/// every engine move.
pub fn play_engine_match_with<F>(
    white: &mut dyn Engine,
    black: &mut dyn Engine,
    start: Position,
    config: &MatchConfig,
    mut on_move: F,
) -> CheckersResult<MatchResult>
where
    F: FnMut(&Position, Move, &EngineOutput),
{
    white.new_game();
    black.new_game();

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut position = start;
    let mut history = RepetitionHistory::starting_from(&position);
    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_position: position,
        opening_moves: Vec::new(),
        played_moves: Vec::new(),
        white_move_count: 0,
        black_move_count: 0,
        white_total_time_ns: 0,
        black_total_time_ns: 0,
    };

    for _ in 0..config.opening_random_plies {
        let moves = generate_moves(&position);
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        position = apply_move(&position, mv);
        history.push(&position);
        result.opening_moves.push(mv);
    }

    let mut plies = result.opening_moves.len();
    loop {
        if generate_moves(&position).is_empty() {
            let winner = position.side_to_move().opposite();
            info!("{winner:?} wins: {:?} has no legal moves", position.side_to_move());
            result.outcome = MatchOutcome::Win(winner);
            break;
        }
        if history.occurrences(position.hash()) >= REPETITION_DRAW_COUNT {
            warn!("draw by repetition after {plies} plies");
            result.outcome = MatchOutcome::DrawRepetition;
            break;
        }
        if plies >= usize::from(config.max_plies) {
            warn!("draw by ply cap ({})", config.max_plies);
            result.outcome = MatchOutcome::DrawMaxPlies;
            break;
        }

        let mover = position.side_to_move();
        let engine: &mut dyn Engine = match mover {
            Side::White => &mut *white,
            Side::Black => &mut *black,
        };

        let started = Instant::now();
        let output = engine.choose_move(&position, &history)?;
        let elapsed = started.elapsed().as_nanos();

        let mv = output.best_move.ok_or(CheckersError::NoLegalMoves)?;
        position = apply_legal_move(&position, mv)?;
        history.push(&position);
        result.played_moves.push(mv);
        plies += 1;

        match mover {
            Side::White => {
                result.white_move_count += 1;
                result.white_total_time_ns += elapsed;
            }
            Side::Black => {
                result.black_move_count += 1;
                result.black_total_time_ns += elapsed;
            }
        }

        info!(
            "ply {plies}: {mover:?} ({}) plays {mv} score {:?}",
            engine.name(),
            output.score
        );
        on_move(&position, mv, &output);
    }

    result.final_position = position;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::{play_engine_match, MatchConfig, MatchOutcome};
    use crate::engines::engine_alpha_beta::{AlphaBetaEngine, SearchConfig};
    use crate::engines::engine_random::RandomEngine;
    use crate::game_state::checkers_types::{Position, Side};

    #[test]
    fn random_match_terminates_and_is_reproducible() {
        let config = MatchConfig {
            max_plies: 200,
            opening_random_plies: 4,
            seed: 42,
        };
        let run = || {
            let mut white = RandomEngine::seeded(1);
            let mut black = RandomEngine::seeded(2);
            play_engine_match(&mut white, &mut black, Position::new_game(), &config)
                .expect("match runs")
        };
        let a = run();
        let b = run();
        assert_eq!(a.opening_moves.len(), 4);
        assert_eq!(a.played_moves, b.played_moves);
        assert_eq!(a.outcome, b.outcome);
        assert!(a.played_moves.len() + 4 <= 200);
        assert!(a.final_position.is_consistent());
    }

    #[test]
    fn side_without_moves_loses_immediately() {
        let position = Position::from_text("..../..../..../..../..../..../..../b... w")
            .expect("text parses");
        let mut white = RandomEngine::seeded(0);
        let mut black = RandomEngine::seeded(0);
        let result = play_engine_match(&mut white, &mut black, position, &MatchConfig::default())
            .expect("match runs");
        assert_eq!(result.outcome, MatchOutcome::Win(Side::Black));
        assert!(result.played_moves.is_empty());
    }

    #[test]
    fn searching_engine_beats_lone_man() {
        // White king and man against a single black man.
        let position = Position::from_text("...b/..../.W../..../..../..w./..../.... w")
            .expect("text parses");
        let config = SearchConfig {
            max_depth: 4,
            move_time: None,
            table_size_log2: 14,
        };
        let mut white = AlphaBetaEngine::new(config).expect("table fits");
        let mut black = RandomEngine::seeded(5);
        let result = play_engine_match(
            &mut white,
            &mut black,
            position,
            &MatchConfig {
                max_plies: 80,
                ..MatchConfig::default()
            },
        )
        .expect("match runs");
        assert_ne!(result.outcome, MatchOutcome::Win(Side::Black));
        assert!(result.white_move_count > 0);
    }
}
