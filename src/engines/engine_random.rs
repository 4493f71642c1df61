//! Baseline engine that plays a uniformly random legal move.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::Position;
use crate::move_generation::legal_move_generator::generate_moves;
use crate::search::repetition::RepetitionHistory;

#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// Reproducible move sequence for tests and matches.
    pub fn seeded(seed: u64) -> Self {
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
        "random"
    }

    fn choose_move(
        &mut self,
        position: &Position,
        _history: &RepetitionHistory,
    ) -> CheckersResult<EngineOutput> {
        let moves = generate_moves(position);
        let chosen = moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(CheckersError::NoLegalMoves)?;
        Ok(EngineOutput {
            best_move: Some(chosen),
            info_lines: vec![format!("info string random pick among {}", moves.len())],
            ..EngineOutput::default()
        })
    }
}
