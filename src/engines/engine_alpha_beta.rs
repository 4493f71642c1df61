//! Iterative-deepening engine over the alpha-beta root search.
//!
//! Each iteration is a full fixed-depth root search; the transposition table
//! carries results from shallower iterations into deeper ones and across
//! moves of the same game. An optional move time is checked between
//! iterations only, never inside one.

use std::time::{Duration, Instant};

use log::debug;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::Position;
use crate::search::alpha_beta::{AlphaBetaSearch, SearchOutcome};
use crate::search::board_scoring::{BoardScorer, HeuristicScorer};
use crate::search::repetition::RepetitionHistory;
use crate::search::transposition_table::TranspositionTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub move_time: Option<Duration>,
    pub table_size_log2: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 6,
            move_time: None,
            table_size_log2: TranspositionTable::DEFAULT_SIZE_LOG2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AlphaBetaEngine<S: BoardScorer = HeuristicScorer> {
    search: AlphaBetaSearch<S>,
    config: SearchConfig,
}

impl AlphaBetaEngine<HeuristicScorer> {
    pub fn new(config: SearchConfig) -> CheckersResult<Self> {
        Self::with_scorer(HeuristicScorer, config)
    }
}

impl<S: BoardScorer> AlphaBetaEngine<S> {
    pub fn with_scorer(scorer: S, config: SearchConfig) -> CheckersResult<Self> {
        let table = TranspositionTable::with_size_log2(config.table_size_log2)?;
        Ok(Self {
            search: AlphaBetaSearch::new(scorer, table),
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Deepen from 1 to `max_depth`, keeping the deepest completed result.
    pub fn iterative_deepening(
        &mut self,
        position: &Position,
        history: &RepetitionHistory,
    ) -> CheckersResult<(SearchOutcome, Vec<String>)> {
        let started = Instant::now();
        let deadline = self.config.move_time.map(|t| started + t);
        let mut info_lines = Vec::new();
        let mut total_nodes = 0u64;
        let mut last: Option<SearchOutcome> = None;

        for depth in 1..=self.config.max_depth {
            let outcome = self.search.best_move(position, depth, history)?;
            total_nodes += outcome.nodes;

            let line = format!(
                "info depth {} score {} nodes {} time_ms {} pv {}",
                depth,
                outcome.score,
                outcome.nodes,
                started.elapsed().as_millis(),
                outcome.best_move
            );
            debug!("{line}");
            info_lines.push(line);
            last = Some(outcome);

            if deadline.is_some_and(|d| Instant::now() >= d) {
                break;
            }
        }

        let mut outcome = last.ok_or(CheckersError::InvalidDepth(self.config.max_depth))?;
        outcome.nodes = total_nodes;
        Ok((outcome, info_lines))
    }
}

impl<S: BoardScorer> Engine for AlphaBetaEngine<S> {
    fn name(&self) -> &str {
        "alpha_beta"
    }

    fn new_game(&mut self) {
        self.search.clear_table();
    }

    fn choose_move(
        &mut self,
        position: &Position,
        history: &RepetitionHistory,
    ) -> CheckersResult<EngineOutput> {
        let (outcome, info_lines) = self.iterative_deepening(position, history)?;
        Ok(EngineOutput {
            best_move: Some(outcome.best_move),
            score: Some(outcome.score),
            reached_depth: outcome.depth,
            nodes: outcome.nodes,
            info_lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{AlphaBetaEngine, SearchConfig};
    use crate::engines::engine_trait::Engine;
    use crate::errors::CheckersError;
    use crate::game_state::checkers_types::Position;
    use crate::move_generation::legal_move_generator::generate_moves;
    use crate::search::board_scoring::MaterialScorer;
    use crate::search::repetition::RepetitionHistory;

    fn small_config(max_depth: u8) -> SearchConfig {
        SearchConfig {
            max_depth,
            move_time: None,
            table_size_log2: 12,
        }
    }

    #[test]
    fn reaches_the_configured_depth() {
        let mut engine = AlphaBetaEngine::new(small_config(4)).expect("table fits");
        let position = Position::new_game();
        let output = engine
            .choose_move(&position, &RepetitionHistory::starting_from(&position))
            .expect("opening has moves");
        assert_eq!(output.reached_depth, 4);
        assert_eq!(output.info_lines.len(), 4);
        let mv = output.best_move.expect("move chosen");
        assert!(generate_moves(&position).contains(&mv));
    }

    #[test]
    fn zero_move_time_stops_after_first_iteration() {
        let config = SearchConfig {
            move_time: Some(Duration::ZERO),
            ..small_config(8)
        };
        let mut engine = AlphaBetaEngine::with_scorer(MaterialScorer, config).expect("table fits");
        let output = engine
            .choose_move(&Position::new_game(), &RepetitionHistory::new())
            .expect("opening has moves");
        assert_eq!(output.reached_depth, 1);
    }

    #[test]
    fn zero_max_depth_is_rejected() {
        let mut engine = AlphaBetaEngine::new(small_config(0)).expect("table fits");
        let err = engine
            .choose_move(&Position::new_game(), &RepetitionHistory::new())
            .expect_err("depth zero");
        assert_eq!(err, CheckersError::InvalidDepth(0));
    }

    #[test]
    fn oversized_table_is_rejected() {
        let config = SearchConfig {
            table_size_log2: 200,
            ..SearchConfig::default()
        };
        assert!(AlphaBetaEngine::new(config).is_err());
    }

    #[test]
    fn new_game_keeps_engine_usable() {
        let mut engine = AlphaBetaEngine::new(small_config(3)).expect("table fits");
        let position = Position::new_game();
        let first = engine
            .choose_move(&position, &RepetitionHistory::new())
            .expect("moves");
        engine.new_game();
        let second = engine
            .choose_move(&position, &RepetitionHistory::new())
            .expect("moves");
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
    }
}
