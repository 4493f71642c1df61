//! Engine abstraction layer used by the self-play harness and the binary.
//!
//! Defines the common output payload so different move-selection strategies
//! can be swapped behind a single trait interface.

use crate::errors::CheckersResult;
use crate::game_state::checkers_types::Position;
use crate::moves::move_descriptions::Move;
use crate::search::repetition::RepetitionHistory;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// Search score from the mover's perspective, when the engine searches.
    pub score: Option<i32>,
    pub reached_depth: u8,
    pub nodes: u64,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Forget anything cached from a previous game.
    fn new_game(&mut self) {}

    /// Pick a move for the side to move. `history` holds the positions
    /// already played in this game.
    fn choose_move(
        &mut self,
        position: &Position,
        history: &RepetitionHistory,
    ) -> CheckersResult<EngineOutput>;
}
