//! Negamax alpha-beta search with a transposition table and a root-level
//! repetition penalty.
//!
//! Scores are from the perspective of the side to move at each node, so the
//! maximising side is always the mover and a child score is negated on the
//! way back up.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::Position;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::generate_moves;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{BoardScorer, WIN_SCORE};
use crate::search::repetition::RepetitionHistory;
use crate::search::transposition_table::{Bound, TranspositionTable};

/// Open window bound, strictly outside every reachable score.
pub const INFINITY_SCORE: i32 = WIN_SCORE + 1;

/// Subtracted from a root move whose resulting position has already been
/// played `REPETITION_THRESHOLD` times. Larger than any material swing,
/// far smaller than `WIN_SCORE`.
pub const REPETITION_PENALTY: i32 = 2_500;
pub const REPETITION_THRESHOLD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: Move,
    pub score: i32,
    pub depth: u8,
    pub nodes: u64,
}

#[derive(Debug, Clone)]
pub struct AlphaBetaSearch<S: BoardScorer> {
    scorer: S,
    table: TranspositionTable,
    nodes: u64,
}

impl<S: BoardScorer> AlphaBetaSearch<S> {
    pub fn new(scorer: S, table: TranspositionTable) -> Self {
        Self {
            scorer,
            table,
            nodes: 0,
        }
    }

    pub fn with_table_size(scorer: S, size: usize) -> CheckersResult<Self> {
        Ok(Self::new(scorer, TranspositionTable::new(size)?))
    }

    #[inline]
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    #[inline]
    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    #[inline]
    pub fn clear_table(&mut self) {
        self.table.clear();
    }

    /// Nodes visited since the last root search began.
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Best move for the side to move, searched `depth` plies deep.
    ///
    /// Fails with `NoLegalMoves` when the mover is stuck or has no pieces,
    /// and with `InvalidDepth` for a zero depth.
    pub fn best_move(
        &mut self,
        position: &Position,
        depth: u8,
        history: &RepetitionHistory,
    ) -> CheckersResult<SearchOutcome> {
        if depth == 0 {
            return Err(CheckersError::InvalidDepth(depth));
        }
        let moves = generate_moves(position);
        if moves.is_empty() {
            return Err(CheckersError::NoLegalMoves);
        }

        self.nodes = 1;
        let mut alpha = -INFINITY_SCORE;
        let beta = INFINITY_SCORE;
        let mut best: Option<(Move, i32)> = None;

        for mv in moves {
            let child = apply_move(position, mv);
            let mut score = -self.search(&child, depth - 1, -beta, -alpha);
            if history.occurrences(child.hash()) >= REPETITION_THRESHOLD {
                score -= REPETITION_PENALTY;
            }

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        let (best_move, score) = best.ok_or(CheckersError::NoLegalMoves)?;
        Ok(SearchOutcome {
            best_move,
            score,
            depth,
            nodes: self.nodes,
        })
    }

    /// Negamax value of `position` within `(alpha, beta)`.
    pub fn search(&mut self, position: &Position, depth: u8, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return self.scorer.score(position);
        }

        let alpha_orig = alpha;
        let key = position.hash();
        if let Some((score, bound)) = self.table.lookup(key, depth) {
            match bound {
                Bound::Exact => return score,
                Bound::Lower if score >= beta => return score,
                Bound::Upper if score <= alpha => return score,
                _ => {}
            }
        }

        let moves = generate_moves(position);
        if moves.is_empty() {
            return -WIN_SCORE;
        }

        let mut best = -INFINITY_SCORE;
        for mv in moves {
            let child = apply_move(position, mv);
            let score = -self.search(&child, depth - 1, -beta, -alpha);

            if score > best {
                best = score;
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }

        let bound = if best <= alpha_orig {
            Bound::Upper
        } else if best >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.table.store(key, depth, best, bound);

        best
    }
}
