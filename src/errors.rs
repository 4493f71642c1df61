//! Errors used throughout the checkers engine.
//!
//! `CheckersError` is the single error type returned by position setup,
//! checked move application, transposition table construction and search.
//!
//! - `NoLegalMoves` is a game outcome, not a fault: the side to move has lost.
//! - `InvalidDepth`, `TableSizeNotPowerOfTwo` and `InvalidPosition` are
//!   caller misuse and are rejected before any work is done.
//! - `IllegalMove` reports a move that the position does not generate.

use std::error::Error;
use std::fmt;

use crate::moves::move_descriptions::Move;

pub type CheckersResult<T> = Result<T, CheckersError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckersError {
    /// The side to move has no legal moves.
    NoLegalMoves,
    /// Root search requested with the given (unusable) depth.
    InvalidDepth(u8),
    /// Transposition table size must be a non-zero power of two.
    TableSizeNotPowerOfTwo(usize),
    /// Bitboards or a text snapshot that violate the board invariants.
    InvalidPosition(String),
    /// A move that is not legal in the position it was applied to.
    IllegalMove(Move),
}

impl fmt::Display for CheckersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckersError::NoLegalMoves => write!(f, "no legal moves available"),
            CheckersError::InvalidDepth(depth) => {
                write!(f, "search depth must be at least 1, got {depth}")
            }
            CheckersError::TableSizeNotPowerOfTwo(size) => {
                write!(f, "transposition table size {size} is not a power of two")
            }
            CheckersError::InvalidPosition(msg) => write!(f, "invalid position: {msg}"),
            CheckersError::IllegalMove(mv) => write!(f, "illegal move {mv}"),
        }
    }
}

impl Error for CheckersError {}

#[cfg(test)]
mod tests {
    use super::CheckersError;
    use crate::moves::move_descriptions::{Direction, Move, MoveKind};

    #[test]
    fn messages_are_descriptive() {
        assert_eq!(
            CheckersError::NoLegalMoves.to_string(),
            "no legal moves available"
        );
        assert_eq!(
            CheckersError::TableSizeNotPowerOfTwo(1000).to_string(),
            "transposition table size 1000 is not a power of two"
        );
        let mv = Move::new(8, 12, MoveKind::Step(Direction::DownLeft));
        assert_eq!(CheckersError::IllegalMove(mv).to_string(), "illegal move 9-13");
    }
}
