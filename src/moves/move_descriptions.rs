//! Move value types.
//!
//! A [`Move`] is a `(from, to, kind)` triple. The kind is a closed set of
//! eight variants: a single step or a capturing jump in one of the four
//! diagonal directions.

use std::fmt;

use crate::game_state::checkers_types::Square;

/// Diagonal direction, relative to the board as drawn (row 0 on top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Fixed generation order.
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::UpLeft => 0,
            Direction::UpRight => 1,
            Direction::DownLeft => 2,
            Direction::DownRight => 3,
        }
    }

    /// `(d_row, d_col)` of a single step.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Step(Direction),
    Capture(Direction),
}

impl MoveKind {
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(self, MoveKind::Capture(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Self { from, to, kind }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.kind.is_capture()
    }
}

/// 1-based square numbers, `-` for a step and `x` for a capture.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from + 1, separator, self.to + 1)
    }
}
