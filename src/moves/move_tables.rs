//! Precomputed step and jump tables for every square and diagonal direction.
//!
//! Built at compile time from the square geometry, so edge squares never
//! wrap onto the opposite side of an adjacent row.

use crate::game_state::checkers_types::{Bitboard, Side, Square, SQUARE_COUNT};
use crate::game_state::square_geometry::{index_from_rc, rc_from_index};
use crate::moves::move_descriptions::Direction;

#[derive(Debug, Clone, Copy)]
pub struct MoveTables {
    steps: [[Bitboard; 4]; SQUARE_COUNT],
    jumps: [[Bitboard; 4]; SQUARE_COUNT],
    jumped: [[Option<Square>; 4]; SQUARE_COUNT],
}

pub static MOVE_TABLES: MoveTables = MoveTables::build();

const WHITE_MAN_DIRECTIONS: [Direction; 2] = [Direction::UpLeft, Direction::UpRight];
const BLACK_MAN_DIRECTIONS: [Direction; 2] = [Direction::DownLeft, Direction::DownRight];

/// Directions a man of `side` may move and capture in.
#[inline]
pub const fn man_directions(side: Side) -> &'static [Direction] {
    match side {
        Side::White => &WHITE_MAN_DIRECTIONS,
        Side::Black => &BLACK_MAN_DIRECTIONS,
    }
}

/// Kings move and capture in all four directions.
#[inline]
pub const fn king_directions() -> &'static [Direction] {
    &Direction::ALL
}

impl MoveTables {
    const fn build() -> Self {
        let mut steps = [[0; 4]; SQUARE_COUNT];
        let mut jumps = [[0; 4]; SQUARE_COUNT];
        let mut jumped = [[None; 4]; SQUARE_COUNT];

        let mut sq = 0usize;
        while sq < SQUARE_COUNT {
            let (row, col) = rc_from_index(sq as Square);
            let mut d = 0usize;
            while d < 4 {
                let (d_row, d_col) = Direction::ALL[d].delta();

                if let Some(step) = index_from_rc(row + d_row, col + d_col) {
                    steps[sq][d] = 1 << step;
                    if let Some(landing) = index_from_rc(row + 2 * d_row, col + 2 * d_col) {
                        jumps[sq][d] = 1 << landing;
                        jumped[sq][d] = Some(step);
                    }
                }
                d += 1;
            }
            sq += 1;
        }

        Self {
            steps,
            jumps,
            jumped,
        }
    }

    /// Single-step destination mask, empty when the step leaves the board.
    #[inline]
    pub const fn step(&self, square: Square, direction: Direction) -> Bitboard {
        self.steps[square as usize][direction.index()]
    }

    /// Two-step landing mask, empty when the jump leaves the board.
    #[inline]
    pub const fn jump(&self, square: Square, direction: Direction) -> Bitboard {
        self.jumps[square as usize][direction.index()]
    }

    /// Square passed over by a jump, `None` when the jump leaves the board.
    #[inline]
    pub const fn jumped_square(&self, square: Square, direction: Direction) -> Option<Square> {
        self.jumped[square as usize][direction.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::{man_directions, MOVE_TABLES};
    use crate::game_state::checkers_types::Side;
    use crate::game_state::square_geometry::rc_from_index;
    use crate::moves::move_descriptions::Direction;

    #[test]
    fn left_edge_square_does_not_wrap() {
        // Square 4 is (1, 0): nothing to its left.
        assert_eq!(MOVE_TABLES.step(4, Direction::UpLeft), 0);
        assert_eq!(MOVE_TABLES.step(4, Direction::DownLeft), 0);
        assert_eq!(MOVE_TABLES.step(4, Direction::UpRight), 1 << 0);
        assert_eq!(MOVE_TABLES.step(4, Direction::DownRight), 1 << 8);
    }

    #[test]
    fn right_edge_square_does_not_wrap() {
        // Square 3 is (0, 7).
        assert_eq!(MOVE_TABLES.step(3, Direction::UpRight), 0);
        assert_eq!(MOVE_TABLES.step(3, Direction::DownRight), 0);
        assert_eq!(MOVE_TABLES.step(3, Direction::DownLeft), 1 << 7);
        assert_eq!(MOVE_TABLES.jump(3, Direction::DownLeft), 1 << 10);
        assert_eq!(MOVE_TABLES.jumped_square(3, Direction::DownLeft), Some(7));
    }

    #[test]
    fn every_entry_is_geometrically_consistent() {
        for sq in 0..32u8 {
            let (row, col) = rc_from_index(sq);
            for direction in Direction::ALL {
                let (d_row, d_col) = direction.delta();
                let step = MOVE_TABLES.step(sq, direction);
                if step != 0 {
                    assert_eq!(step.count_ones(), 1);
                    let target = step.trailing_zeros() as u8;
                    assert_eq!(rc_from_index(target), (row + d_row, col + d_col));
                }
                let jump = MOVE_TABLES.jump(sq, direction);
                match MOVE_TABLES.jumped_square(sq, direction) {
                    Some(mid) => {
                        assert_eq!(jump.count_ones(), 1);
                        assert_eq!(1u32 << mid, step);
                        let landing = jump.trailing_zeros() as u8;
                        assert_eq!(rc_from_index(landing), (row + 2 * d_row, col + 2 * d_col));
                    }
                    None => assert_eq!(jump, 0),
                }
            }
        }
    }

    #[test]
    fn men_only_move_forward() {
        assert_eq!(man_directions(Side::White), &[Direction::UpLeft, Direction::UpRight]);
        assert_eq!(
            man_directions(Side::Black),
            &[Direction::DownLeft, Direction::DownRight]
        );
    }
}
