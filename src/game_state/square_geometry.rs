//! Mapping between playable square indices and `(row, col)` board coordinates.
//!
//! Row 0 is drawn at the top. Even rows hold playable squares on odd columns,
//! odd rows on even columns, four per row.

use crate::game_state::checkers_types::Square;

/// Index of the dark square at `(row, col)`, or `None` for light or
/// off-board coordinates.
#[inline]
pub const fn index_from_rc(row: i32, col: i32) -> Option<Square> {
    if row < 0 || row >= 8 || col < 0 || col >= 8 {
        return None;
    }
    if (row + col) % 2 == 0 {
        return None;
    }
    Some((row * 4 + col / 2) as Square)
}

#[inline]
pub const fn rc_from_index(square: Square) -> (i32, i32) {
    let row = (square / 4) as i32;
    let slot = (square % 4) as i32;
    let col = if row % 2 == 0 { 2 * slot + 1 } else { 2 * slot };
    (row, col)
}
