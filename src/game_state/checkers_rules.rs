//! Canonical checkers rule constants.
//!
//! Black occupies squares `0..12` (rows 0-2) and White squares `20..32`
//! (rows 5-7) at the start; White moves first.

use crate::game_state::checkers_types::{Bitboard, Side};

pub const STARTING_WHITE: Bitboard = 0xFFF0_0000;
pub const STARTING_BLACK: Bitboard = 0x0000_0FFF;

/// Squares 0..4, where White men promote.
pub const ROW_0: Bitboard = 0x0000_000F;
/// Squares 28..32, where Black men promote.
pub const ROW_7: Bitboard = 0xF000_0000;

pub const PIECES_PER_SIDE: u32 = 12;

/// Squares on which a man of `side` is crowned.
#[inline]
pub const fn promotion_squares(side: Side) -> Bitboard {
    match side {
        Side::White => ROW_0,
        Side::Black => ROW_7,
    }
}

/// Starting position in the 32-character text snapshot format.
pub const STARTING_POSITION_TEXT: &str = "bbbbbbbbbbbb........wwwwwwwwwwww w";
