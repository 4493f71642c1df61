//! Core value types shared by every subsystem.
//!
//! Squares are indices `0..32` over the dark squares of an 8x8 board, and a
//! [`Bitboard`] holds one bit per square index.

pub use crate::game_state::position::Position;

/// Playable square index (`0..32`).
pub type Square = u8;

/// One bit per playable square.
pub type Bitboard = u32;

pub const SQUARE_COUNT: usize = 32;

/// Every playable square.
pub const ALL_SQUARES: Bitboard = 0xFFFF_FFFF;

#[inline]
pub const fn square_mask(square: Square) -> Bitboard {
    1 << square
}

/// Side to move. White moves first and advances toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row a man of this side promotes on.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }
}

/// Occupant of a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    WhiteMan,
    WhiteKing,
    BlackMan,
    BlackKing,
}

impl Piece {
    #[inline]
    pub const fn new(side: Side, is_king: bool) -> Self {
        match (side, is_king) {
            (Side::White, false) => Piece::WhiteMan,
            (Side::White, true) => Piece::WhiteKing,
            (Side::Black, false) => Piece::BlackMan,
            (Side::Black, true) => Piece::BlackKing,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Piece::WhiteMan => 0,
            Piece::WhiteKing => 1,
            Piece::BlackMan => 2,
            Piece::BlackKing => 3,
        }
    }

    #[inline]
    pub const fn side(self) -> Side {
        match self {
            Piece::WhiteMan | Piece::WhiteKing => Side::White,
            Piece::BlackMan | Piece::BlackKing => Side::Black,
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, Piece::WhiteKing | Piece::BlackKing)
    }

    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Piece::WhiteMan => 'w',
            Piece::WhiteKing => 'W',
            Piece::BlackMan => 'b',
            Piece::BlackKing => 'B',
        }
    }

    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'w' => Some(Piece::WhiteMan),
            'W' => Some(Piece::WhiteKing),
            'b' => Some(Piece::BlackMan),
            'B' => Some(Piece::BlackKing),
            _ => None,
        }
    }
}

pub const ALL_PIECES: [Piece; 4] = [
    Piece::WhiteMan,
    Piece::WhiteKing,
    Piece::BlackMan,
    Piece::BlackKing,
];

#[cfg(test)]
mod tests {
    use super::{Piece, Side, ALL_PIECES};

    #[test]
    fn piece_char_round_trips() {
        for piece in ALL_PIECES {
            assert_eq!(Piece::from_char(piece.to_char()), Some(piece));
        }
        assert_eq!(Piece::from_char('.'), None);
    }

    #[test]
    fn piece_new_matches_side_and_rank() {
        assert_eq!(Piece::new(Side::Black, true), Piece::BlackKing);
        assert_eq!(Piece::new(Side::White, false).side(), Side::White);
        assert!(!Piece::WhiteMan.is_king());
    }
}
