//! Immutable checkers position.
//!
//! `Position` is the central model for the engine: White and Black piece
//! bitboards, a king bitboard overlapping them, the derived empty-square
//! mask, the side to move and an incremental Zobrist hash. Every move
//! produces a fresh value; nothing is mutated in place.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::{STARTING_BLACK, STARTING_WHITE};
use crate::game_state::checkers_types::*;
use crate::search::zobrist::compute_zobrist_key;
use crate::utils::position_text::{generate_position_text, parse_position_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    white: Bitboard,
    black: Bitboard,
    kings: Bitboard,
    empty: Bitboard,
    side_to_move: Side,
    hash: u32,
}

impl Position {
    /// Standard opening layout, White to move.
    pub fn new_game() -> Self {
        let hash = compute_zobrist_key(STARTING_WHITE, STARTING_BLACK, 0, Side::White);
        Self::from_raw_parts(STARTING_WHITE, STARTING_BLACK, 0, Side::White, hash)
    }

    /// Build a position from an external snapshot, rejecting overlapping
    /// sides and kings on empty squares.
    pub fn from_bitboards(
        white: Bitboard,
        black: Bitboard,
        kings: Bitboard,
        side_to_move: Side,
    ) -> CheckersResult<Self> {
        if white & black != 0 {
            return Err(CheckersError::InvalidPosition(format!(
                "white and black overlap on {:#010x}",
                white & black
            )));
        }
        if kings & !(white | black) != 0 {
            return Err(CheckersError::InvalidPosition(format!(
                "kings on empty squares {:#010x}",
                kings & !(white | black)
            )));
        }
        let hash = compute_zobrist_key(white, black, kings, side_to_move);
        Ok(Self::from_raw_parts(white, black, kings, side_to_move, hash))
    }

    #[inline]
    pub fn from_text(text: &str) -> CheckersResult<Self> {
        parse_position_text(text)
    }

    #[inline]
    pub fn to_text(&self) -> String {
        generate_position_text(self)
    }

    /// Assemble a position whose invariants and hash the caller already
    /// guarantees. The empty mask is always derived here.
    #[inline]
    pub(crate) fn from_raw_parts(
        white: Bitboard,
        black: Bitboard,
        kings: Bitboard,
        side_to_move: Side,
        hash: u32,
    ) -> Self {
        Self {
            white,
            black,
            kings,
            empty: !(white | black) & ALL_SQUARES,
            side_to_move,
            hash,
        }
    }

    #[inline]
    pub fn white(&self) -> Bitboard {
        self.white
    }

    #[inline]
    pub fn black(&self) -> Bitboard {
        self.black
    }

    #[inline]
    pub fn kings(&self) -> Bitboard {
        self.kings
    }

    #[inline]
    pub fn empty(&self) -> Bitboard {
        self.empty
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.white | self.black
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn hash(&self) -> u32 {
        self.hash
    }

    #[inline]
    pub fn pieces(&self, side: Side) -> Bitboard {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }

    #[inline]
    pub fn men(&self, side: Side) -> Bitboard {
        self.pieces(side) & !self.kings
    }

    #[inline]
    pub fn kings_of(&self, side: Side) -> Bitboard {
        self.pieces(side) & self.kings
    }

    #[inline]
    pub fn piece_count(&self, side: Side) -> u32 {
        self.pieces(side).count_ones()
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let mask = square_mask(square);
        let is_king = self.kings & mask != 0;
        if self.white & mask != 0 {
            Some(Piece::new(Side::White, is_king))
        } else if self.black & mask != 0 {
            Some(Piece::new(Side::Black, is_king))
        } else {
            None
        }
    }

    /// Disjoint sides, kings inside the occupied set, empty mask derived.
    pub fn is_consistent(&self) -> bool {
        self.white & self.black == 0
            && self.kings & !(self.white | self.black) == 0
            && self.empty == !(self.white | self.black) & ALL_SQUARES
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}
