//! Compact text snapshot of a position.
//!
//! Format: 32 square characters in index order (`w`, `W`, `b`, `B` or `.`),
//! optionally split into rows with `/`, then whitespace and the side to move
//! (`w` or `b`). Example: `bbbb/bbbb/bbbb/..../..../wwww/wwww/wwww w`.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::*;

pub fn parse_position_text(text: &str) -> CheckersResult<Position> {
    let mut fields = text.split_whitespace();
    let board = fields
        .next()
        .ok_or_else(|| CheckersError::InvalidPosition("empty position text".to_owned()))?;
    let side = match fields.next() {
        Some("w") => Side::White,
        Some("b") => Side::Black,
        Some(other) => {
            return Err(CheckersError::InvalidPosition(format!(
                "side to move must be 'w' or 'b', got '{other}'"
            )))
        }
        None => {
            return Err(CheckersError::InvalidPosition(
                "missing side to move".to_owned(),
            ))
        }
    };
    if let Some(extra) = fields.next() {
        return Err(CheckersError::InvalidPosition(format!(
            "unexpected trailing field '{extra}'"
        )));
    }

    let mut white: Bitboard = 0;
    let mut black: Bitboard = 0;
    let mut kings: Bitboard = 0;
    let mut square = 0usize;

    for ch in board.chars().filter(|&c| c != '/') {
        if square >= SQUARE_COUNT {
            return Err(CheckersError::InvalidPosition(format!(
                "more than {SQUARE_COUNT} squares"
            )));
        }
        let mask = square_mask(square as Square);
        match ch {
            '.' => {}
            _ => {
                let piece = Piece::from_char(ch).ok_or_else(|| {
                    CheckersError::InvalidPosition(format!("unknown square character '{ch}'"))
                })?;
                match piece.side() {
                    Side::White => white |= mask,
                    Side::Black => black |= mask,
                }
                if piece.is_king() {
                    kings |= mask;
                }
            }
        }
        square += 1;
    }

    if square != SQUARE_COUNT {
        return Err(CheckersError::InvalidPosition(format!(
            "expected {SQUARE_COUNT} squares, got {square}"
        )));
    }

    Position::from_bitboards(white, black, kings, side)
}

pub fn generate_position_text(position: &Position) -> String {
    let mut out = String::with_capacity(SQUARE_COUNT + 2);
    for square in 0..SQUARE_COUNT as Square {
        out.push(position.piece_at(square).map_or('.', Piece::to_char));
    }
    out.push(' ');
    out.push(match position.side_to_move() {
        Side::White => 'w',
        Side::Black => 'b',
    });
    out
}
