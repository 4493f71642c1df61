//! Zobrist hashing support for fast position identity and repetition tracking.
//!
//! Keys come from a fixed-seed generator so hashes are deterministic across
//! runs, which is useful for testing and debugging.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::checkers_types::{Bitboard, Piece, Side, Square, ALL_PIECES, SQUARE_COUNT};

const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[u32; SQUARE_COUNT]; 4],
    side_to_move: u32,
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_square = [[0u32; SQUARE_COUNT]; 4];
    for piece in &mut piece_square {
        for key in piece.iter_mut() {
            *key = rng.random::<u32>();
        }
    }

    ZobristTables {
        piece_square,
        side_to_move: rng.random::<u32>(),
    }
}

/// Return the Zobrist key for a `(piece, square)` occupancy term.
#[inline]
pub fn piece_square_key(piece: Piece, square: Square) -> u32 {
    tables().piece_square[piece.index()][square as usize]
}

/// Return the side-to-move toggle key (xor in when Black is to move).
#[inline]
pub fn side_to_move_key() -> u32 {
    tables().side_to_move
}

/// Compute the full position key from raw bitboards.
pub fn compute_zobrist_key(white: Bitboard, black: Bitboard, kings: Bitboard, side: Side) -> u32 {
    let mut key = 0u32;

    for piece in ALL_PIECES {
        let own = match piece.side() {
            Side::White => white,
            Side::Black => black,
        };
        let mut bb = if piece.is_king() { own & kings } else { own & !kings };
        while bb != 0 {
            let sq = bb.trailing_zeros() as Square;
            key ^= piece_square_key(piece, sq);
            bb &= bb - 1;
        }
    }

    if side == Side::Black {
        key ^= side_to_move_key();
    }

    key
}

#[cfg(test)]
mod tests {
    use super::{compute_zobrist_key, piece_square_key, side_to_move_key};
    use crate::game_state::checkers_types::{Piece, Position, Side};
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::move_generation::legal_move_generator::generate_moves;

    #[test]
    fn starting_position_hash_is_deterministic() {
        let a = Position::new_game();
        let b = Position::new_game();
        assert_eq!(a.hash(), b.hash());
    }

    #[test]
    fn side_to_move_changes_hash() {
        let w = compute_zobrist_key(1, 1 << 31, 0, Side::White);
        let b = compute_zobrist_key(1, 1 << 31, 0, Side::Black);
        assert_eq!(w ^ b, side_to_move_key());
    }

    #[test]
    fn king_and_man_keys_differ() {
        assert_ne!(
            piece_square_key(Piece::WhiteMan, 12),
            piece_square_key(Piece::WhiteKing, 12)
        );
    }

    #[test]
    fn incremental_hash_matches_recompute_along_a_game() {
        let mut position = Position::new_game();
        for _ in 0..40 {
            let moves = generate_moves(&position);
            let Some(mv) = moves.last() else {
                break;
            };
            position = apply_move(&position, *mv);
            let recomputed = compute_zobrist_key(
                position.white(),
                position.black(),
                position.kings(),
                position.side_to_move(),
            );
            assert_eq!(position.hash(), recomputed);
        }
    }
}
