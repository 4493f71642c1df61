use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::promotion_squares;
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_move_generator::generate_moves;
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::moves::move_tables::MOVE_TABLES;
use crate::search::zobrist::{piece_square_key, side_to_move_key};

/// Successor of `position` after `mv`, which must be one of its generated
/// moves. The hash is updated incrementally.
pub fn apply_move(position: &Position, mv: Move) -> Position {
    let side = position.side_to_move();
    let from_mask = square_mask(mv.from);
    let to_mask = square_mask(mv.to);

    debug_assert!(position.pieces(side) & from_mask != 0, "no mover on {}", mv.from);
    debug_assert!(position.empty() & to_mask != 0, "destination {} occupied", mv.to);
    debug_assert!(is_geometrically_consistent(mv), "kind disagrees with {mv}");

    let mut own = position.pieces(side);
    let mut enemy = position.pieces(side.opposite());
    let mut kings = position.kings();
    let mut hash = position.hash();

    let was_king = kings & from_mask != 0;
    hash ^= piece_square_key(Piece::new(side, was_king), mv.from);

    // Move piece from origin to destination.
    own = (own & !from_mask) | to_mask;
    if was_king {
        kings = (kings & !from_mask) | to_mask;
    }

    // Remove the jumped piece.
    if let MoveKind::Capture(direction) = mv.kind {
        if let Some(mid) = MOVE_TABLES.jumped_square(mv.from, direction) {
            let mid_mask = square_mask(mid);
            debug_assert!(enemy & mid_mask != 0, "no enemy piece on {mid}");
            if let Some(captured) = position.piece_at(mid) {
                hash ^= piece_square_key(captured, mid);
            }
            enemy &= !mid_mask;
            kings &= !mid_mask;
        }
    }

    let promoted = !was_king && promotion_squares(side) & to_mask != 0;
    if promoted {
        kings |= to_mask;
    }
    hash ^= piece_square_key(Piece::new(side, was_king || promoted), mv.to);
    hash ^= side_to_move_key();

    let (white, black) = match side {
        Side::White => (own, enemy),
        Side::Black => (enemy, own),
    };
    Position::from_raw_parts(white, black, kings, side.opposite(), hash)
}

/// Apply a caller-supplied move after checking it against the legal list.
pub fn apply_legal_move(position: &Position, mv: Move) -> CheckersResult<Position> {
    if !generate_moves(position).contains(&mv) {
        return Err(CheckersError::IllegalMove(mv));
    }
    Ok(apply_move(position, mv))
}

fn is_geometrically_consistent(mv: Move) -> bool {
    let target = match mv.kind {
        MoveKind::Step(direction) => MOVE_TABLES.step(mv.from, direction),
        MoveKind::Capture(direction) => MOVE_TABLES.jump(mv.from, direction),
    };
    target == square_mask(mv.to)
}
