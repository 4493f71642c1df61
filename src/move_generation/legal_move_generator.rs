//! Legal move generation under the mandatory-capture rule.
//!
//! Moves come out in a fixed order: ascending origin square, then
//! `Direction::ALL` order. When any capture exists for the mover, only
//! captures are produced. Each capture is a single jump that ends the turn.

use crate::game_state::checkers_types::*;
use crate::moves::move_descriptions::{Direction, Move, MoveKind};
use crate::moves::move_tables::{king_directions, man_directions, MOVE_TABLES};

/// Legal moves for the side to move.
pub fn generate_moves(position: &Position) -> Vec<Move> {
    generate_moves_for(position, position.side_to_move())
}

/// Legal moves `side` would have if it were to move in `position`.
pub fn generate_moves_for(position: &Position, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(16);
    if has_capture(position, side) {
        generate_captures_in_place(position, side, &mut out);
    } else {
        generate_steps_in_place(position, side, &mut out);
    }
    out
}

/// True iff the side to move has at least one legal capture.
#[inline]
pub fn must_capture(position: &Position) -> bool {
    has_capture(position, position.side_to_move())
}

pub fn has_capture(position: &Position, side: Side) -> bool {
    let mut pieces = position.pieces(side);
    while pieces != 0 {
        let from = pieces.trailing_zeros() as Square;
        if piece_directions(position, side, from)
            .iter()
            .any(|&direction| capture_landing(position, side, from, direction).is_some())
        {
            return true;
        }
        pieces &= pieces - 1;
    }
    false
}

/// Number of legal moves `side` would have, without allocating.
pub fn count_moves_for(position: &Position, side: Side) -> usize {
    let capturing = has_capture(position, side);
    let mut count = 0;
    let mut pieces = position.pieces(side);
    while pieces != 0 {
        let from = pieces.trailing_zeros() as Square;
        for &direction in piece_directions(position, side, from) {
            let available = if capturing {
                capture_landing(position, side, from, direction).is_some()
            } else {
                MOVE_TABLES.step(from, direction) & position.empty() != 0
            };
            if available {
                count += 1;
            }
        }
        pieces &= pieces - 1;
    }
    count
}

/// Pieces of `attacker`'s opponent sitting on the midpoint of some legal
/// jump by `attacker`.
pub fn threatened_pieces(position: &Position, attacker: Side) -> Bitboard {
    let mut threatened = 0;
    let mut pieces = position.pieces(attacker);
    while pieces != 0 {
        let from = pieces.trailing_zeros() as Square;
        for &direction in piece_directions(position, attacker, from) {
            if capture_landing(position, attacker, from, direction).is_some() {
                if let Some(mid) = MOVE_TABLES.jumped_square(from, direction) {
                    threatened |= square_mask(mid);
                }
            }
        }
        pieces &= pieces - 1;
    }
    threatened
}

fn generate_captures_in_place(position: &Position, side: Side, out: &mut Vec<Move>) {
    let mut pieces = position.pieces(side);
    while pieces != 0 {
        let from = pieces.trailing_zeros() as Square;
        for &direction in piece_directions(position, side, from) {
            if let Some(to) = capture_landing(position, side, from, direction) {
                out.push(Move::new(from, to, MoveKind::Capture(direction)));
            }
        }
        pieces &= pieces - 1;
    }
}

fn generate_steps_in_place(position: &Position, side: Side, out: &mut Vec<Move>) {
    let mut pieces = position.pieces(side);
    while pieces != 0 {
        let from = pieces.trailing_zeros() as Square;
        for &direction in piece_directions(position, side, from) {
            let target = MOVE_TABLES.step(from, direction) & position.empty();
            if target != 0 {
                let to = target.trailing_zeros() as Square;
                out.push(Move::new(from, to, MoveKind::Step(direction)));
            }
        }
        pieces &= pieces - 1;
    }
}

#[inline]
fn piece_directions(position: &Position, side: Side, square: Square) -> &'static [Direction] {
    if position.kings() & square_mask(square) != 0 {
        king_directions()
    } else {
        man_directions(side)
    }
}

/// Landing square of a jump from `from` over an opponent piece onto an
/// empty square, if the jump is legal.
#[inline]
fn capture_landing(position: &Position, side: Side, from: Square, direction: Direction) -> Option<Square> {
    let mid = MOVE_TABLES.jumped_square(from, direction)?;
    if position.pieces(side.opposite()) & square_mask(mid) == 0 {
        return None;
    }
    let landing = MOVE_TABLES.jump(from, direction) & position.empty();
    if landing == 0 {
        return None;
    }
    Some(landing.trailing_zeros() as Square)
}

#[cfg(test)]
mod tests {
    use super::{count_moves_for, generate_moves, generate_moves_for, must_capture, threatened_pieces};
    use crate::game_state::checkers_types::{square_mask, Position, Side};
    use crate::moves::move_descriptions::{Direction, Move, MoveKind};

    #[test]
    fn opening_position_has_seven_steps() {
        let position = Position::new_game();
        let moves = generate_moves(&position);
        assert_eq!(moves.len(), 7);
        assert!(!must_capture(&position));
        assert!(moves.iter().all(|mv| !mv.is_capture()));
        assert!(moves.iter().all(|mv| (20..24).contains(&mv.from)));
        assert_eq!(moves[0], Move::new(20, 16, MoveKind::Step(Direction::UpRight)));
    }

    #[test]
    fn black_also_has_seven_opening_steps() {
        let position = Position::new_game();
        assert_eq!(generate_moves_for(&position, Side::Black).len(), 7);
        assert_eq!(count_moves_for(&position, Side::Black), 7);
    }

    #[test]
    fn forced_capture_excludes_steps() {
        // White man on 21 (5,2), black man on 16 (4,1), landing 12 (3,0) empty.
        let position = Position::from_text("..../..../..../..../b.../.w../..../.... w")
            .expect("text parses");
        assert!(must_capture(&position));
        let moves = generate_moves(&position);
        assert_eq!(
            moves,
            vec![Move::new(21, 12, MoveKind::Capture(Direction::UpLeft))]
        );
    }

    #[test]
    fn all_capturers_are_listed() {
        // Two white men can each capture a different black man.
        let position = Position::from_text("..../..../..../..../b.b./.w.w/..../.... w")
            .expect("text parses");
        let moves = generate_moves(&position);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| mv.is_capture()));
        assert_eq!(moves[0].from, 21);
        assert_eq!(moves[1].from, 23);
    }

    #[test]
    fn men_do_not_capture_backwards_but_kings_do() {
        // Black man on 21 sits behind the white piece on 16.
        let man = Position::from_text("..../..../..../..../w.../.b../..../.... w")
            .expect("text parses");
        assert!(!must_capture(&man));

        let king = Position::from_text("..../..../..../..../W.../.b../..../.... w")
            .expect("text parses");
        let moves = generate_moves(&king);
        assert_eq!(
            moves,
            vec![Move::new(16, 25, MoveKind::Capture(Direction::DownRight))]
        );
    }

    #[test]
    fn blocked_jump_is_not_a_capture() {
        let position = Position::from_text("..../..../..../b.../b.../.w../..../.... w")
            .expect("text parses");
        assert!(!must_capture(&position));
        assert!(generate_moves(&position).iter().all(|mv| !mv.is_capture()));
    }

    #[test]
    fn side_without_pieces_has_no_moves() {
        let position = Position::from_text("..../..../..../..../..../..../..../b... w")
            .expect("text parses");
        assert!(generate_moves(&position).is_empty());
    }

    #[test]
    fn threatened_pieces_marks_jump_midpoints() {
        let position = Position::from_text("..../..../..../..../b.../.w../..../.... b")
            .expect("text parses");
        assert_eq!(threatened_pieces(&position, Side::White), square_mask(16));
        assert_eq!(threatened_pieces(&position, Side::Black), square_mask(21));
    }
}
