//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search stays independent of the heuristic by delegating static position
//! scoring to [`BoardScorer`]. Every scorer returns a value from the
//! perspective of the side to move.

use crate::game_state::checkers_types::*;
use crate::game_state::square_geometry::rc_from_index;
use crate::move_generation::legal_move_generator::{count_moves_for, threatened_pieces};

/// Score of a won position; a lost one is its negation.
pub const WIN_SCORE: i32 = 30_000;

/// Non-terminal evaluations stay strictly inside this magnitude.
pub const MAX_HEURISTIC_SCORE: i32 = WIN_SCORE - 1_000;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, position: &Position) -> i32;
}

/// Saturated result when one side has no pieces left.
#[inline]
pub fn terminal_score(position: &Position) -> Option<i32> {
    let side = position.side_to_move();
    if position.pieces(side) == 0 {
        Some(-WIN_SCORE)
    } else if position.pieces(side.opposite()) == 0 {
        Some(WIN_SCORE)
    } else {
        None
    }
}

#[inline]
fn from_side_to_move(position: &Position, white_minus_black: i32) -> i32 {
    match position.side_to_move() {
        Side::White => white_minus_black,
        Side::Black => -white_minus_black,
    }
}

/// Plain material count: a man is worth one, a king three.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    pub const MAN_VALUE: i32 = 100;
    pub const KING_VALUE: i32 = 300;

    #[inline]
    fn material_white_minus_black(position: &Position) -> i32 {
        let side_value = |side: Side| {
            position.men(side).count_ones() as i32 * Self::MAN_VALUE
                + position.kings_of(side).count_ones() as i32 * Self::KING_VALUE
        };
        side_value(Side::White) - side_value(Side::Black)
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, position: &Position) -> i32 {
        if let Some(score) = terminal_score(position) {
            return score;
        }
        from_side_to_move(position, Self::material_white_minus_black(position))
    }
}

/// Material, advancement, centre control, mobility, hanging pieces and an
/// endgame king-activity term, linearly combined.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl HeuristicScorer {
    pub const MAN_VALUE: i32 = 100;
    pub const KING_VALUE: i32 = 160;

    const ADVANCE_WEIGHT: i32 = 3;
    const CENTRE_BONUS: i32 = 6;
    const EDGE_PENALTY: i32 = 4;
    const MOBILITY_WEIGHT: i32 = 2;
    const HANGING_PENALTY: i32 = 30;
    const TARGET_BONUS: i32 = 10;

    const ENDGAME_PIECES: u32 = 10;
    const KING_CENTRE_WEIGHT: i32 = 3;
    const KING_IDLE_PENALTY: i32 = 8;
    const KING_CHASE_WEIGHT: i32 = 2;

    /// Endgame once the board thins out or any king has been crowned.
    pub fn is_endgame(position: &Position) -> bool {
        position.occupied().count_ones() <= Self::ENDGAME_PIECES || position.kings() != 0
    }

    fn material_white_minus_black(position: &Position) -> i32 {
        let side_value = |side: Side| {
            position.men(side).count_ones() as i32 * Self::MAN_VALUE
                + position.kings_of(side).count_ones() as i32 * Self::KING_VALUE
        };
        side_value(Side::White) - side_value(Side::Black)
    }

    fn positional_white_minus_black(position: &Position) -> i32 {
        let mut score = 0i32;
        for side in [Side::White, Side::Black] {
            let sign = if side == Side::White { 1 } else { -1 };
            let mut bb = position.pieces(side);
            while bb != 0 {
                let sq = bb.trailing_zeros() as Square;
                let is_king = position.kings() & square_mask(sq) != 0;
                score += sign * square_bonus(side, is_king, sq);
                bb &= bb - 1;
            }
        }
        score
    }

    fn mobility_white_minus_black(position: &Position) -> i32 {
        let white = count_moves_for(position, Side::White) as i32;
        let black = count_moves_for(position, Side::Black) as i32;
        (white - black) * Self::MOBILITY_WEIGHT
    }

    /// Pieces the opponent can jump next move count against the mover;
    /// pieces the mover can jump count in its favour.
    fn threat_term_side_to_move(position: &Position) -> i32 {
        let side = position.side_to_move();
        let hanging = threatened_pieces(position, side.opposite()).count_ones() as i32;
        let targets = threatened_pieces(position, side).count_ones() as i32;
        targets * Self::TARGET_BONUS - hanging * Self::HANGING_PENALTY
    }

    fn endgame_white_minus_black(position: &Position) -> i32 {
        let mut score = 0i32;
        for side in [Side::White, Side::Black] {
            let sign = if side == Side::White { 1 } else { -1 };
            let enemies = position.pieces(side.opposite());
            let mut kings = position.kings_of(side);
            while kings != 0 {
                let sq = kings.trailing_zeros() as Square;
                let (row, col) = rc_from_index(sq);

                score += sign * (7 - centre_distance(row, col)) * Self::KING_CENTRE_WEIGHT;
                if row == i32::from(side.promotion_row()) {
                    score -= sign * Self::KING_IDLE_PENALTY;
                }
                if let Some(distance) = nearest_distance(sq, enemies) {
                    score += sign * (7 - distance) * Self::KING_CHASE_WEIGHT;
                }
                kings &= kings - 1;
            }
        }
        score
    }
}

impl BoardScorer for HeuristicScorer {
    fn score(&self, position: &Position) -> i32 {
        if let Some(score) = terminal_score(position) {
            return score;
        }

        let mut white_minus_black = Self::material_white_minus_black(position)
            + Self::positional_white_minus_black(position)
            + Self::mobility_white_minus_black(position);
        if Self::is_endgame(position) {
            white_minus_black += Self::endgame_white_minus_black(position);
        }

        let score = from_side_to_move(position, white_minus_black)
            + Self::threat_term_side_to_move(position);
        score.clamp(-MAX_HEURISTIC_SCORE, MAX_HEURISTIC_SCORE)
    }
}

/// Advancement for men, centre control for every piece, edge penalty.
fn square_bonus(side: Side, is_king: bool, sq: Square) -> i32 {
    let (row, col) = rc_from_index(sq);
    let mut bonus = 0;

    if !is_king {
        let advanced = match side {
            Side::White => 7 - row,
            Side::Black => row,
        };
        bonus += advanced * HeuristicScorer::ADVANCE_WEIGHT;
    }
    if (2..=5).contains(&row) && (2..=5).contains(&col) {
        bonus += HeuristicScorer::CENTRE_BONUS;
    }
    if col == 0 || col == 7 {
        bonus -= HeuristicScorer::EDGE_PENALTY;
    }
    bonus
}

/// Distance in king steps from `(row, col)` to the four centre squares.
#[inline]
fn centre_distance(row: i32, col: i32) -> i32 {
    ((2 * row - 7).abs() + (2 * col - 7).abs()) / 2 - 1
}

/// Chebyshev distance from `sq` to the closest square in `targets`.
fn nearest_distance(sq: Square, targets: Bitboard) -> Option<i32> {
    let (row, col) = rc_from_index(sq);
    let mut best: Option<i32> = None;
    let mut bb = targets;
    while bb != 0 {
        let target = bb.trailing_zeros() as Square;
        let (t_row, t_col) = rc_from_index(target);
        let distance = (row - t_row).abs().max((col - t_col).abs());
        best = Some(best.map_or(distance, |b| b.min(distance)));
        bb &= bb - 1;
    }
    best
}
