//! Move-path enumeration for validating the generator.

use crate::game_state::checkers_types::Position;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::generate_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
    }
}

/// Count leaf nodes `depth` plies below `position`, with capture and
/// promotion tallies for the final ply.
pub fn perft(position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_moves(position) {
        let next = apply_move(position, mv);
        if depth == 1 {
            total.nodes += 1;
            if mv.is_capture() {
                total.captures += 1;
            }
            let mover = position.side_to_move();
            if next.kings_of(mover).count_ones() > position.kings_of(mover).count_ones() {
                total.promotions += 1;
            }
        } else {
            total.merge(perft(&next, depth - 1));
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::checkers_types::Position;

    #[test]
    fn opening_perft_matches_known_counts() {
        let position = Position::new_game();
        assert_eq!(perft(&position, 1).nodes, 7);
        assert_eq!(perft(&position, 2).nodes, 49);
        assert_eq!(perft(&position, 3).nodes, 302);
    }

    #[test]
    fn depth_zero_is_a_single_node() {
        let counts = perft(&Position::new_game(), 0);
        assert_eq!(counts.nodes, 1);
        assert_eq!(counts.captures, 0);
    }

    #[test]
    fn promotion_is_counted() {
        let position = Position::from_text("..../w.../..../..../..../..../..../...b w")
            .expect("text parses");
        let counts = perft(&position, 1);
        assert_eq!(counts.nodes, 1);
        assert_eq!(counts.promotions, 1);
    }
}
