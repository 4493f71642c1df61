//! Hashes of the positions actually played in a game.
//!
//! Only the line played is recorded, never the search tree. Root search uses
//! it to discourage moves that walk back into a position seen before.

use crate::game_state::checkers_types::Position;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepetitionHistory {
    hashes: Vec<u32>,
}

impl RepetitionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History seeded with the position a game starts from.
    pub fn starting_from(position: &Position) -> Self {
        Self {
            hashes: vec![position.hash()],
        }
    }

    #[inline]
    pub fn push(&mut self, position: &Position) {
        self.hashes.push(position.hash());
    }

    #[inline]
    pub fn push_hash(&mut self, hash: u32) {
        self.hashes.push(hash);
    }

    /// How often `hash` has been played so far.
    pub fn occurrences(&self, hash: u32) -> usize {
        self.hashes.iter().filter(|&&h| h == hash).count()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.hashes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::RepetitionHistory;
    use crate::game_state::checkers_types::Position;

    #[test]
    fn counts_occurrences_of_each_hash() {
        let start = Position::new_game();
        let mut history = RepetitionHistory::starting_from(&start);
        history.push_hash(17);
        history.push(&start);
        assert_eq!(history.occurrences(start.hash()), 2);
        assert_eq!(history.occurrences(17), 1);
        assert_eq!(history.occurrences(18), 0);
        assert_eq!(history.len(), 3);
        history.clear();
        assert!(history.is_empty());
    }
}
