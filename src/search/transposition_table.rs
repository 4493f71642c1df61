//! Fixed-size, direct-mapped transposition table keyed by position hash.
//!
//! The slot is `key & (len - 1)`, so the length must be a power of two.
//! A slot is overwritten whenever the incoming depth is at least the stored
//! depth, even if the stored entry belongs to a different position.

use crate::errors::{CheckersError, CheckersResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    pub key: u32,
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TTStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Clone)]
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    mask: usize,
    stats: TTStats,
}

impl TranspositionTable {
    pub const DEFAULT_SIZE_LOG2: u8 = 20;

    /// Table with `size` slots; `size` must be a non-zero power of two.
    pub fn new(size: usize) -> CheckersResult<Self> {
        if !size.is_power_of_two() {
            return Err(CheckersError::TableSizeNotPowerOfTwo(size));
        }
        Ok(Self {
            entries: vec![None; size],
            mask: size - 1,
            stats: TTStats::default(),
        })
    }

    /// Table with `2^bits` slots.
    pub fn with_size_log2(bits: u8) -> CheckersResult<Self> {
        let size = 1usize
            .checked_shl(u32::from(bits))
            .ok_or(CheckersError::TableSizeNotPowerOfTwo(0))?;
        Self::new(size)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.fill(None);
        self.stats = TTStats::default();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> TTStats {
        self.stats
    }

    #[inline]
    fn idx(&self, key: u32) -> usize {
        key as usize & self.mask
    }

    /// Cached `(score, bound)` for `key` searched at least `min_depth` deep.
    pub fn lookup(&mut self, key: u32, min_depth: u8) -> Option<(i32, Bound)> {
        self.stats.probes += 1;
        let hit = self.entries[self.idx(key)]
            .filter(|e| e.key == key && e.depth >= min_depth)
            .map(|e| (e.score, e.bound));
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    pub fn store(&mut self, key: u32, depth: u8, score: i32, bound: Bound) {
        let idx = self.idx(key);
        let replace = match self.entries[idx] {
            None => true,
            Some(existing) => depth >= existing.depth,
        };
        if replace {
            self.stats.stores += 1;
            self.entries[idx] = Some(TTEntry {
                key,
                depth,
                score,
                bound,
            });
        }
    }
}
