//! Transposition table for caching search results.
//!
//! Entries are keyed by the exact [`PositionKey`], so a hit is always the
//! same position and no verification step is needed. The table holds at
//! most `capacity` entries; when full it evicts whole age groups at once,
//! which keeps eviction independent of hash-map iteration order.

use std::collections::HashMap;

use log::trace;

use crate::board::search::constants::{MATE_SCORE, MATE_THRESHOLD};
use crate::board::{Move, PositionKey};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub depth: u32,
    pub score: i32,
    pub bound: BoundType,
    pub best_move: Option<Move>,
    pub age: u32,
}

impl TTEntry {
    /// Returns the score usable as a cutoff inside `(alpha, beta)`, if the
    /// entry is deep enough and its bound allows one.
    #[must_use]
    pub fn cutoff(&self, depth: u32, alpha: i32, beta: i32) -> Option<i32> {
        if self.depth < depth {
            return None;
        }
        match self.bound {
            BoundType::Exact => Some(self.score),
            BoundType::LowerBound if self.score >= beta => Some(self.score),
            BoundType::UpperBound if self.score <= alpha => Some(self.score),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TTStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
    pub evictions: u64,
}

/// Number of ages an entry survives before it is eligible for batch eviction
pub const DEFAULT_STALE_AGES: u32 = 2;

#[derive(Clone, Debug)]
pub struct TranspositionTable {
    entries: HashMap<PositionKey, TTEntry>,
    capacity: usize,
    stale_ages: u32,
    age: u32,
    stats: TTStats,
}

impl TranspositionTable {
    /// Create a table holding at most `capacity` entries (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_stale_ages(capacity, DEFAULT_STALE_AGES)
    }

    #[must_use]
    pub fn with_stale_ages(capacity: usize, stale_ages: u32) -> Self {
        let capacity = capacity.max(1);
        TranspositionTable {
            entries: HashMap::with_capacity(capacity.min(1 << 16)),
            capacity,
            stale_ages,
            age: 0,
            stats: TTStats::default(),
        }
    }

    /// Advance the age; called once per top-level search.
    pub fn new_search(&mut self) {
        self.age = self.age.wrapping_add(1);
    }

    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn stats(&self) -> TTStats {
        self.stats
    }

    /// Probe for `key`. Mate scores come back relative to the probing node at `ply`.
    pub fn probe(&mut self, key: &PositionKey, ply: usize) -> Option<TTEntry> {
        self.stats.probes += 1;
        let entry = self.entries.get(key)?;
        self.stats.hits += 1;
        Some(TTEntry {
            score: score_from_tt(entry.score, ply),
            ..*entry
        })
    }

    /// Store a search result for `key` found at `ply`.
    ///
    /// An existing entry for the same key is only overwritten by a result at
    /// least as deep, unless it dates from an earlier search.
    pub fn store(
        &mut self,
        key: PositionKey,
        depth: u32,
        score: i32,
        bound: BoundType,
        best_move: Option<Move>,
        ply: usize,
    ) {
        let entry = TTEntry {
            depth,
            score: score_to_tt(score, ply),
            bound,
            best_move,
            age: self.age,
        };

        if let Some(existing) = self.entries.get_mut(&key) {
            if existing.age != self.age || depth >= existing.depth {
                *existing = entry;
                self.stats.stores += 1;
            }
            return;
        }

        if self.entries.len() >= self.capacity {
            self.make_room();
        }
        self.entries.insert(key, entry);
        self.stats.stores += 1;
    }

    /// Evict in one batch: every stale entry if there are any, otherwise the
    /// oldest age present, otherwise everything.
    fn make_room(&mut self) {
        let before = self.entries.len();
        let current = self.age;
        let stale_ages = self.stale_ages;

        self.entries
            .retain(|_, e| current.wrapping_sub(e.age) <= stale_ages);

        if self.entries.len() == before {
            let oldest = self
                .entries
                .values()
                .map(|e| current.wrapping_sub(e.age))
                .max()
                .unwrap_or(0);
            if oldest > 0 {
                self.entries
                    .retain(|_, e| current.wrapping_sub(e.age) != oldest);
            } else {
                self.entries.clear();
            }
        }

        let evicted = before - self.entries.len();
        self.stats.evictions += evicted as u64;
        trace!(
            "tt eviction: {} of {} entries removed at age {}",
            evicted,
            before,
            current
        );
    }

    /// Clear all entries and statistics; the age is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = TTStats::default();
    }
}

/// Mate scores are stored relative to the stored node, not the root.
fn score_to_tt(score: i32, ply: usize) -> i32 {
    if score >= MATE_THRESHOLD {
        (score + ply as i32).min(MATE_SCORE)
    } else if score <= -MATE_THRESHOLD {
        (score - ply as i32).max(-MATE_SCORE)
    } else {
        score
    }
}

fn score_from_tt(score: i32, ply: usize) -> i32 {
    if score >= MATE_THRESHOLD {
        score - ply as i32
    } else if score <= -MATE_THRESHOLD {
        score + ply as i32
    } else {
        score
    }
}
