//! Transposition cache
//!
//! Completed search results keyed on exact position identity and exact
//! search depth. Results from one depth are never reused at another:
//! a depth-3 score says nothing reliable about a depth-5 query, and
//! iterative deepening re-asks the same root at every depth.

use std::collections::HashMap;

use crate::board::Move;

/// Outcome of a completed (non-aborted) search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: f64,
}

/// Cache of completed search results, keyed by canonical hash, then depth.
#[derive(Debug, Default)]
pub struct TranspositionCache {
    entries: HashMap<u64, HashMap<u32, SearchResult>>,
}

impl TranspositionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a result for the exact position at the exact depth
    #[must_use]
    pub fn get(&self, hash: u64, depth: u32) -> Option<SearchResult> {
        self.entries.get(&hash)?.get(&depth).copied()
    }

    /// Record a completed result. Overwrites any previous entry for the
    /// same position and depth.
    pub fn put(&mut self, hash: u64, depth: u32, result: SearchResult) {
        self.entries.entry(hash).or_default().insert(depth, result);
    }

    /// Number of cached positions (not position-depth pairs)
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(row: i8, col: i8, score: f64) -> SearchResult {
        SearchResult {
            best_move: Move::new(row, col),
            score,
        }
    }

    #[test]
    fn test_put_get_exact() {
        let mut tt = TranspositionCache::new();
        tt.put(0xDEAD, 3, result(2, 4, 5.0));

        assert_eq!(tt.get(0xDEAD, 3), Some(result(2, 4, 5.0)));
        assert_eq!(tt.get(0xBEEF, 3), None);
    }

    #[test]
    fn test_no_cross_depth_reuse() {
        let mut tt = TranspositionCache::new();
        tt.put(0xDEAD, 3, result(2, 4, 5.0));

        assert_eq!(tt.get(0xDEAD, 2), None);
        assert_eq!(tt.get(0xDEAD, 4), None);
    }

    #[test]
    fn test_deeper_result_coexists() {
        let mut tt = TranspositionCache::new();
        tt.put(0xDEAD, 3, result(2, 4, 5.0));
        tt.put(0xDEAD, 5, result(1, 1, -3.0));

        assert_eq!(tt.get(0xDEAD, 3), Some(result(2, 4, 5.0)));
        assert_eq!(tt.get(0xDEAD, 5), Some(result(1, 1, -3.0)));
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn test_overwrite_same_key() {
        let mut tt = TranspositionCache::new();
        tt.put(0xDEAD, 3, result(2, 4, 5.0));
        tt.put(0xDEAD, 3, result(0, 0, 9.0));

        assert_eq!(tt.get(0xDEAD, 3), Some(result(0, 0, 9.0)));
    }

    #[test]
    fn test_clear() {
        let mut tt = TranspositionCache::new();
        tt.put(0xDEAD, 3, result(2, 4, 5.0));
        assert!(!tt.is_empty());

        tt.clear();
        assert!(tt.is_empty());
        assert_eq!(tt.get(0xDEAD, 3), None);
    }
}
