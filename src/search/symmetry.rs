//! Symmetry score index
//!
//! Near-empty boards waste search effort on positions that are mere
//! reflections of each other. This index caches a score for a masked
//! occupancy snapshot and answers lookups for the snapshot itself or
//! any of its reflections, so one searched opening feeds its three
//! mirror images for free.
//!
//! Keys hash only the cell marks; player locations and side to move
//! are masked out. With very few pieces on the board the occupancy
//! pattern identifies the position well enough, which is why callers
//! only consult the index inside the opening window.

use std::collections::HashMap;

use crate::board::OccupancyGrid;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a over the grid dimensions and masked cell marks
fn grid_key(grid: &OccupancyGrid) -> u64 {
    let mut h = FNV_OFFSET;
    let mut mix = |v: u64| {
        for byte in v.to_le_bytes() {
            h ^= u64::from(byte);
            h = h.wrapping_mul(FNV_PRIME);
        }
    };

    mix(grid.height as u64);
    mix(grid.width as u64);
    for &cell in &grid.cells {
        mix(cell);
    }

    h
}

/// Cache of scores shared across board reflections.
#[derive(Debug, Default)]
pub struct SymmetryIndex {
    scores: HashMap<u64, f64>,
}

impl SymmetryIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe the snapshot and its three reflections, in a fixed order:
    /// identity, vertical flip, horizontal flip, both.
    #[must_use]
    pub fn lookup(&self, grid: &OccupancyGrid) -> Option<f64> {
        let masked = grid.masked();

        if let Some(&score) = self.scores.get(&grid_key(&masked)) {
            return Some(score);
        }
        for reflected in [
            masked.flip_vertical(),
            masked.flip_horizontal(),
            masked.flip_both(),
        ] {
            if let Some(&score) = self.scores.get(&grid_key(&reflected)) {
                return Some(score);
            }
        }

        None
    }

    /// Record a score under the snapshot's own (identity) key.
    /// Reflections are resolved at lookup time, never stored.
    pub fn record(&mut self, grid: &OccupancyGrid, score: f64) {
        self.scores.insert(grid_key(&grid.masked()), score);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn clear(&mut self) {
        self.scores.clear();
    }
}
