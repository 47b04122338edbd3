//! Row-major occupancy snapshots for symmetry probing
//!
//! The search never mutates a live board to test for symmetric
//! equivalents. Instead it takes an [`OccupancyGrid`] snapshot and
//! applies pure reflection transforms to it, each producing a fresh
//! grid whose hash can be looked up in the symmetry index.

/// Row-major cell marks plus trailing metadata fields.
///
/// `cells[r * width + c]` is 0 for a blank cell and 1 for a blocked one.
/// `meta` holds the two player locations (cell index + 1, or 0 when a
/// player has not been placed) and the active-player marker. The
/// metadata is not part of spatial symmetry and is zeroed by
/// [`masked`](OccupancyGrid::masked) before hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    pub height: usize,
    pub width: usize,
    pub cells: Vec<u64>,
    pub meta: [u64; 3],
}

impl OccupancyGrid {
    /// Copy with the trailing metadata fields zeroed out
    #[must_use]
    pub fn masked(&self) -> Self {
        Self {
            height: self.height,
            width: self.width,
            cells: self.cells.clone(),
            meta: [0; 3],
        }
    }

    /// Mirror across the vertical axis (reverse each row)
    #[must_use]
    pub fn flip_vertical(&self) -> Self {
        self.transform(|r, c| (r, self.width - 1 - c))
    }

    /// Mirror across the horizontal axis (reverse the row order)
    #[must_use]
    pub fn flip_horizontal(&self) -> Self {
        self.transform(|r, c| (self.height - 1 - r, c))
    }

    /// Composition of both reflections (180-degree rotation)
    #[must_use]
    pub fn flip_both(&self) -> Self {
        self.transform(|r, c| (self.height - 1 - r, self.width - 1 - c))
    }

    /// Build a new grid by relocating every cell through `map`.
    /// Metadata is carried over unchanged; callers mask it before
    /// hashing anyway.
    fn transform(&self, map: impl Fn(usize, usize) -> (usize, usize)) -> Self {
        let mut cells = vec![0u64; self.cells.len()];
        for r in 0..self.height {
            for c in 0..self.width {
                let (tr, tc) = map(r, c);
                cells[tr * self.width + tc] = self.cells[r * self.width + c];
            }
        }
        Self {
            height: self.height,
            width: self.width,
            cells,
            meta: self.meta,
        }
    }
}
