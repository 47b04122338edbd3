//! Bit-grid occupancy tracking

/// Dynamically sized bit set over board cells.
/// Cells are addressed by row-major index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid {
    bits: Vec<u64>,
    len: usize,
}

impl BitGrid {
    /// Create an empty grid covering `len` cells
    pub fn new(len: usize) -> Self {
        Self {
            bits: vec![0; len.div_ceil(64)],
            len,
        }
    }

    /// Set the bit at a cell index
    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < self.len);
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    /// Clear the bit at a cell index
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        debug_assert!(idx < self.len);
        self.bits[idx / 64] &= !(1u64 << (idx % 64));
    }

    /// Check whether the bit at a cell index is set
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        debug_assert!(idx < self.len);
        (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Count set bits (popcount)
    #[inline]
    pub fn count(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Number of cells covered
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no bit is set
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Iterate over set cell indices in ascending order
    pub fn iter_ones(&self) -> BitGridIter<'_> {
        BitGridIter {
            bits: &self.bits,
            word_idx: 0,
            current_word: self.bits.first().copied().unwrap_or(0),
            len: self.len,
        }
    }
}

/// Iterator over set bits in a [`BitGrid`]
pub struct BitGridIter<'a> {
    bits: &'a [u64],
    word_idx: usize,
    current_word: u64,
    len: usize,
}

impl Iterator for BitGridIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        // Find next set bit
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= self.bits.len() {
                return None;
            }
            self.current_word = self.bits[self.word_idx];
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        let idx = self.word_idx * 64 + bit_pos;

        // Clear the bit we just found
        self.current_word &= self.current_word - 1;

        // Guard against padding bits in the final word
        if idx < self.len {
            Some(idx)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut grid = BitGrid::new(49);
        assert!(!grid.get(24));

        grid.set(24);
        assert!(grid.get(24));
        assert_eq!(grid.count(), 1);

        grid.clear(24);
        assert!(!grid.get(24));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_iter_ones_ordered() {
        let mut grid = BitGrid::new(81);
        for idx in [80, 0, 63, 64, 12] {
            grid.set(idx);
        }

        let ones: Vec<usize> = grid.iter_ones().collect();
        assert_eq!(ones, vec![0, 12, 63, 64, 80]);
    }

    #[test]
    fn test_count_across_words() {
        let mut grid = BitGrid::new(130);
        grid.set(1);
        grid.set(65);
        grid.set(129);
        assert_eq!(grid.count(), 3);
    }
}
