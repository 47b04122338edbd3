//! Zobrist hashing for position identification
//!
//! Zobrist hashing allows O(1) incremental hash updates when blocking a
//! cell or relocating a player. The board keeps its hash current on
//! every `apply`, so the transposition cache never pays for a full
//! recomputation during search.

use super::Player;

/// Zobrist hash table for position hashing.
///
/// Precomputed random values for each blocked cell, each (player,
/// location) pair, and the side to move. XOR-based updates make
/// placing and relocating O(1).
pub struct ZobristTable {
    /// Random values for blocked cells by row-major index
    cells: Vec<u64>,
    /// Random values for each player's location: [player][cell index]
    locations: [Vec<u64>; 2],
    /// Random value XORed in when player Two is to move
    second_to_move: u64,
}

impl ZobristTable {
    /// Create a new Zobrist table with deterministic random values.
    ///
    /// Uses a linear congruential generator with a fixed seed so equal
    /// board dimensions always produce identical tables, keeping hashes
    /// stable across runs.
    #[must_use]
    pub fn new(total_cells: usize) -> Self {
        // Constants from Knuth's MMIX LCG
        let mut seed: u64 = 0x1234_5678_9ABC_DEF0;
        let mut next_rand = || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1);
            seed
        };

        let cells = (0..total_cells).map(|_| next_rand()).collect();
        let loc_one = (0..total_cells).map(|_| next_rand()).collect();
        let loc_two = (0..total_cells).map(|_| next_rand()).collect();

        Self {
            cells,
            locations: [loc_one, loc_two],
            second_to_move: next_rand(),
        }
    }

    /// Compute the full hash of a position from scratch.
    ///
    /// Used to seed the incremental hash and to cross-check it in tests.
    #[must_use]
    pub fn full_hash(
        &self,
        blocked: impl Iterator<Item = usize>,
        locations: [Option<usize>; 2],
        active: Player,
    ) -> u64 {
        let mut h = 0u64;

        for idx in blocked {
            h ^= self.cells[idx];
        }
        for (player, loc) in locations.iter().enumerate() {
            if let Some(idx) = loc {
                h ^= self.locations[player][*idx];
            }
        }
        if active == Player::Two {
            h ^= self.second_to_move;
        }

        h
    }

    /// Incrementally toggle the blocked mark of a cell
    #[inline]
    #[must_use]
    pub fn toggle_block(&self, hash: u64, idx: usize) -> u64 {
        hash ^ self.cells[idx]
    }

    /// Incrementally relocate a player. XOR is its own inverse, so the
    /// old location (if any) is removed and the new one added.
    #[inline]
    #[must_use]
    pub fn move_location(
        &self,
        hash: u64,
        player: Player,
        from: Option<usize>,
        to: usize,
    ) -> u64 {
        let table = &self.locations[player.index()];
        let mut h = hash ^ table[to];
        if let Some(old) = from {
            h ^= table[old];
        }
        h
    }

    /// Toggle the side-to-move component of the hash
    #[inline]
    #[must_use]
    pub fn toggle_side(&self, hash: u64) -> u64 {
        hash ^ self.second_to_move
    }
}
