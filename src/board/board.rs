//! Knight's Isolation game state
//!
//! Two knights share a rectangular grid. Every visited cell stays
//! blocked for the rest of the game. A player whose knight has no
//! legal move loses. Before a knight is placed it may open on any
//! blank cell.

use std::sync::Arc;

use super::{BitGrid, BoardState, Move, OccupancyGrid, Player, ZobristTable};
use super::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION};

/// Knight move offsets, in fixed generation order
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Game state for a Knight's Isolation match.
///
/// Cloning is cheap: the Zobrist table is shared behind an [`Arc`] and
/// the occupancy bits are a handful of words. [`apply`](BoardState::apply)
/// clones and keeps the canonical hash current incrementally.
#[derive(Clone)]
pub struct Board {
    height: u8,
    width: u8,
    /// Cells ever visited by either knight
    blocked: BitGrid,
    /// Knight locations by player index, `None` until placed
    locations: [Option<u16>; 2],
    active: Player,
    hash: u64,
    zobrist: Arc<ZobristTable>,
}

impl Board {
    /// Create an empty default-sized (7x7) board with player One to move
    #[must_use]
    pub fn new() -> Self {
        Self::with_size(DEFAULT_HEIGHT as u8, DEFAULT_WIDTH as u8)
    }

    /// Create an empty board with the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics when a dimension is zero or exceeds
    /// [`MAX_DIMENSION`](super::MAX_DIMENSION).
    #[must_use]
    pub fn with_size(height: u8, width: u8) -> Self {
        assert!(
            (1..=MAX_DIMENSION).contains(&height) && (1..=MAX_DIMENSION).contains(&width),
            "board dimensions must be within 1..={MAX_DIMENSION}"
        );
        let total = height as usize * width as usize;
        let zobrist = Arc::new(ZobristTable::new(total));
        let hash = zobrist.full_hash(std::iter::empty(), [None, None], Player::One);

        Self {
            height,
            width,
            blocked: BitGrid::new(total),
            locations: [None, None],
            active: Player::One,
            hash,
            zobrist,
        }
    }

    /// Current location of a player's knight, or `None` before placement
    #[must_use]
    pub fn player_location(&self, player: Player) -> Option<Move> {
        self.locations[player.index()]
            .map(|idx| Move::from_index(idx as usize, self.width as usize))
    }

    /// Check whether a cell has never been visited
    #[inline]
    #[must_use]
    pub fn is_blank(&self, row: i8, col: i8) -> bool {
        self.in_bounds(row, col) && !self.blocked.get(self.cell_index(row, col))
    }

    #[inline]
    fn in_bounds(&self, row: i8, col: i8) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height as usize && (col as usize) < self.width as usize
    }

    #[inline]
    fn cell_index(&self, row: i8, col: i8) -> usize {
        row as usize * self.width as usize + col as usize
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState for Board {
    #[inline]
    fn height(&self) -> usize {
        self.height as usize
    }

    #[inline]
    fn width(&self) -> usize {
        self.width as usize
    }

    #[inline]
    fn blank_count(&self) -> usize {
        self.total_cells() - self.blocked.count()
    }

    #[inline]
    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.active)
    }

    fn legal_moves_for(&self, player: Player) -> Vec<Move> {
        match self.locations[player.index()] {
            // Unplaced knight opens on any blank cell, row-major
            None => {
                let total = self.total_cells();
                let mut moves = Vec::with_capacity(self.blank_count());
                for idx in 0..total {
                    if !self.blocked.get(idx) {
                        moves.push(Move::from_index(idx, self.width as usize));
                    }
                }
                moves
            }
            Some(idx) => {
                let at = Move::from_index(idx as usize, self.width as usize);
                KNIGHT_OFFSETS
                    .iter()
                    .map(|&(dr, dc)| Move::new(at.row + dr, at.col + dc))
                    .filter(|m| self.is_blank(m.row, m.col))
                    .collect()
            }
        }
    }

    fn apply(&self, mv: Move) -> Self {
        debug_assert!(self.is_blank(mv.row, mv.col));

        let mut next = self.clone();
        let idx = self.cell_index(mv.row, mv.col);
        let from = next.locations[self.active.index()].map(|i| i as usize);

        next.blocked.set(idx);
        next.locations[self.active.index()] = Some(idx as u16);
        next.active = self.active.opponent();

        next.hash = next.zobrist.toggle_block(next.hash, idx);
        next.hash = next.zobrist.move_location(next.hash, self.active, from, idx);
        next.hash = next.zobrist.toggle_side(next.hash);

        next
    }

    #[inline]
    fn canonical_hash(&self) -> u64 {
        self.hash
    }

    fn occupancy_grid(&self) -> OccupancyGrid {
        let total = self.total_cells();
        let mut cells = vec![0u64; total];
        for idx in self.blocked.iter_ones() {
            cells[idx] = 1;
        }

        let loc = |p: usize| self.locations[p].map_or(0, |i| u64::from(i) + 1);
        let active_marker = match self.active {
            Player::One => 1,
            Player::Two => 2,
        };

        OccupancyGrid {
            height: self.height as usize,
            width: self.width as usize,
            cells,
            meta: [loc(0), loc(1), active_marker],
        }
    }
}
