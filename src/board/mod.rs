//! Board representation for Knight's Isolation

pub mod bitgrid;
pub mod board;
pub mod grid;
pub mod zobrist;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitgrid::BitGrid;
pub use board::Board;
pub use grid::OccupancyGrid;
pub use zobrist::ZobristTable;

/// Default board size (7x7)
pub const DEFAULT_HEIGHT: usize = 7;
pub const DEFAULT_WIDTH: usize = 7;

/// Largest supported board dimension. Move coordinates are `i8` and
/// knight offsets reach two cells past the edge, so rows and columns
/// must stay within `i8` range even after an offset.
pub const MAX_DIMENSION: u8 = 126;

/// The two players of an Isolation match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the opposing player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Index for per-player tables (0 or 1)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// A move destination on the board.
///
/// `(-1, -1)` is the sentinel for "no move": either the search was
/// aborted before any depth completed, or the position has no legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: i8,
    pub col: i8,
}

impl Move {
    /// The "no move" sentinel
    pub const NONE: Move = Move { row: -1, col: -1 };

    #[inline]
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// True for the `(-1, -1)` sentinel
    #[inline]
    pub fn is_none(self) -> bool {
        self == Move::NONE
    }

    #[inline]
    pub fn to_index(self, width: usize) -> usize {
        debug_assert!(self.row >= 0 && self.col >= 0);
        self.row as usize * width + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, width: usize) -> Self {
        Self {
            row: (idx / width) as i8,
            col: (idx % width) as i8,
        }
    }
}

/// Capability contract the search consumes.
///
/// Implementors provide legal-move generation in a deterministic order,
/// non-mutating move application, terminal detection via an empty move
/// list, a stable canonical hash (equal hashes imply move-equivalent
/// states), and a row-major occupancy snapshot for symmetry probing.
pub trait BoardState: Clone {
    fn height(&self) -> usize;

    fn width(&self) -> usize;

    #[inline]
    fn total_cells(&self) -> usize {
        self.height() * self.width()
    }

    /// Number of cells never yet occupied
    fn blank_count(&self) -> usize;

    /// The player to move
    fn active_player(&self) -> Player;

    /// Legal moves for the active player, in a deterministic order
    fn legal_moves(&self) -> Vec<Move>;

    /// Legal moves for an arbitrary player (used by evaluators)
    fn legal_moves_for(&self, player: Player) -> Vec<Move>;

    /// Apply a move, producing the successor state. Never mutates `self`.
    fn apply(&self, mv: Move) -> Self;

    /// Stable key over the full state identity (occupancy, player
    /// locations, side to move)
    fn canonical_hash(&self) -> u64;

    /// Row-major cell marks plus trailing metadata fields
    fn occupancy_grid(&self) -> OccupancyGrid;
}
