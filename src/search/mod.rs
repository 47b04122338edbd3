//! Time-bounded game tree search
//!
//! The search runs iterative deepening over a depth-limited minimax
//! with alpha-beta pruning. Two caches back it: a transposition cache
//! keyed on exact position identity and depth, and a symmetry index
//! that shares heuristic scores between reflected positions in the
//! opening.

pub mod alphabeta;
pub mod clock;
pub mod symmetry;
pub mod tt;

pub use alphabeta::GameTreeSearch;
pub use clock::{DeadlineExceeded, SearchClock};
pub use symmetry::SymmetryIndex;
pub use tt::{SearchResult, TranspositionCache};
