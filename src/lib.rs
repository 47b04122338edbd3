//! Time-bounded move search for Knight's Isolation.
//!
//! Two knights share a grid; visited cells stay blocked and the first
//! player without a move loses. The engine answers "what should the
//! active player play" under an external millisecond clock, using
//! iterative-deepening minimax with alpha-beta pruning, a
//! transposition cache, and a symmetry score index for the opening.
//!
//! # Example
//!
//! ```
//! use isolation::{Board, BoardState, SearchConfig, SearchEngine};
//! use isolation::eval::ChaseDistance;
//!
//! let config = SearchConfig {
//!     max_depth: Some(3),
//!     ..SearchConfig::default()
//! };
//! let mut engine = SearchEngine::with_config(ChaseDistance, config);
//!
//! let board = Board::new();
//! let time_left = || 150.0;
//! let mv = engine.choose_move(&board, &time_left);
//! assert!(!mv.is_none());
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod search;

pub use board::{Board, BoardState, Move, OccupancyGrid, Player};
pub use engine::{SearchConfig, SearchEngine};
