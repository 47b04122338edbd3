//! Position evaluation
//!
//! Evaluators map a position to a score from a fixed player's
//! perspective. Higher is better for that player; terminal positions
//! score exactly positive or negative infinity.

pub mod heuristic;

pub use heuristic::{AggressiveMobility, CenterPressure, ChaseDistance};

use crate::board::{BoardState, Player};

/// Scoring function over board states.
///
/// `perspective` is the player the score favors when positive. It stays
/// fixed for an entire search regardless of whose turn it is at the
/// node being scored.
pub trait Evaluator<B: BoardState> {
    fn score(&self, board: &B, perspective: Player) -> f64;
}
