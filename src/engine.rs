//! Iterative-deepening search driver
//!
//! Owns the evaluator, the caches, and the search configuration, and
//! runs depth 1, 2, 3, ... until the clock aborts or the tree is
//! exhausted. The answer from the deepest completed depth wins; an
//! abort mid-depth keeps the previous depth's move.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::board::{BoardState, Move};
use crate::eval::Evaluator;
use crate::search::{GameTreeSearch, SearchClock, SymmetryIndex, TranspositionCache};

/// Tunable search parameters.
///
/// Deserializes with defaults for missing fields, so a config file can
/// set only what it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Abort when the clock reports at most this many milliseconds left
    pub timer_threshold_ms: f64,
    /// Hard depth cap; `None` deepens until the clock or the tree runs out
    pub max_depth: Option<u32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            timer_threshold_ms: 10.0,
            max_depth: None,
        }
    }
}

/// Move-selection engine for one player.
///
/// Keeps its transposition cache and symmetry index across calls, so
/// knowledge accumulates over a whole game. [`reset`](Self::reset)
/// drops both when starting a fresh match.
pub struct SearchEngine<E> {
    evaluator: E,
    config: SearchConfig,
    tt: TranspositionCache,
    symmetry: SymmetryIndex,
}

impl<E> SearchEngine<E> {
    pub fn new(evaluator: E) -> Self {
        Self::with_config(evaluator, SearchConfig::default())
    }

    pub fn with_config(evaluator: E, config: SearchConfig) -> Self {
        Self {
            evaluator,
            config,
            tt: TranspositionCache::new(),
            symmetry: SymmetryIndex::new(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Drop accumulated caches
    pub fn reset(&mut self) {
        self.tt.clear();
        self.symmetry.clear();
    }

    /// Pick a move for the active player before the clock runs out.
    ///
    /// `time_left` reports milliseconds remaining and may be imprecise;
    /// the configured threshold absorbs the slack. Returns
    /// [`Move::NONE`] when the position has no legal moves or the very
    /// first deadline check already fired.
    pub fn choose_move<B: BoardState>(&mut self, board: &B, time_left: &dyn Fn() -> f64) -> Move
    where
        E: Evaluator<B>,
    {
        let clock = SearchClock::new(time_left, self.config.timer_threshold_ms);
        let perspective = board.active_player();
        let max_depth = self.config.max_depth.unwrap_or(u32::MAX);

        let mut best = Move::NONE;
        for depth in 1..=max_depth {
            let mut search =
                GameTreeSearch::new(&self.evaluator, &mut self.tt, &mut self.symmetry, perspective);

            match search.search(board, depth, &clock) {
                Ok(result) => {
                    if result.best_move.is_none() {
                        // No legal moves; deepening cannot change that
                        return Move::NONE;
                    }
                    best = result.best_move;
                    debug!(depth, score = result.score, mv = ?best, "depth completed");

                    // A proven win or loss will not change with depth
                    if result.score.is_infinite() {
                        break;
                    }
                    // The tree is shallower than the next depth asks for
                    if depth as usize >= board.blank_count() {
                        break;
                    }
                }
                Err(abort) => {
                    // The aborted depth's candidate is partial: some of
                    // the root moves were never scored. Discard it and
                    // keep the last fully completed depth's answer.
                    debug!(depth, partial = ?abort.best_move, "deadline reached");
                    break;
                }
            }
        }

        trace!(
            tt_positions = self.tt.len(),
            symmetry_entries = self.symmetry.len(),
            "cache sizes"
        );
        best
    }
}
