//! Depth-limited minimax with alpha-beta pruning
//!
//! Scores are always taken from the root player's perspective: the
//! maximizing layers pick for the root player and the minimizing
//! layers for the opponent, but the evaluator is never flipped.
//!
//! Every frame polls the deadline clock before doing any work. An
//! abort unwinds as [`DeadlineExceeded`] carrying the best root move
//! found so far, so a partially searched depth still produces an
//! answer.

use crate::board::{BoardState, Move, Player};
use crate::eval::Evaluator;

use super::clock::{DeadlineExceeded, SearchClock};
use super::symmetry::SymmetryIndex;
use super::tt::{SearchResult, TranspositionCache};

/// One depth-limited search over a game tree.
///
/// Borrows the caches mutably for the duration of a single `search`
/// call; the driver owns them across iterative-deepening rounds so
/// later depths see everything earlier depths stored.
pub struct GameTreeSearch<'a, E> {
    evaluator: &'a E,
    tt: &'a mut TranspositionCache,
    symmetry: &'a mut SymmetryIndex,
    perspective: Player,
}

impl<'a, E> GameTreeSearch<'a, E> {
    pub fn new(
        evaluator: &'a E,
        tt: &'a mut TranspositionCache,
        symmetry: &'a mut SymmetryIndex,
        perspective: Player,
    ) -> Self {
        Self {
            evaluator,
            tt,
            symmetry,
            perspective,
        }
    }

    /// Search the position to `depth` plies and return the best move
    /// with its score.
    ///
    /// Returns [`Move::NONE`] as the best move when the position has no
    /// legal moves or `depth` is zero; the score is then the static
    /// evaluation.
    pub fn search<B: BoardState>(
        &mut self,
        board: &B,
        depth: u32,
        clock: &SearchClock<'_>,
    ) -> Result<SearchResult, DeadlineExceeded>
    where
        E: Evaluator<B>,
    {
        clock.check_or_abort(Move::NONE)?;

        let moves = board.legal_moves();
        if depth == 0 || moves.is_empty() {
            return Ok(SearchResult {
                best_move: Move::NONE,
                score: self.evaluator.score(board, self.perspective),
            });
        }

        // Opening book for the very first move: the center cell
        // dominates every alternative, no search needed.
        if board.blank_count() == board.total_cells() {
            return Ok(SearchResult {
                best_move: Move::new((board.height() / 2) as i8, (board.width() / 2) as i8),
                score: 0.0,
            });
        }

        if let Some(hit) = self.tt.get(board.canonical_hash(), depth) {
            return Ok(hit);
        }

        // Symmetry sharing only pays off while the board is nearly
        // empty; past two occupied cells the masked key gets ambiguous.
        let in_opening = board.blank_count() > board.total_cells().saturating_sub(3);

        let mut best_move = Move::NONE;
        let mut best_score = f64::NEG_INFINITY;
        let mut alpha = f64::NEG_INFINITY;

        for mv in moves {
            let child = board.apply(mv);

            let score = if in_opening {
                match self.symmetry.lookup(&child.occupancy_grid()) {
                    Some(cached) => cached,
                    None => {
                        let score = self
                            .min_value(&child, depth - 1, alpha, f64::INFINITY, clock)
                            .map_err(|_| DeadlineExceeded { best_move })?;
                        self.symmetry.record(&child.occupancy_grid(), score);
                        score
                    }
                }
            } else {
                self.min_value(&child, depth - 1, alpha, f64::INFINITY, clock)
                    .map_err(|_| DeadlineExceeded { best_move })?
            };

            // Strict comparison keeps the first move on ties. The
            // fallback still picks a move when every line is lost.
            if score > best_score || best_move.is_none() {
                best_score = score;
                best_move = mv;
            }
            alpha = alpha.max(best_score);
        }

        let result = SearchResult {
            best_move,
            score: best_score,
        };
        self.tt.put(board.canonical_hash(), depth, result);
        Ok(result)
    }

    /// Minimizing layer: the opponent moves, driving the root player's
    /// score down.
    fn min_value<B: BoardState>(
        &mut self,
        board: &B,
        depth: u32,
        alpha: f64,
        mut beta: f64,
        clock: &SearchClock<'_>,
    ) -> Result<f64, DeadlineExceeded>
    where
        E: Evaluator<B>,
    {
        clock.check_or_abort(Move::NONE)?;

        let moves = board.legal_moves();
        if depth == 0 || moves.is_empty() {
            return Ok(self.evaluator.score(board, self.perspective));
        }

        let mut value = f64::INFINITY;
        for mv in moves {
            let child = board.apply(mv);
            value = value.min(self.max_value(&child, depth - 1, alpha, beta, clock)?);
            if value <= alpha {
                return Ok(value);
            }
            beta = beta.min(value);
        }
        Ok(value)
    }

    /// Maximizing layer: the root player moves.
    fn max_value<B: BoardState>(
        &mut self,
        board: &B,
        depth: u32,
        mut alpha: f64,
        beta: f64,
        clock: &SearchClock<'_>,
    ) -> Result<f64, DeadlineExceeded>
    where
        E: Evaluator<B>,
    {
        clock.check_or_abort(Move::NONE)?;

        let moves = board.legal_moves();
        if depth == 0 || moves.is_empty() {
            return Ok(self.evaluator.score(board, self.perspective));
        }

        let mut value = f64::NEG_INFINITY;
        for mv in moves {
            let child = board.apply(mv);
            value = value.max(self.min_value(&child, depth - 1, alpha, beta, clock)?);
            if value >= beta {
                return Ok(value);
            }
            alpha = alpha.max(value);
        }
        Ok(value)
    }
}
