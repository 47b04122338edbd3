//! Built-in heuristic evaluators
//!
//! All three heuristics build on the mobility difference between the
//! two players, biased by a positional term. Terminal positions are
//! scored first: a stranded active player has lost, and the score is
//! exactly infinite in the right direction regardless of heuristic.

use crate::board::{Board, BoardState, Move, Player};

use super::Evaluator;

/// Terminal check shared by all heuristics.
///
/// Returns `Some(-inf)` when the perspective player is to move and has
/// no legal moves, `Some(+inf)` when the opponent is stranded, `None`
/// when the game goes on.
fn terminal_score(board: &Board, perspective: Player) -> Option<f64> {
    if board.legal_moves().is_empty() {
        if board.active_player() == perspective {
            Some(f64::NEG_INFINITY)
        } else {
            Some(f64::INFINITY)
        }
    } else {
        None
    }
}

#[inline]
fn mobility(board: &Board, player: Player) -> f64 {
    board.legal_moves_for(player).len() as f64
}

/// Squared Euclidean distance between two cells
#[inline]
fn squared_distance(a: Move, b: Move) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    dr * dr + dc * dc
}

/// Mobility difference penalized by the squared distance to the
/// opponent's knight. Rewards staying close enough to steal the
/// opponent's escape squares.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChaseDistance;

impl Evaluator<Board> for ChaseDistance {
    fn score(&self, board: &Board, perspective: Player) -> f64 {
        if let Some(score) = terminal_score(board, perspective) {
            return score;
        }

        let own = mobility(board, perspective);
        let opp = mobility(board, perspective.opponent());

        let chase = match (
            board.player_location(perspective),
            board.player_location(perspective.opponent()),
        ) {
            (Some(a), Some(b)) => squared_distance(a, b),
            _ => 0.0,
        };

        own - opp - chase
    }
}

/// Mobility difference rewarded by how far the opponent has been
/// pushed from the board center. Central squares hold the most knight
/// moves, so driving the opponent outward starves them.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterPressure;

impl Evaluator<Board> for CenterPressure {
    fn score(&self, board: &Board, perspective: Player) -> f64 {
        if let Some(score) = terminal_score(board, perspective) {
            return score;
        }

        let own = mobility(board, perspective);
        let opp = mobility(board, perspective.opponent());

        let push = match board.player_location(perspective.opponent()) {
            Some(at) => {
                let dr = f64::from(at.row) - board.height() as f64 / 2.0;
                let dc = f64::from(at.col) - board.width() as f64 / 2.0;
                dr * dr + dc * dc
            }
            None => 0.0,
        };

        own - opp + push
    }
}

/// Mobility difference with the opponent's options double-weighted.
/// Prefers lines that shrink the opponent's move count even at the
/// cost of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggressiveMobility;

impl Evaluator<Board> for AggressiveMobility {
    fn score(&self, board: &Board, perspective: Player) -> f64 {
        if let Some(score) = terminal_score(board, perspective) {
            return score;
        }

        mobility(board, perspective) - 2.0 * mobility(board, perspective.opponent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn midgame_board() -> Board {
        // One at (3,3), Two at (0,0), both placed, One to move
        Board::new()
            .apply(Move::new(3, 3))
            .apply(Move::new(0, 0))
    }

    #[test]
    fn test_chase_distance_midgame() {
        let board = midgame_board();
        // One: 8 knight moves from center. Two: (1,2) and (2,1), both blank.
        // Distance squared between (3,3) and (0,0) is 18.
        let score = ChaseDistance.score(&board, Player::One);
        assert_eq!(score, 8.0 - 2.0 - 18.0);
    }

    #[test]
    fn test_chase_distance_no_term_before_placement() {
        let board = Board::new().apply(Move::new(3, 3));
        // Two is unplaced: 48 opening moves, no chase term
        let score = ChaseDistance.score(&board, Player::One);
        assert_eq!(score, 8.0 - 48.0);
    }

    #[test]
    fn test_center_pressure_midgame() {
        let board = midgame_board();
        // Two at (0,0) on a 7x7 board: (0-3.5)^2 + (0-3.5)^2 = 24.5
        let score = CenterPressure.score(&board, Player::One);
        assert_eq!(score, 8.0 - 2.0 + 24.5);
    }

    #[test]
    fn test_aggressive_mobility_midgame() {
        let board = midgame_board();
        let score = AggressiveMobility.score(&board, Player::One);
        assert_eq!(score, 8.0 - 2.0 * 2.0);
    }

    #[test]
    fn test_terminal_scores_are_infinite() {
        // 1x3 strip: knights cannot move at all once placed
        let board = Board::with_size(1, 3)
            .apply(Move::new(0, 0))
            .apply(Move::new(0, 2));

        // One is to move and stranded
        assert!(board.legal_moves().is_empty());
        assert_eq!(
            ChaseDistance.score(&board, Player::One),
            f64::NEG_INFINITY
        );
        assert_eq!(ChaseDistance.score(&board, Player::Two), f64::INFINITY);
        assert_eq!(
            CenterPressure.score(&board, Player::One),
            f64::NEG_INFINITY
        );
        assert_eq!(
            AggressiveMobility.score(&board, Player::Two),
            f64::INFINITY
        );
    }

    #[test]
    fn test_perspective_is_antisymmetric_for_mobility() {
        let board = midgame_board();
        let one = AggressiveMobility.score(&board, Player::One);
        let two = AggressiveMobility.score(&board, Player::Two);
        // 8 - 2*2 vs 2 - 2*8
        assert_eq!(one, 4.0);
        assert_eq!(two, -14.0);
    }
}
