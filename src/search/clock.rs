//! Deadline tracking for time-bounded search
//!
//! The caller hands over a clock callback reporting milliseconds left.
//! The callback is treated as imprecise: the search keeps a safety
//! threshold and aborts while time still remains, so a move is always
//! returned before the real deadline.

use thiserror::Error;

use crate::board::Move;

/// Raised when the clock falls at or below the safety threshold.
///
/// Carries the best move found before the abort so the unwinding
/// search can hand a usable answer back to the driver. The move is
/// [`Move::NONE`] when the abort fired before any depth completed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("search deadline exceeded")]
pub struct DeadlineExceeded {
    pub best_move: Move,
}

/// View of the remaining search time.
///
/// Borrowed by every search frame; checking is a single callback
/// invocation and a comparison.
pub struct SearchClock<'a> {
    time_left: &'a dyn Fn() -> f64,
    threshold_ms: f64,
}

impl<'a> SearchClock<'a> {
    /// Wrap a milliseconds-remaining callback with a safety threshold
    pub fn new(time_left: &'a dyn Fn() -> f64, threshold_ms: f64) -> Self {
        Self {
            time_left,
            threshold_ms,
        }
    }

    /// Milliseconds the callback currently reports
    #[must_use]
    pub fn remaining(&self) -> f64 {
        (self.time_left)()
    }

    /// Abort with `last_best` once the clock falls below the threshold
    pub fn check_or_abort(&self, last_best: Move) -> Result<(), DeadlineExceeded> {
        if self.remaining() < self.threshold_ms {
            Err(DeadlineExceeded {
                best_move: last_best,
            })
        } else {
            Ok(())
        }
    }
}
