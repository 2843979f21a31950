//! Outcome of a solve run.

use std::time::Duration;

use gridlock_core::Board;

/// The result of running a configured search on a puzzle: the final board,
/// whether it is solved, and the work counters accumulated along the way.
///
/// *Steps* counts cell selections, including selections that turned out to be
/// dead ends. *Backtracks* counts undone trial assignments. A puzzle rejected
/// by AC-3 preprocessing reports zero for both.
#[derive(Debug, Clone)]
pub struct SolveReport {
    board: Board,
    solved: bool,
    steps: u64,
    backtracks: u64,
    elapsed: Duration,
}

impl SolveReport {
    pub(crate) fn new(
        board: Board,
        solved: bool,
        steps: u64,
        backtracks: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            board,
            solved,
            steps,
            backtracks,
            elapsed,
        }
    }

    /// The board in its final state: the solution if one was found, otherwise
    /// the input (possibly with cells forced by preprocessing filled in).
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether a complete, valid assignment was found.
    #[must_use]
    pub fn solved(&self) -> bool {
        self.solved
    }

    /// Number of cells selected for assignment during the search.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Number of trial assignments that were undone.
    #[must_use]
    pub fn backtracks(&self) -> u64 {
        self.backtracks
    }

    /// Wall-clock duration of the run.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Wall-clock duration in whole milliseconds.
    #[must_use]
    pub fn runtime_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}
