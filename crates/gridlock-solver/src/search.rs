//! Backtracking search over the strategy matrix.

use std::time::Instant;

use gridlock_core::Board;
use log::debug;

use crate::{
    config::{SearchMethod, SolverConfig},
    domains::DomainGrid,
    propagate::enforce_arc_consistency,
    report::SolveReport,
};

/// Solves `board` with the given configuration.
///
/// The input board is not modified; the returned report carries the solved
/// board (or, when no solution exists, the input with any cells forced by
/// preprocessing filled in).
///
/// # Examples
///
/// ```
/// use gridlock_core::Board;
/// use gridlock_solver::{solve, SolverConfig};
///
/// let board: Board = "
///     53..7....
///     6..195...
///     .98....6.
///     8...6...3
///     4..8.3..1
///     7...2...6
///     .6....28.
///     ...419..5
///     ....8..79
/// "
/// .parse()
/// .unwrap();
///
/// let report = solve(&board, SolverConfig::default());
/// assert!(report.solved());
/// assert!(report.board().is_solved());
/// ```
#[must_use]
pub fn solve(board: &Board, config: SolverConfig) -> SolveReport {
    let start = Instant::now();
    let mut work = *board;
    let mut engine = SearchEngine::new(config);

    let solved = match config.method {
        SearchMethod::MaintainedArcConsistency => {
            let mut domains = DomainGrid::from_board(&work);
            if enforce_arc_consistency(&mut domains) {
                engine.explore_mac(&mut work, &domains)
            } else {
                debug!("initial domains inconsistent, rejecting without search");
                false
            }
        }
        SearchMethod::Pruning | SearchMethod::ForwardChecking => {
            if config.preprocess && !preprocess(&mut work) {
                debug!("AC-3 preprocessing rejected the puzzle");
                return SolveReport::new(work, false, 0, 0, start.elapsed());
            }
            engine.explore(&mut work)
        }
    };

    let elapsed = start.elapsed();
    debug!(
        "{config}: solved={solved} steps={} backtracks={} in {elapsed:?}",
        engine.steps, engine.backtracks
    );
    SolveReport::new(work, solved, engine.steps, engine.backtracks, elapsed)
}

/// Runs AC-3 on the board's initial domains and fills every cell the fixed
/// point forces to a single value. Returns `false` if the domains wipe out.
fn preprocess(board: &mut Board) -> bool {
    let mut domains = DomainGrid::from_board(board);
    if !enforce_arc_consistency(&mut domains) {
        return false;
    }
    domains.write_singles_to(board);
    true
}

/// The recursive search state: the strategy in use and the work counters.
struct SearchEngine {
    config: SolverConfig,
    steps: u64,
    backtracks: u64,
}

impl SearchEngine {
    fn new(config: SolverConfig) -> Self {
        Self {
            config,
            steps: 0,
            backtracks: 0,
        }
    }

    /// Depth-first search for [`SearchMethod::Pruning`] and
    /// [`SearchMethod::ForwardChecking`]. Returns `true` with the board fully
    /// assigned, or `false` with the board exactly as it was on entry.
    fn explore(&mut self, board: &mut Board) -> bool {
        let Some(pos) = self.config.variable_ordering.select(board) else {
            return true;
        };
        self.steps += 1;

        for digit in self.config.value_ordering.order(board, pos) {
            board.place(pos, digit);
            let viable = self.config.method != SearchMethod::ForwardChecking
                || has_future(board);
            if viable && self.explore(board) {
                return true;
            }
            board.clear(pos);
            self.backtracks += 1;
        }
        false
    }

    /// Depth-first search under maintained arc consistency.
    ///
    /// `domains` is arc-consistent on entry and shared with the caller, so
    /// each trial assignment works on a clone: collapse the chosen cell,
    /// re-run AC-3, and recurse only if the clone stayed consistent. A failed
    /// branch drops its clone and the parent domains are untouched.
    fn explore_mac(&mut self, board: &mut Board, domains: &DomainGrid) -> bool {
        let Some(pos) = self
            .config
            .variable_ordering
            .select_in_domains(board, domains)
        else {
            return true;
        };
        self.steps += 1;

        for digit in self.config.value_ordering.order_in_domains(board, domains, pos) {
            board.place(pos, digit);
            let mut branch = domains.clone();
            branch.assign(pos, digit);
            if enforce_arc_consistency(&mut branch) && self.explore_mac(board, &branch) {
                return true;
            }
            board.clear(pos);
            self.backtracks += 1;
        }
        false
    }
}

/// Forward-checking test: every empty cell must still permit at least one
/// value.
fn has_future(board: &Board) -> bool {
    board
        .empty_positions()
        .all(|pos| !board.candidates_at(pos).is_empty())
}
