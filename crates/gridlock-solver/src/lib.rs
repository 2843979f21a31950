//! Constraint-satisfaction search for 9×9 puzzles.
//!
//! The solver is a recursive backtracking engine parameterized along three
//! independent axes: the consistency check run after each assignment
//! ([`SearchMethod`]), the cell-selection heuristic ([`VariableOrdering`]),
//! and the value-ordering heuristic ([`ValueOrdering`]). [`solve`] runs any
//! [`SolverConfig`]; the [`presets`] module names each of the 12 fixed
//! combinations.
//!
//! Solving never fails with an error: an unsolvable or inconsistent puzzle
//! comes back as a [`SolveReport`] with `solved() == false`, and the caller's
//! board is never modified.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::Board;
//! use gridlock_solver::{SearchMethod, SolverConfig, solve};
//!
//! let board: Board = "
//!     53..7....
//!     6..195...
//!     .98....6.
//!     8...6...3
//!     4..8.3..1
//!     7...2...6
//!     .6....28.
//!     ...419..5
//!     ....8..79
//! "
//! .parse()?;
//!
//! let config = SolverConfig {
//!     method: SearchMethod::ForwardChecking,
//!     ..SolverConfig::default()
//! };
//! let report = solve(&board, config);
//! assert!(report.solved());
//! assert!(report.board().is_solved());
//! # Ok::<(), gridlock_core::ParseBoardError>(())
//! ```

pub use self::{
    config::{SearchMethod, SolverConfig, ValueOrdering, VariableOrdering},
    domains::DomainGrid,
    propagate::enforce_arc_consistency,
    report::SolveReport,
    search::solve,
};

mod config;
mod domains;
mod heuristics;
pub mod presets;
mod propagate;
mod report;
mod search;
