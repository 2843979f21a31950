//! Named entry points, one per strategy combination.
//!
//! Each function fixes one cell of the method × variable-ordering ×
//! value-ordering matrix and runs [`solve`] with it, preprocessing off.
//! Callers that want the AC-3 preprocessing pass or a dynamically chosen
//! strategy should build a [`SolverConfig`] and call [`solve`] directly.

use gridlock_core::Board;

use crate::{
    config::{SearchMethod, SolverConfig, ValueOrdering, VariableOrdering},
    report::SolveReport,
    search::solve,
};

const fn config(
    method: SearchMethod,
    variable_ordering: VariableOrdering,
    value_ordering: ValueOrdering,
) -> SolverConfig {
    SolverConfig {
        method,
        variable_ordering,
        value_ordering,
        preprocess: false,
    }
}

/// Plain backtracking over first-empty cells in natural value order.
#[must_use]
pub fn pruning(board: &Board) -> SolveReport {
    solve(
        board,
        config(
            SearchMethod::Pruning,
            VariableOrdering::FirstEmpty,
            ValueOrdering::Natural,
        ),
    )
}

/// Plain backtracking with least-constraining-value ordering.
#[must_use]
pub fn pruning_lcv(board: &Board) -> SolveReport {
    solve(
        board,
        config(
            SearchMethod::Pruning,
            VariableOrdering::FirstEmpty,
            ValueOrdering::LeastConstrainingValue,
        ),
    )
}

/// Plain backtracking with minimum-remaining-values cell selection.
#[must_use]
pub fn pruning_mrv(board: &Board) -> SolveReport {
    solve(
        board,
        config(
            SearchMethod::Pruning,
            VariableOrdering::MinimumRemainingValues,
            ValueOrdering::Natural,
        ),
    )
}

/// Plain backtracking with MRV cell selection and LCV value ordering.
#[must_use]
pub fn pruning_mrv_lcv(board: &Board) -> SolveReport {
    solve(
        board,
        config(
            SearchMethod::Pruning,
            VariableOrdering::MinimumRemainingValues,
            ValueOrdering::LeastConstrainingValue,
        ),
    )
}

/// Forward checking over first-empty cells in natural value order.
#[must_use]
pub fn forward_checking(board: &Board) -> SolveReport {
    solve(
        board,
        config(
            SearchMethod::ForwardChecking,
            VariableOrdering::FirstEmpty,
            ValueOrdering::Natural,
        ),
    )
}

/// Forward checking with least-constraining-value ordering.
#[must_use]
pub fn forward_checking_lcv(board: &Board) -> SolveReport {
    solve(
        board,
        config(
            SearchMethod::ForwardChecking,
            VariableOrdering::FirstEmpty,
            ValueOrdering::LeastConstrainingValue,
        ),
    )
}

/// Forward checking with minimum-remaining-values cell selection.
#[must_use]
pub fn forward_checking_mrv(board: &Board) -> SolveReport {
    solve(
        board,
        config(
            SearchMethod::ForwardChecking,
            VariableOrdering::MinimumRemainingValues,
            ValueOrdering::Natural,
        ),
    )
}

/// Forward checking with MRV cell selection and LCV value ordering.
#[must_use]
pub fn forward_checking_mrv_lcv(board: &Board) -> SolveReport {
    solve(
        board,
        config(
            SearchMethod::ForwardChecking,
            VariableOrdering::MinimumRemainingValues,
            ValueOrdering::LeastConstrainingValue,
        ),
    )
}

/// Maintained arc consistency over first-empty cells in natural value order.
#[must_use]
pub fn mac(board: &Board) -> SolveReport {
    solve(
        board,
        config(
            SearchMethod::MaintainedArcConsistency,
            VariableOrdering::FirstEmpty,
            ValueOrdering::Natural,
        ),
    )
}

/// Maintained arc consistency with domain-aware LCV value ordering.
#[must_use]
pub fn mac_lcv(board: &Board) -> SolveReport {
    solve(
        board,
        config(
            SearchMethod::MaintainedArcConsistency,
            VariableOrdering::FirstEmpty,
            ValueOrdering::LeastConstrainingValue,
        ),
    )
}

/// Maintained arc consistency with domain-aware MRV cell selection.
#[must_use]
pub fn mac_mrv(board: &Board) -> SolveReport {
    solve(
        board,
        config(
            SearchMethod::MaintainedArcConsistency,
            VariableOrdering::MinimumRemainingValues,
            ValueOrdering::Natural,
        ),
    )
}

/// Maintained arc consistency with domain-aware MRV and LCV.
#[must_use]
pub fn mac_mrv_lcv(board: &Board) -> SolveReport {
    solve(
        board,
        config(
            SearchMethod::MaintainedArcConsistency,
            VariableOrdering::MinimumRemainingValues,
            ValueOrdering::LeastConstrainingValue,
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_match_the_configured_facade() {
        let board: Board = "
            53..7....
            6..195...
            .98....6.
            8...6...3
            4..8.3..1
            7...2...6
            .6....28.
            ...419..5
            ....8..79
        "
        .parse()
        .unwrap();

        let presets: [fn(&Board) -> SolveReport; 12] = [
            pruning,
            pruning_lcv,
            pruning_mrv,
            pruning_mrv_lcv,
            forward_checking,
            forward_checking_lcv,
            forward_checking_mrv,
            forward_checking_mrv_lcv,
            mac,
            mac_lcv,
            mac_mrv,
            mac_mrv_lcv,
        ];

        for preset in presets {
            let report = preset(&board);
            assert!(report.solved());
            assert!(report.board().is_solved());
        }
    }
}
