//! Strategy configuration for the search engine.
//!
//! The search is parameterized by three orthogonal choices: the consistency
//! check performed after each assignment ([`SearchMethod`]), the policy that
//! picks the next cell ([`VariableOrdering`]), and the policy that orders its
//! candidate values ([`ValueOrdering`]). Every combination is a valid solver;
//! [`SolverConfig::all`] enumerates the full matrix.

use std::fmt::{self, Display};

/// The consistency check applied after each trial assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum SearchMethod {
    /// No lookahead; only legal candidates are ever assigned, and the search
    /// backtracks when a cell has none left.
    #[default]
    #[display("pruning")]
    Pruning,
    /// After each assignment, every other empty cell must retain at least
    /// one legal value, or the assignment is undone on the spot.
    #[display("forward checking")]
    ForwardChecking,
    /// Maintained arc consistency: after each assignment the domains are
    /// cloned, the assigned cell is collapsed, and AC-3 is re-run; the
    /// search recurses only on a consistent clone.
    #[display("pruning + MAC")]
    MaintainedArcConsistency,
}

/// The policy that selects the next cell to assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum VariableOrdering {
    /// The first unfilled cell in row-major order.
    #[default]
    #[display("first empty")]
    FirstEmpty,
    /// The cell with the fewest remaining legal values (MRV), ties broken by
    /// scan order.
    #[display("MRV")]
    MinimumRemainingValues,
}

/// The policy that orders a cell's candidate values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum ValueOrdering {
    /// Legal values in ascending order.
    #[default]
    #[display("natural")]
    Natural,
    /// Least-constraining value: candidates sorted by how much freedom they
    /// leave the surrounding cells.
    #[display("LCV")]
    LeastConstrainingValue,
}

/// A complete solver configuration.
///
/// # Examples
///
/// ```
/// use gridlock_solver::{SearchMethod, SolverConfig, VariableOrdering};
///
/// let config = SolverConfig {
///     method: SearchMethod::ForwardChecking,
///     variable_ordering: VariableOrdering::MinimumRemainingValues,
///     ..SolverConfig::default()
/// };
/// assert_eq!(config.to_string(), "forward checking / MRV / natural");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SolverConfig {
    /// Consistency check variant.
    pub method: SearchMethod,
    /// Cell-selection policy.
    pub variable_ordering: VariableOrdering,
    /// Value-ordering policy.
    pub value_ordering: ValueOrdering,
    /// Run AC-3 once before the search starts, filling forced singletons.
    /// Ignored under [`SearchMethod::MaintainedArcConsistency`], which always
    /// starts from arc-consistent domains.
    pub preprocess: bool,
}

impl SolverConfig {
    /// Enumerates all 12 method × variable × value combinations in a fixed
    /// order (method-major, then variable ordering, then value ordering),
    /// each without preprocessing.
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut configs = Vec::with_capacity(12);
        for method in [
            SearchMethod::Pruning,
            SearchMethod::ForwardChecking,
            SearchMethod::MaintainedArcConsistency,
        ] {
            for variable_ordering in [
                VariableOrdering::FirstEmpty,
                VariableOrdering::MinimumRemainingValues,
            ] {
                for value_ordering in
                    [ValueOrdering::Natural, ValueOrdering::LeastConstrainingValue]
                {
                    configs.push(Self {
                        method,
                        variable_ordering,
                        value_ordering,
                        preprocess: false,
                    });
                }
            }
        }
        configs
    }
}

impl Display for SolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {}",
            self.method, self.variable_ordering, self.value_ordering
        )?;
        if self.preprocess {
            f.write_str(" / AC-3 preprocessing")?;
        }
        Ok(())
    }
}
