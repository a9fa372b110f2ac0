use crate::basic_types::Solution;
#[cfg(doc)]
use crate::engine::DpllSolver;

/// The result of a call to [`DpllSolver::solve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// A satisfying assignment was found; it covers every variable of the input formula.
    Satisfiable(Solution),
    /// No assignment satisfies the formula.
    Unsatisfiable,
}

impl SatisfactionResult {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SatisfactionResult::Satisfiable(_))
    }
}
