use crate::basic_types::Literal;
use crate::engine::Formula;

/// A branching rule: reads the current formula state and picks the literal to split on.
///
/// The solver only consults a heuristic when the formula is non-terminal (at least one clause,
/// no empty clause) and free of unit and pure literals, so at that point every live variable
/// occurs in both polarities. Returning [`None`] is therefore a programming error in the
/// heuristic, which the solver reports as
/// [`SolverError::DegenerateHeuristic`](crate::SolverError::DegenerateHeuristic).
///
/// The returned literal is tried true first; its negation is committed on the original formula
/// when the first branch fails.
pub trait BranchingHeuristic {
    /// A short name used in diagnostics and statistics.
    fn name(&self) -> &'static str;

    /// Determines the literal to branch on next, or [`None`] when no candidate exists.
    fn select_literal(&mut self, formula: &Formula) -> Option<Literal>;
}
