use log::debug;

use crate::api::SatisfactionResult;
use crate::basic_types::Literal;
use crate::basic_types::Solution;
use crate::basic_types::SolverError;
use crate::branching::BranchingHeuristic;
use crate::engine::Formula;
use crate::engine::SolverStatistics;
use crate::verdict_assert_moderate;

/// The DPLL backtracking procedure: unit propagation and pure-literal elimination applied to
/// exhaustion, then a two-way split on a heuristically chosen literal.
///
/// Unit and pure literals take strict precedence over branching and are re-checked after every
/// assignment. Each branch of a split explores its own deep copy of the formula, so two branches
/// never share mutable state and backtracking is a matter of dropping the copy.
///
/// Termination is guaranteed: every recursive call strictly shrinks either the number of live
/// clauses or the number of unassigned variables, and recursion depth is bounded by the number
/// of distinct variables in the input.
#[derive(Debug, Default)]
pub struct DpllSolver {
    statistics: SolverStatistics,
}

impl DpllSolver {
    pub fn new() -> DpllSolver {
        DpllSolver::default()
    }

    pub fn statistics(&self) -> SolverStatistics {
        self.statistics
    }

    /// Resets the statistics counters. Call between independent runs when reusing a solver.
    pub fn reset_statistics(&mut self) {
        self.statistics.reset();
    }

    /// Writes the statistics counters through the configured statistic logger.
    pub fn log_statistics(&self) {
        self.statistics.log();
    }

    /// Decides satisfiability of `formula`, consulting `heuristic` whenever no unit or pure
    /// literal forces an assignment.
    ///
    /// On a satisfiable formula the returned [`Solution`] covers every variable of the input:
    /// the literals committed along the accepted path determine their variables, the rest are
    /// unconstrained and default to true.
    ///
    /// Errors are programming errors (see [`SolverError`]), not properties of the formula; they
    /// abort this call only.
    pub fn solve<H: BranchingHeuristic + ?Sized>(
        &mut self,
        formula: Formula,
        heuristic: &mut H,
    ) -> Result<SatisfactionResult, SolverError> {
        let variables: Vec<u32> = formula.variables().collect();
        let mut trail = Vec::new();

        let satisfiable = self.search(formula, heuristic, &mut trail)?;
        debug!(
            "search finished after {} recursive calls",
            self.statistics.num_recursive_calls
        );

        if satisfiable {
            Ok(SatisfactionResult::Satisfiable(Solution::from_trail(
                &trail, variables,
            )))
        } else {
            Ok(SatisfactionResult::Unsatisfiable)
        }
    }

    /// One node of the search tree. `trail` holds the literals committed along the path from
    /// the root; a frame that fails pops exactly the literals it pushed.
    fn search<H: BranchingHeuristic + ?Sized>(
        &mut self,
        mut formula: Formula,
        heuristic: &mut H,
        trail: &mut Vec<Literal>,
    ) -> Result<bool, SolverError> {
        self.statistics.num_recursive_calls += 1;

        if formula.is_satisfied() {
            return Ok(true);
        }
        if formula.has_empty_clause() {
            return Ok(false);
        }

        // Forced assignments preempt branching and are re-checked after every assignment by
        // recursing, units before pures.
        if let Some(unit) = formula.first_unit_literal() {
            return self.commit_and_recurse(formula, unit, heuristic, trail);
        }
        if let Some(pure) = formula.first_pure_literal() {
            return self.commit_and_recurse(formula, pure, heuristic, trail);
        }

        let decision = heuristic
            .select_literal(&formula)
            .ok_or(SolverError::DegenerateHeuristic(heuristic.name()))?;
        // No unit or pure literal exists here, so both polarities of the decision variable
        // occur and the second branch below can always be committed.
        verdict_assert_moderate!(
            formula.occurrence_count(decision) > 0 && formula.occurrence_count(!decision) > 0,
            "heuristics select literals that are live in both polarities"
        );

        let mut first_branch = formula.clone();
        first_branch.assign(decision)?;
        trail.push(decision);
        if self.search(first_branch, heuristic, trail)? {
            return Ok(true);
        }
        let _ = trail.pop();

        formula.assign(!decision)?;
        trail.push(!decision);
        let satisfiable = self.search(formula, heuristic, trail)?;
        if !satisfiable {
            let _ = trail.pop();
        }
        Ok(satisfiable)
    }

    fn commit_and_recurse<H: BranchingHeuristic + ?Sized>(
        &mut self,
        mut formula: Formula,
        literal: Literal,
        heuristic: &mut H,
        trail: &mut Vec<Literal>,
    ) -> Result<bool, SolverError> {
        formula.assign(literal)?;
        trail.push(literal);
        let satisfiable = self.search(formula, heuristic, trail)?;
        if !satisfiable {
            let _ = trail.pop();
        }
        Ok(satisfiable)
    }
}
