//! # Verdict
//! Verdict is a DPLL satisfiability solver over CNF formulas with a pluggable family of
//! branching heuristics (DLIS, DLCS, MOM, BOHM, and a shortest-clause-majority rule).
//!
//! The engine combines unit propagation and pure-literal elimination with two-way splitting
//! on a heuristically chosen literal. Branches are explored on independent deep copies of the
//! formula, so backtracking never has to undo anything. The formula keeps its clause-length
//! buckets and per-literal occurrence index consistent across every assignment, which is what
//! the heuristics query to score candidate literals.
//!
//! # Using Verdict
//! A formula is built from parsed clauses and handed to the solver together with a heuristic:
//! ```rust
//! use verdict_core::Clause;
//! use verdict_core::DpllSolver;
//! use verdict_core::Formula;
//! use verdict_core::Literal;
//! use verdict_core::SatisfactionResult;
//! use verdict_core::branching::Dlis;
//!
//! let clause = |codes: &[i32]| {
//!     codes
//!         .iter()
//!         .map(|&code| Literal::from_code(code).unwrap())
//!         .collect::<Clause>()
//! };
//!
//! // (x1 ∨ ¬x2) ∧ (x2)
//! let formula = Formula::new([clause(&[1, -2]), clause(&[2])]);
//!
//! let mut solver = DpllSolver::default();
//! match solver.solve(formula, &mut Dlis).unwrap() {
//!     SatisfactionResult::Satisfiable(solution) => {
//!         assert_eq!(Some(true), solution.value(1));
//!         assert_eq!(Some(true), solution.value(2));
//!     }
//!     SatisfactionResult::Unsatisfiable => panic!("the formula is satisfiable"),
//! }
//! ```
//!
//! The heuristics all implement [`branching::BranchingHeuristic`]; [`branching::BranchingStrategy`]
//! names the built-in family for configuration surfaces such as command-line parsers.

pub mod asserts;
pub(crate) mod basic_types;
pub mod branching;
pub(crate) mod engine;
pub mod statistics;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
//
// Example:
// `use verdict_core::Formula;`
// vs.
// `use verdict_core::api::Formula;`
mod api;

pub use api::*;
