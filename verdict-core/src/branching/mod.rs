//! The branching heuristics consulted by the solver when no unit or pure literal forces an
//! assignment.
//!
//! Every heuristic implements [`BranchingHeuristic`]: given the current [`Formula`] it returns
//! the literal to split on, under one uniform polarity convention — **the returned literal is
//! tried true first**. Where a scoring rule is symmetric in a variable's two polarities, the
//! orientation goes to the polarity with the higher relevant occurrence count, ties to the
//! positive polarity.
//!
//! All heuristics are deterministic: candidates are visited in a fixed iteration order (derived
//! from the formula's ordered indices) and ties keep the first candidate encountered, so
//! structurally equal formulas always produce the same branch literal.
//!
//! [`Formula`]: crate::Formula

mod bohm;
mod branching_heuristic;
mod dlcs;
mod dlis;
mod mom;
mod shortest_clause_majority;
mod strategy;

pub use bohm::Bohm;
pub use branching_heuristic::BranchingHeuristic;
pub use dlcs::Dlcs;
pub use dlis::Dlis;
pub use mom::Mom;
pub use shortest_clause_majority::ShortestClauseMajority;
pub use strategy::BranchingStrategy;
