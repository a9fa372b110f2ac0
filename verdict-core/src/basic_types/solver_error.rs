use thiserror::Error;

use crate::basic_types::Literal;

/// Errors raised by the engine. Both kinds indicate a violated invariant rather than a
/// recoverable runtime condition; they abort the offending solve call and are never retried.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    /// An assignment was requested for a literal that does not occur in the formula. Silently
    /// ignoring such a call would mask caller bugs and corrupt the search invisibly, so the
    /// formula refuses it.
    #[error("literal {0} does not occur in the formula")]
    UnknownLiteral(Literal),

    /// A heuristic was consulted but found no candidate literal. The solver only consults
    /// heuristics on non-terminal formulas, so this is unreachable short of a programming
    /// error in the heuristic itself.
    #[error("the {0} heuristic found no branch literal in a non-terminal formula")]
    DegenerateHeuristic(&'static str),
}
