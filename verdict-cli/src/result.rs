use thiserror::Error;
use verdict_core::SolverError;

use crate::parsers::dimacs::DimacsParseError;

pub(crate) type VerdictResult<T> = Result<T, VerdictError>;

#[derive(Error, Debug)]
pub(crate) enum VerdictError {
    #[error("IO error, more details: {0}")]
    Io(#[from] std::io::Error),
    #[error("The dimacs file was invalid, more details: {0}")]
    InvalidDimacs(#[from] DimacsParseError),
    #[error("The solver failed, more details: {0}")]
    Solver(#[from] SolverError),
}
