use std::fmt::Display;

use colouring_solver::core::parsers::GraphParseError;
use thiserror::Error;

pub(crate) type SolverResult<T> = Result<T, SolverError>;

#[derive(Error, Debug)]
pub(crate) enum SolverError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The file {0} is not supported.")]
    InvalidInstanceFile(String),
    #[error("The instance file was invalid, more details: {0}")]
    InvalidInstance(#[from] GraphParseError),
}

impl SolverError {
    pub(crate) fn invalid_instance(path: impl Display) -> Self {
        Self::InvalidInstanceFile(format!("{path}"))
    }
}
