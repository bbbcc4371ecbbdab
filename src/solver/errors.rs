use thiserror::Error;

use crate::model::ModelError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("No candidate could be formed from the given numbers")]
    NoSolution,
    #[error("Invalid candidate: {0}")]
    InvalidCandidate(String),
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
    #[error("Input error: {0}")]
    Model(#[from] ModelError),
}
