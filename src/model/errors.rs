use thiserror::Error;

/// Errors that can occur while building the number bag
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("At least one number is required")]
    EmptyNumbers,
    #[error("Too many numbers: {count} given, at most {max} supported")]
    TooManyNumbers { count: usize, max: usize },
    #[error("Not an integer: {0}")]
    InvalidNumber(String),
}
