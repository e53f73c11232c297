// Passfile — Top-level error types
//
// Aggregates errors from the store module into a single error enum for the
// application boundary.

use thiserror::Error;

/// Top-level error type for all Passfile operations.
#[derive(Debug, Error)]
pub enum PassfileError {
    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PassfileError>;
