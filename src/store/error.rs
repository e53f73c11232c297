// Passfile — Store error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store image is {actual} bytes, expected {expected} — refusing to load")]
    Corrupt { expected: usize, actual: usize },

    #[error("no free slot — table is at capacity")]
    TableFull,

    #[error("slot index {index} out of range (capacity {capacity})")]
    OutOfRange { index: usize, capacity: usize },

    #[error("user not found: {0}")]
    NotFound(String),
}
