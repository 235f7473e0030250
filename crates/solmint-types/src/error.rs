use thiserror::Error;

/// Errors produced by type-level validation and parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("seller fee {0} exceeds the maximum of 10000 basis points")]
    FeeOutOfRange(u16),

    #[error("metadata uri must not be empty")]
    EmptyUri,
}
