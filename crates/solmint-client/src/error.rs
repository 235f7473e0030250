use std::path::PathBuf;

use solmint_types::{Address, TypeError};
use thiserror::Error;

/// Errors surfaced by the client layer.
///
/// Every variant propagates unchanged to the workflow driver; there is
/// no retry or recovery below the top level.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to read asset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage upload failed: {0}")]
    Upload(String),

    #[error("transaction failed: {0}")]
    Transaction(String),

    #[error("no token found at address {0}")]
    NotFound(Address),

    #[error("invalid record: {0}")]
    InvalidRecord(#[from] TypeError),

    #[error("config error: {0}")]
    Config(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
