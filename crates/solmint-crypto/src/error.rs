use thiserror::Error;

/// Errors from keypair handling and the on-disk keystore.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid secret key encoding: {0}")]
    InvalidEncoding(String),

    #[error("invalid secret key length: expected 32 bytes, got {0}")]
    InvalidLength(usize),

    #[error("keystore I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type KeyResult<T> = Result<T, KeyError>;
