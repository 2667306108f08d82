use thiserror::Error;

/// Errors raised while reading or writing the persisted session token.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
