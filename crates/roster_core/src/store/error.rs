use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read roster file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write roster file: {0}")]
    Write(#[source] std::io::Error),

    #[error("Malformed roster file: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Failed to serialize roster: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Corrupted roster document: {0}")]
    Corrupted(String),
}

impl StoreError {
    /// Whether the on-disk roster is still intact after this error.
    ///
    /// Write-class failures leave the previous document in place (saves are
    /// atomic), so the caller may surface the error and continue from the
    /// pre-mutation state. A malformed or corrupted document is fatal at
    /// startup: falling back to an empty roster would silently discard data.
    pub fn is_recoverable(&self) -> bool {
        match self {
            StoreError::Read(_) => true,
            StoreError::Write(_) | StoreError::Serialization(_) => true,
            StoreError::Malformed(_) | StoreError::Corrupted(_) => false,
        }
    }
}
