use crate::store::StoreError;
use thiserror::Error;

/// Operation failures surfaced to the presentation layer.
///
/// `DuplicateName` and `NotFound` are user-input errors and should render as
/// inline validation messages; `Store` wraps persistence failures (see
/// [`StoreError::is_recoverable`] for how to treat those).
#[derive(Error, Debug)]
pub enum RosterError {
    /// Add with a name that is already on the roster, or with an empty name.
    #[error("Invalid player name {name:?}: empty or already on the roster")]
    DuplicateName { name: String },

    #[error("No player named {name:?} on the roster")]
    NotFound { name: String },

    #[error("Index {index} out of range for a roster of {len} players")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, RosterError>;
