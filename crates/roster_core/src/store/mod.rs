// Roster persistence: one JSON document, rewritten whole on every save.

pub mod error;
pub mod format;
pub mod manager;

pub use error::StoreError;
pub use format::{deserialize_document, serialize_document, RosterDocument};
pub use manager::{RosterStore, DEFAULT_ROSTER_FILE};
