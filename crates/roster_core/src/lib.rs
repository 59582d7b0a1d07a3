//! # roster_core - Shady Sluggers Roster Management
//!
//! Ordered batting lineup with per-player fielding positions and alternates,
//! persisted to a single JSON document and mutated through validated
//! operations.
//!
//! ## Features
//! - Add / remove / reorder players with duplicate-name protection
//! - Position and alternate edits that never disturb the batting order
//! - Whole-document atomic persistence after every successful mutation
//! - Self-healing load for documents with missing attribute entries

pub mod error;
pub mod models;
pub mod roster;
pub mod store;

// Re-export the UI-facing surface
pub use error::{Result, RosterError};
pub use models::{Player, Position, Roster};
pub use roster::RosterModel;
pub use store::{RosterStore, StoreError, DEFAULT_ROSTER_FILE};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
