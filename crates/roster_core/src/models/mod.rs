//! Core roster data types.
//!
//! - `Position`: the nine fixed softball fielding positions
//! - `Player`: one ordered roster row as the UI renders it
//! - `Roster`: the batting order plus per-player attribute maps

pub mod player;
pub mod roster;

pub use player::{Player, Position};
pub use roster::Roster;
