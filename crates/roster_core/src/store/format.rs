use super::error::StoreError;
use crate::models::{Position, Roster};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// On-disk roster document. The three field names are the wire format and
/// must not change: an absent file is equivalent to the empty document.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RosterDocument {
    /// Ordered list of player names (the batting order)
    pub roster: Vec<String>,

    /// Player name -> fielding position
    pub positions: BTreeMap<String, Position>,

    /// Player name -> alternate free text ("" = none)
    pub alternates: BTreeMap<String, String>,
}

impl RosterDocument {
    pub fn validate(&self) -> Result<(), StoreError> {
        let mut seen = HashSet::new();
        for name in &self.roster {
            if !seen.insert(name) {
                return Err(StoreError::Corrupted(format!("duplicate player name: {}", name)));
            }
        }
        Ok(())
    }
}

impl From<&Roster> for RosterDocument {
    fn from(roster: &Roster) -> Self {
        Self {
            roster: roster.order.clone(),
            positions: roster.positions.clone(),
            alternates: roster.alternates.clone(),
        }
    }
}

impl From<RosterDocument> for Roster {
    fn from(doc: RosterDocument) -> Self {
        Self { order: doc.roster, positions: doc.positions, alternates: doc.alternates }
    }
}

/// Serialize a roster document to the bytes written to disk.
pub fn serialize_document(doc: &RosterDocument) -> Result<Vec<u8>, StoreError> {
    // Validate before serialization
    doc.validate()?;

    serde_json::to_vec_pretty(doc).map_err(StoreError::Serialization)
}

/// Deserialize and validate a roster document read from disk.
pub fn deserialize_document(bytes: &[u8]) -> Result<RosterDocument, StoreError> {
    let doc: RosterDocument = serde_json::from_slice(bytes).map_err(StoreError::Malformed)?;
    doc.validate()?;
    Ok(doc)
}
