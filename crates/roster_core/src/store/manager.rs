use super::error::StoreError;
use super::format::{deserialize_document, serialize_document, RosterDocument};
use crate::models::Roster;

use std::fs::{create_dir_all, rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Backing file name used when the caller does not pick one.
pub const DEFAULT_ROSTER_FILE: &str = "roster_data.json";

/// Durable read/write of the full roster document as a single unit.
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads the backing file. An absent file is an empty roster; a present
    /// but unparseable file is a loud error, never a silent empty roster.
    pub fn load(&self) -> Result<Roster, StoreError> {
        if !self.path.exists() {
            log::debug!("No roster file at {:?}, starting empty", self.path);
            return Ok(Roster::new());
        }

        let mut file = File::open(&self.path).map_err(StoreError::Read)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data).map_err(StoreError::Read)?;

        let doc = deserialize_document(&data)?;

        log::debug!("Loaded {} bytes from {:?}", data.len(), self.path);
        Ok(Roster::from(doc))
    }

    /// Rewrites the whole document. Atomic from the caller's point of view:
    /// the old content is never observably half-overwritten.
    pub fn save(&self, roster: &Roster) -> Result<(), StoreError> {
        // Ensure the containing directory exists (no-op for bare file names)
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent).map_err(StoreError::Write)?;
            }
        }

        let data = serialize_document(&RosterDocument::from(roster))?;

        // Atomic save: write to temp file, then rename
        let temp_path = self.path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path).map_err(StoreError::Write)?;
            file.write_all(&data).map_err(StoreError::Write)?;
            file.flush().map_err(StoreError::Write)?;

            // sync_all ensures data is written to disk (portable fsync)
            file.sync_all().map_err(StoreError::Write)?;
        }

        // Atomic rename
        rename(&temp_path, &self.path).map_err(StoreError::Write)?;

        log::debug!("Saved {} bytes to {:?}", data.len(), self.path);
        Ok(())
    }
}
