//! Persisted indexes keyed by source directory.
//!
//! An index for directory string `d` lives at `<root>/<hex(sha256(d))>.json`.
//! The key is the exact string: `/music` and `/music/` are different indexes.
//! Nothing locks the file; concurrent rebuilds of one key race and the last
//! rename wins.

use crate::config::IndexConfig;
use crate::index::atomic::{atomic_read_json, atomic_write_json};
use crate::index::SoundIndex;
use crate::{Result, SoundboardError};
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use tracing::debug;

/// Hex-encoded SHA-256 of a directory string.
pub fn index_key(directory: &str) -> String {
    hex::encode(Sha256::digest(directory.as_bytes()))
}

/// Reads and writes persisted indexes under one root directory.
#[derive(Debug, Clone)]
pub struct IndexStore {
    root: PathBuf,
}

impl IndexStore {
    /// Store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at `$SOUNDBOARD_INDEX_DIR`, or the platform temp dir.
    pub fn from_env() -> Self {
        match std::env::var_os(IndexConfig::INDEX_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::new(std::env::temp_dir()),
        }
    }

    /// Location of the persisted index for `directory`.
    pub fn location_for(&self, directory: &str) -> PathBuf {
        self.root.join(format!(
            "{}.{}",
            index_key(directory),
            IndexConfig::FILE_EXTENSION
        ))
    }

    /// Write `index` for `directory`, replacing any earlier one.
    ///
    /// Returns the written location.
    pub fn persist(&self, directory: &str, index: &SoundIndex) -> Result<PathBuf> {
        let location = self.location_for(directory);
        atomic_write_json(&location, index)?;
        debug!(
            "Persisted index of {} files for {:?} to {}",
            index.len(),
            directory,
            location.display()
        );
        Ok(location)
    }

    /// Read the index persisted for `directory`.
    pub fn load(&self, directory: &str) -> Result<SoundIndex> {
        let location = self.location_for(directory);
        let index: SoundIndex = atomic_read_json(&location)?.ok_or_else(|| {
            SoundboardError::IndexNotFound {
                directory: directory.to_string(),
                location: location.clone(),
            }
        })?;

        index
            .validate()
            .map_err(|message| SoundboardError::CorruptIndex {
                location: location.clone(),
                message,
                source: None,
            })?;

        debug!(
            "Loaded index of {} files for {:?} from {}",
            index.len(),
            directory,
            location.display()
        );
        Ok(index)
    }
}
