//! Searchable index of a directory's audio files.
//!
//! This module provides:
//! - [`SoundIndex`], the file name → searchable strings mapping
//! - [`IndexBuilder`], which lists a directory and extracts tags
//! - [`IndexStore`], which persists an index under a hash of its directory path

mod atomic;
mod builder;
mod store;

pub use builder::IndexBuilder;
pub use store::{index_key, IndexStore};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One file and its searchable strings.
///
/// The file name is always the first searchable string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    file_name: String,
    searchable: Vec<String>,
}

impl IndexEntry {
    /// Create an entry whose only searchable string is the file name.
    pub fn new(file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        Self {
            searchable: vec![file_name.clone()],
            file_name,
        }
    }

    /// Append searchable values after the file name.
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.searchable.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.searchable.push(value.into());
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn searchable(&self) -> &[String] {
        &self.searchable
    }
}

/// File name → searchable strings for every file of one directory.
///
/// Serializes as a plain JSON object keyed by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoundIndex {
    entries: BTreeMap<String, Vec<String>>,
}

impl SoundIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `entry`, replacing any previous entry for the same file.
    pub fn insert(&mut self, entry: IndexEntry) {
        self.entries.insert(entry.file_name, entry.searchable);
    }

    /// Searchable strings of `file_name`.
    pub fn get(&self, file_name: &str) -> Option<&[String]> {
        self.entries.get(file_name).map(Vec::as_slice)
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.entries.contains_key(file_name)
    }

    /// Iterate `(file name, searchable strings)` pairs ordered by file name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, searchable)| (name.as_str(), searchable.as_slice()))
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that every file's first searchable string is its own name.
    ///
    /// Only a document edited outside this crate can fail the check.
    pub fn validate(&self) -> std::result::Result<(), String> {
        for (name, searchable) in &self.entries {
            match searchable.first() {
                Some(first) if first == name => {}
                Some(first) => {
                    return Err(format!(
                        "entry {:?} starts with {:?} instead of its file name",
                        name, first
                    ))
                }
                None => return Err(format!("entry {:?} has no searchable strings", name)),
            }
        }
        Ok(())
    }
}

impl FromIterator<IndexEntry> for SoundIndex {
    fn from_iter<I: IntoIterator<Item = IndexEntry>>(iter: I) -> Self {
        let mut index = SoundIndex::new();
        for entry in iter {
            index.insert(entry);
        }
        index
    }
}
