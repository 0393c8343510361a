//! Soundboard Core - Headless library for tag-indexed fuzzy search of audio files.
//!
//! A directory's immediate files are indexed by name plus the values of their
//! searchable tags (ID3 for MP3, Vorbis comments for OGG). An index can be
//! persisted under a hash of the directory path and reused by later runs. A
//! query is scored against every file and the best-matching file name wins.
//!
//! # Example
//!
//! ```rust,ignore
//! use soundboard_core::{find_best, IndexBuilder, IndexStore};
//!
//! fn main() -> soundboard_core::Result<()> {
//!     let index = IndexBuilder::new().build("/srv/sounds/")?;
//!
//!     // Reuse it on the next run
//!     IndexStore::from_env().persist("/srv/sounds/", &index)?;
//!
//!     let (file_name, candidates) = find_best("air horn", &index)?;
//!     println!("{} (out of {})", file_name, candidates);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod report;
pub mod search;
pub mod tags;

// Re-export commonly used types
pub use config::{AudioConfig, IndexConfig};
pub use error::{Result, SoundboardError};
pub use index::{index_key, IndexBuilder, IndexEntry, IndexStore, SoundIndex};
pub use report::{BuildReporter, TracingReporter};
pub use search::{
    find_best, rank, BestMatch, PartialRatio, RankedResult, Ranker, ScoredCandidate, Similarity,
};
pub use tags::{AudioKind, ContainerTagReader, TagField, TagMap, TagReadError, TagReader};

/// Build the index of `directory` with the default tag reader and reporter.
pub fn build_index(directory: impl AsRef<std::path::Path>) -> Result<SoundIndex> {
    IndexBuilder::new().build(directory)
}
