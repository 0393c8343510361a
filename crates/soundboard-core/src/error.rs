//! Error types for the soundboard library.
//!
//! Every failure that can reach a caller is a variant of [`SoundboardError`].
//! Per-file tag problems that are recovered locally (unknown extension,
//! missing metadata header) never show up here; see
//! [`crate::index::IndexBuilder`].

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the soundboard library.
#[derive(Debug, Error)]
pub enum SoundboardError {
    // File system errors
    #[error("Failed to read directory {path:?}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Tag extraction errors
    #[error("Failed to read tags from {file:?}: {message}")]
    TagRead { file: PathBuf, message: String },

    // Persisted index errors
    #[error("No index file for {directory:?} (expected at {location:?})")]
    IndexNotFound { directory: String, location: PathBuf },

    #[error("Corrupt index file {location:?}: {message}")]
    CorruptIndex {
        location: PathBuf,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Search errors
    #[error("No candidates to search: the index is empty")]
    NoCandidates,
}

/// Result type alias for soundboard operations.
pub type Result<T> = std::result::Result<T, SoundboardError>;

impl SoundboardError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        SoundboardError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Process exit code for this error.
    ///
    /// - 3: I/O failure (directory listing, index write)
    /// - 4: no persisted index for the requested path
    /// - 5: persisted index is unreadable
    /// - 6: search against an empty index
    /// - 7: an audio file's tags could not be decoded
    ///
    /// Codes 1 and 2 are left to the runtime and the argument parser.
    pub fn exit_code(&self) -> u8 {
        match self {
            SoundboardError::DirectoryRead { .. } | SoundboardError::Io { .. } => 3,
            SoundboardError::IndexNotFound { .. } => 4,
            SoundboardError::CorruptIndex { .. } | SoundboardError::Json { .. } => 5,
            SoundboardError::NoCandidates => 6,
            SoundboardError::TagRead { .. } => 7,
        }
    }
}
