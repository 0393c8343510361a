//! Centralized configuration for the soundboard library.
//!
//! Constants for persisted index files and recognized audio containers.

/// Persisted index configuration.
pub struct IndexConfig;

impl IndexConfig {
    /// Extension of persisted index documents.
    pub const FILE_EXTENSION: &'static str = "json";
    /// Environment variable overriding the directory persisted indexes live in.
    pub const INDEX_DIR_ENV: &'static str = "SOUNDBOARD_INDEX_DIR";
}

/// Audio container configuration.
pub struct AudioConfig;

impl AudioConfig {
    /// Extensions carrying ID3 tags.
    pub const ID3_EXTENSIONS: &'static [&'static str] = &["mp3"];
    /// Extensions carrying Vorbis comments.
    pub const VORBIS_EXTENSIONS: &'static [&'static str] = &["ogg"];
}
