//! Audio tag extraction.
//!
//! This module provides:
//! - The [`TagField`] allow-list of searchable tag fields
//! - [`TagMap`], the ordered field → values mapping a reader returns
//! - The [`TagReader`] seam and its production implementation
//!   [`ContainerTagReader`] (ID3 for MP3, Vorbis comments for OGG)

mod mp3;
mod ogg;

use crate::config::AudioConfig;
use std::path::Path;
use thiserror::Error;

/// Tag fields whose values become searchable strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagField {
    Title,
    Album,
    Artist,
    AlbumArtist,
    Genre,
    Creator,
    Description,
    Comment,
}

impl TagField {
    /// Every searchable field.
    pub const ALL: [TagField; 8] = [
        TagField::Title,
        TagField::Album,
        TagField::Artist,
        TagField::AlbumArtist,
        TagField::Genre,
        TagField::Creator,
        TagField::Description,
        TagField::Comment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TagField::Title => "title",
            TagField::Album => "album",
            TagField::Artist => "artist",
            TagField::AlbumArtist => "albumartist",
            TagField::Genre => "genre",
            TagField::Creator => "creator",
            TagField::Description => "description",
            TagField::Comment => "comment",
        }
    }

    /// Map a Vorbis comment key (case-insensitive) to a field.
    pub fn from_vorbis_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| key.eq_ignore_ascii_case(field.as_str()))
    }

    /// Map an ID3v2 frame id to a field.
    ///
    /// ID3v2.2 three-letter ids are accepted alongside their v2.3/v2.4 forms.
    pub fn from_id3_frame(id: &str) -> Option<Self> {
        match id {
            "TIT2" | "TT2" => Some(TagField::Title),
            "TALB" | "TAL" => Some(TagField::Album),
            "TPE1" | "TP1" => Some(TagField::Artist),
            "TPE2" | "TP2" => Some(TagField::AlbumArtist),
            "TCON" | "TCO" => Some(TagField::Genre),
            "COMM" | "COM" => Some(TagField::Comment),
            _ => None,
        }
    }
}

impl std::fmt::Display for TagField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field → values mapping in extraction order.
///
/// A field keeps the position of its first occurrence; later values for the
/// same field are appended to that entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap {
    entries: Vec<(TagField, Vec<String>)>,
}

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to `field`.
    pub fn push(&mut self, field: TagField, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((field, vec![value])),
        }
    }

    /// Values stored for `field`, if any.
    pub fn get(&self, field: TagField) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, values)| values.as_slice())
    }

    /// Iterate fields and their values in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = (TagField, &[String])> {
        self.entries
            .iter()
            .map(|(field, values)| (*field, values.as_slice()))
    }

    /// Number of distinct fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of values across all fields.
    pub fn value_count(&self) -> usize {
        self.entries.iter().map(|(_, values)| values.len()).sum()
    }
}

impl FromIterator<(TagField, String)> for TagMap {
    fn from_iter<I: IntoIterator<Item = (TagField, String)>>(iter: I) -> Self {
        let mut tags = TagMap::new();
        for (field, value) in iter {
            tags.push(field, value);
        }
        tags
    }
}

/// Container families with a tag decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioKind {
    /// MPEG audio carrying ID3v2 tags
    Mp3,
    /// Ogg Vorbis carrying Vorbis comments
    Ogg,
}

impl AudioKind {
    /// Classify a file by its extension (case-insensitive).
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        if AudioConfig::ID3_EXTENSIONS.contains(&ext.as_str()) {
            Some(AudioKind::Mp3)
        } else if AudioConfig::VORBIS_EXTENSIONS.contains(&ext.as_str()) {
            Some(AudioKind::Ogg)
        } else {
            None
        }
    }
}

/// Why a tag reader produced no tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagReadError {
    /// The container carries no metadata header at all.
    #[error("no metadata header")]
    NoHeader,

    /// The container or its metadata could not be decoded.
    #[error("{0}")]
    Malformed(String),
}

/// Reads searchable tags out of an audio file.
pub trait TagReader {
    fn read_tags(&self, path: &Path, kind: AudioKind) -> Result<TagMap, TagReadError>;
}

impl<T: TagReader + ?Sized> TagReader for &T {
    fn read_tags(&self, path: &Path, kind: AudioKind) -> Result<TagMap, TagReadError> {
        (**self).read_tags(path, kind)
    }
}

/// Tag reader backed by real container decoders.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerTagReader;

impl TagReader for ContainerTagReader {
    fn read_tags(&self, path: &Path, kind: AudioKind) -> Result<TagMap, TagReadError> {
        match kind {
            AudioKind::Mp3 => mp3::read_id3_tags(path),
            AudioKind::Ogg => ogg::read_vorbis_comments(path),
        }
    }
}
