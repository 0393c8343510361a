//! Vorbis comment reading for Ogg Vorbis files.

use super::{TagField, TagMap, TagReadError};
use lofty::config::ParseOptions;
use lofty::file::AudioFile;
use lofty::ogg::VorbisFile;
use std::fs::File;
use std::path::Path;

/// Read the searchable Vorbis comments of `path`.
///
/// Every Ogg Vorbis stream carries a comment header, so a decodable file
/// always succeeds; one without searchable comments yields an empty map.
pub(super) fn read_vorbis_comments(path: &Path) -> Result<TagMap, TagReadError> {
    let mut file = File::open(path).map_err(|e| TagReadError::Malformed(e.to_string()))?;
    let vorbis = VorbisFile::read_from(&mut file, ParseOptions::new())
        .map_err(|e| TagReadError::Malformed(e.to_string()))?;

    Ok(vorbis
        .vorbis_comments()
        .items()
        .filter_map(|(key, value)| {
            TagField::from_vorbis_key(key).map(|field| (field, value.to_string()))
        })
        .collect())
}
