//! ID3v2 tag reading for MP3 files.

use super::{TagField, TagMap, TagReadError};
use id3::{Content, ErrorKind, Tag};
use std::path::Path;

/// Separator between values of a multi-valued ID3v2.4 text frame.
const TEXT_VALUE_SEPARATOR: char = '\0';

/// Read the searchable ID3 frames of `path`.
///
/// A file without an ID3v2 header yields [`TagReadError::NoHeader`].
pub(super) fn read_id3_tags(path: &Path) -> Result<TagMap, TagReadError> {
    let tag = match Tag::read_from_path(path) {
        Ok(tag) => tag,
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => return Err(TagReadError::NoHeader),
        Err(e) => return Err(TagReadError::Malformed(e.to_string())),
    };

    let mut tags = TagMap::new();
    for frame in tag.frames() {
        let Some(field) = TagField::from_id3_frame(frame.id()) else {
            continue;
        };
        match frame.content() {
            Content::Text(text) => {
                for value in text.split(TEXT_VALUE_SEPARATOR) {
                    tags.push(field, value);
                }
            }
            Content::Comment(comment) => tags.push(field, comment.text.as_str()),
            _ => {}
        }
    }

    Ok(tags)
}
