//! Index construction from a directory listing.

use crate::index::{IndexEntry, SoundIndex};
use crate::report::{BuildReporter, TracingReporter};
use crate::tags::{AudioKind, ContainerTagReader, TagField, TagReadError, TagReader};
use crate::{Result, SoundboardError};
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;
use walkdir::WalkDir;

/// Builds a [`SoundIndex`] from the immediate files of a directory.
///
/// Every file is indexed by name. Files with a known audio extension also
/// contribute the values of their searchable tag fields. A missing metadata
/// header is reported and tolerated; any other decoding failure aborts the
/// build.
///
/// # Example
///
/// ```rust,ignore
/// use soundboard_core::IndexBuilder;
///
/// let index = IndexBuilder::new().build("/srv/sounds/")?;
/// println!("Indexed {} files", index.len());
/// ```
pub struct IndexBuilder<R = ContainerTagReader, P = TracingReporter> {
    reader: R,
    reporter: P,
    fields: Vec<TagField>,
}

impl IndexBuilder {
    /// Builder using the container decoders and `tracing` reporting.
    pub fn new() -> Self {
        Self {
            reader: ContainerTagReader,
            reporter: TracingReporter,
            fields: TagField::ALL.to_vec(),
        }
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TagReader, P: BuildReporter> IndexBuilder<R, P> {
    /// Replace the tag reader.
    pub fn with_reader<R2: TagReader>(self, reader: R2) -> IndexBuilder<R2, P> {
        IndexBuilder {
            reader,
            reporter: self.reporter,
            fields: self.fields,
        }
    }

    /// Replace the reporter receiving per-file events.
    pub fn with_reporter<P2: BuildReporter>(self, reporter: P2) -> IndexBuilder<R, P2> {
        IndexBuilder {
            reader: self.reader,
            reporter,
            fields: self.fields,
        }
    }

    /// Restrict the tag fields that become searchable.
    pub fn with_fields(mut self, fields: &[TagField]) -> Self {
        self.fields = fields.to_vec();
        self
    }

    /// Index every file directly inside `directory`.
    ///
    /// Subdirectories are neither indexed nor descended into. A `directory`
    /// that is missing or is not a directory fails with
    /// [`SoundboardError::DirectoryRead`].
    pub fn build(&self, directory: impl AsRef<Path>) -> Result<SoundIndex> {
        let directory = directory.as_ref();
        let directory_read = |source: io::Error| SoundboardError::DirectoryRead {
            path: directory.to_path_buf(),
            source,
        };

        // WalkDir yields a file root as its only entry, which min_depth drops.
        let metadata = fs::metadata(directory).map_err(directory_read)?;
        if !metadata.is_dir() {
            return Err(directory_read(io::Error::other("not a directory")));
        }

        let mut index = SoundIndex::new();

        let listing = WalkDir::new(directory)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in listing {
            let entry = entry.map_err(|e| directory_read(e.into()))?;
            // Path::is_dir follows symlinks, so a link to a directory is skipped
            // while a dangling link is still indexed by name.
            if entry.path().is_dir() {
                continue;
            }

            // A lossy name would not match any file on disk.
            let Some(file_name) = entry.file_name().to_str() else {
                self.reporter.non_utf8_name(entry.path());
                continue;
            };
            index.insert(self.index_file(entry.path(), file_name.to_string())?);
        }

        info!("Indexed {} files in {}", index.len(), directory.display());
        Ok(index)
    }

    fn index_file(&self, path: &Path, file_name: String) -> Result<IndexEntry> {
        let mut entry = IndexEntry::new(file_name);

        let Some(kind) = AudioKind::from_path(path) else {
            self.reporter.unsupported_extension(path);
            return Ok(entry);
        };

        let tags = match self.reader.read_tags(path, kind) {
            Ok(tags) => tags,
            Err(TagReadError::NoHeader) => {
                self.reporter.missing_metadata(path);
                return Ok(entry);
            }
            Err(TagReadError::Malformed(message)) => {
                return Err(SoundboardError::TagRead {
                    file: path.to_path_buf(),
                    message,
                })
            }
        };

        let mut tag_values = 0;
        for (field, values) in tags.iter() {
            if !self.fields.contains(&field) {
                continue;
            }
            for value in values {
                entry.push(value.as_str());
                tag_values += 1;
            }
        }

        self.reporter.indexed(path, tag_values);
        Ok(entry)
    }
}
