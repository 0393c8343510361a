//! Reporting of per-file outcomes during an index build.
//!
//! The [`IndexBuilder`](crate::index::IndexBuilder) never logs directly; it
//! hands each outcome to a [`BuildReporter`]. [`TracingReporter`] is the
//! default and routes events to `tracing` at the matching severity.

use std::path::Path;
use tracing::{debug, info, warn};

/// Receives per-file events from an index build.
pub trait BuildReporter {
    /// The file's extension has no tag decoder; it is indexed by name only.
    fn unsupported_extension(&self, path: &Path);

    /// The file has no metadata header; it is indexed by name only.
    fn missing_metadata(&self, path: &Path);

    /// The file was indexed with `tag_values` searchable tag values.
    fn indexed(&self, path: &Path, tag_values: usize);

    /// The file name is not valid UTF-8; the file is left out of the index.
    fn non_utf8_name(&self, path: &Path);
}

impl<T: BuildReporter + ?Sized> BuildReporter for &T {
    fn unsupported_extension(&self, path: &Path) {
        (**self).unsupported_extension(path)
    }

    fn missing_metadata(&self, path: &Path) {
        (**self).missing_metadata(path)
    }

    fn indexed(&self, path: &Path, tag_values: usize) {
        (**self).indexed(path, tag_values)
    }

    fn non_utf8_name(&self, path: &Path) {
        (**self).non_utf8_name(path)
    }
}

/// Reporter that emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl BuildReporter for TracingReporter {
    fn unsupported_extension(&self, path: &Path) {
        info!("No tag parser for {}", path.display());
    }

    fn missing_metadata(&self, path: &Path) {
        warn!("Failed to parse {}: no metadata header", path.display());
    }

    fn indexed(&self, path: &Path, tag_values: usize) {
        debug!("Indexed {} with {} tag values", path.display(), tag_values);
    }

    fn non_utf8_name(&self, path: &Path) {
        warn!("Skipping {}: file name is not valid UTF-8", path.display());
    }
}
