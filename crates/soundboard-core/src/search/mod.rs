//! Fuzzy search over a [`SoundIndex`].
//!
//! This module provides:
//! - [`Similarity`] scoring and the [`PartialRatio`] implementation
//! - [`Ranker`], which orders every file by its best score
//! - [`find_best`], which picks the single best match

mod ranker;
mod similarity;

pub use ranker::{rank, RankedResult, Ranker, ScoredCandidate};
pub use similarity::{partial_ratio, PartialRatio, Similarity, MAX_SCORE};

use crate::index::SoundIndex;
use crate::{Result, SoundboardError};
use tracing::debug;

/// The single best match of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestMatch {
    pub file_name: String,
    pub score: u8,
    /// Number of files that were ranked.
    pub candidate_count: usize,
}

impl<S: Similarity> Ranker<S> {
    /// Best match of `query` in `index`.
    ///
    /// Fails with [`SoundboardError::NoCandidates`] when the index is empty.
    pub fn find_best(&self, query: &str, index: &SoundIndex) -> Result<BestMatch> {
        let ranked = self.rank(query, index);
        let best = ranked.best().ok_or(SoundboardError::NoCandidates)?;

        debug!(
            "Best match for {:?}: {} (score {}, {} candidates)",
            query,
            best.file_name,
            best.score,
            ranked.len()
        );

        Ok(BestMatch {
            file_name: best.file_name.clone(),
            score: best.score,
            candidate_count: ranked.len(),
        })
    }
}

/// Best-matching file name for `query` and the number of files ranked.
pub fn find_best(query: &str, index: &SoundIndex) -> Result<(String, usize)> {
    let best = Ranker::new().find_best(query, index)?;
    Ok((best.file_name, best.candidate_count))
}
