//! Fuzzy ranking of every file in an index against a query.

use crate::index::SoundIndex;
use crate::search::similarity::{PartialRatio, Similarity};

/// A file and its best similarity to the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
    pub file_name: String,
    pub score: u8,
}

/// Files ordered by ascending score; the best match is last.
///
/// Files with equal scores keep the index's iteration order, so among tied
/// files the one whose name sorts last wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedResult {
    candidates: Vec<ScoredCandidate>,
}

impl RankedResult {
    /// File names in ascending score order.
    pub fn ascending(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.candidates.iter().map(|c| c.file_name.as_str())
    }

    /// Candidates from best to worst.
    pub fn best_first(&self) -> impl Iterator<Item = &ScoredCandidate> {
        self.candidates.iter().rev()
    }

    /// The best match, if any file was ranked.
    pub fn best(&self) -> Option<&ScoredCandidate> {
        self.candidates.last()
    }

    /// Candidates in ascending score order.
    pub fn scored(&self) -> &[ScoredCandidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Scores files with a [`Similarity`] and ranks them.
#[derive(Debug, Clone, Default)]
pub struct Ranker<S = PartialRatio> {
    similarity: S,
}

impl Ranker {
    pub fn new() -> Self {
        Self {
            similarity: PartialRatio,
        }
    }
}

impl<S: Similarity> Ranker<S> {
    pub fn with_similarity(similarity: S) -> Self {
        Self { similarity }
    }

    /// Best score of `query` against any of a file's searchable strings.
    pub fn score_file(&self, query: &str, searchable: &[String]) -> u8 {
        searchable
            .iter()
            .map(|candidate| self.similarity.score(query, candidate))
            .max()
            .unwrap_or(0)
    }

    /// Score every file of `index` and order them by ascending score.
    pub fn rank(&self, query: &str, index: &SoundIndex) -> RankedResult {
        let mut candidates: Vec<ScoredCandidate> = index
            .iter()
            .map(|(file_name, searchable)| ScoredCandidate {
                file_name: file_name.to_string(),
                score: self.score_file(query, searchable),
            })
            .collect();

        // Stable: ties keep iteration order.
        candidates.sort_by_key(|c| c.score);

        RankedResult { candidates }
    }
}

/// Rank `index` against `query` with [`PartialRatio`].
pub fn rank(query: &str, index: &SoundIndex) -> RankedResult {
    Ranker::new().rank(query, index)
}
