//! String similarity scoring.

/// Highest similarity score.
pub const MAX_SCORE: u8 = 100;

/// Scores how well `candidate` matches `query`, from 0 to [`MAX_SCORE`].
pub trait Similarity {
    fn score(&self, query: &str, candidate: &str) -> u8;
}

impl<T: Similarity + ?Sized> Similarity for &T {
    fn score(&self, query: &str, candidate: &str) -> u8 {
        (**self).score(query, candidate)
    }
}

/// Substring-aware fuzzy similarity.
///
/// The shorter string is aligned against every window of the longer string
/// with the same length; the best normalized Levenshtein similarity of any
/// window is the score. A query contained verbatim in a candidate scores
/// [`MAX_SCORE`] however long the candidate is. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialRatio;

impl Similarity for PartialRatio {
    fn score(&self, query: &str, candidate: &str) -> u8 {
        partial_ratio(query, candidate)
    }
}

/// Partial-ratio similarity of two strings; 0 when either is empty.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    if shorter.is_empty() {
        return 0;
    }

    let needle: String = shorter.iter().collect();
    let mut best = 0.0_f64;
    for window in longer.windows(shorter.len()) {
        let window: String = window.iter().collect();
        let ratio = strsim::normalized_levenshtein(&needle, &window);
        if ratio > best {
            best = ratio;
            if best >= 1.0 {
                break;
            }
        }
    }

    to_score(best)
}

/// Convert a 0.0..=1.0 ratio to a rounded score.
fn to_score(ratio: f64) -> u8 {
    let scaled = (ratio * f64::from(MAX_SCORE)).round();
    if scaled <= 0.0 {
        0
    } else if scaled >= f64::from(MAX_SCORE) {
        MAX_SCORE
    } else {
        scaled as u8
    }
}
