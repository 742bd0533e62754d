use canonical::{count_words, normalize_for_comparison};
use similarity::similarity_normalized;

use crate::types::{valid_threshold, MatchKind, MatchOptions, MatchRecord, DEFAULT_FUZZY_THRESHOLD};

/// Edit-distance matcher.
///
/// Every source sentence is compared against every response sentence; the
/// highest [`similarity`](similarity::similarity) at or above the threshold
/// wins, first one on ties. At most one record per source sentence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatcher {
    threshold: f64,
}

impl FuzzyMatcher {
    /// Thresholds outside [0, 1] fall back to [`DEFAULT_FUZZY_THRESHOLD`].
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: valid_threshold(threshold).unwrap_or(DEFAULT_FUZZY_THRESHOLD),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn find_matches<S: AsRef<str>, R: AsRef<str>>(
        &self,
        source_sentences: &[S],
        response_sentences: &[R],
        options: &MatchOptions,
    ) -> Vec<MatchRecord> {
        let threshold = options
            .threshold
            .and_then(valid_threshold)
            .unwrap_or(self.threshold);

        let candidates: Vec<String> = response_sentences
            .iter()
            .map(|sentence| normalize_for_comparison(sentence.as_ref()))
            .collect();

        source_sentences
            .iter()
            .filter_map(|source| {
                let source = source.as_ref();
                let needle = normalize_for_comparison(source);
                if needle.is_empty() {
                    return None;
                }

                let mut best: Option<(usize, f64)> = None;
                for (idx, candidate) in candidates.iter().enumerate() {
                    let score = similarity_normalized(&needle, candidate);
                    if score >= threshold && best.is_none_or(|(_, top)| score > top) {
                        best = Some((idx, score));
                    }
                }

                let (position, score) = best?;
                // Identical after normalization is an exact match by definition.
                let kind = if score >= 1.0 {
                    MatchKind::Exact
                } else {
                    MatchKind::Fuzzy
                };
                Some(MatchRecord {
                    source_text: source.to_string(),
                    matched_text: response_sentences[position].as_ref().to_string(),
                    position,
                    word_count: count_words(source),
                    similarity: score,
                    kind,
                })
            })
            .collect()
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_FUZZY_THRESHOLD)
    }
}
