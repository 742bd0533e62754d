use canonical::count_words;
use similarity::{jaccard_similarity, ngram_similarity};

use crate::types::{MetricKind, MetricMetadata, MetricResult};

pub const DEFAULT_SEMANTIC_NGRAM: usize = 2;
pub const DEFAULT_SEMANTIC_THRESHOLD: f64 = 0.5;

const NGRAM_WEIGHT: f64 = 0.6;
const JACCARD_WEIGHT: f64 = 0.4;

/// Lexical-overlap approximation of semantic similarity over whole texts.
///
/// `raw = 0.6 · ngram_similarity(n) + 0.4 · jaccard_similarity`. This is
/// n-gram and word-set overlap, not meaning; it never feeds the visibility
/// score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemanticMetric {
    ngram_size: usize,
    threshold: f64,
}

impl SemanticMetric {
    /// `ngram_size` of zero and thresholds outside [0, 1] fall back to the
    /// defaults.
    pub fn new(ngram_size: usize, threshold: f64) -> Self {
        Self {
            ngram_size: if ngram_size == 0 {
                DEFAULT_SEMANTIC_NGRAM
            } else {
                ngram_size
            },
            threshold: if (0.0..=1.0).contains(&threshold) {
                threshold
            } else {
                DEFAULT_SEMANTIC_THRESHOLD
            },
        }
    }

    pub fn ngram_size(&self) -> usize {
        self.ngram_size
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn calculate(&self, source_text: &str, response_text: &str) -> MetricResult {
        let degenerate = source_text.trim().is_empty()
            || response_text.trim().is_empty()
            || count_words(response_text) == 0;

        let (ngram, jaccard) = if degenerate {
            (0.0, 0.0)
        } else {
            (
                ngram_similarity(source_text, response_text, self.ngram_size),
                jaccard_similarity(source_text, response_text),
            )
        };
        let raw_value = NGRAM_WEIGHT * ngram + JACCARD_WEIGHT * jaccard;

        MetricResult::new(
            MetricKind::Semantic,
            raw_value,
            MetricMetadata::Semantic {
                ngram_similarity: ngram,
                jaccard_similarity: jaccard,
                ngram_size: self.ngram_size,
                threshold: self.threshold,
                semantic_match_found: !degenerate && raw_value >= self.threshold,
            },
        )
    }

    pub fn explain(&self, result: &MetricResult) -> String {
        let found = matches!(
            result.metadata,
            MetricMetadata::Semantic {
                semantic_match_found: true,
                ..
            }
        );
        if found {
            format!(
                "Lexical overlap of {:.1}% suggests the response paraphrases the source.",
                result.percent()
            )
        } else {
            format!(
                "Lexical overlap of {:.1}% is below the paraphrase threshold.",
                result.percent()
            )
        }
    }
}

impl Default for SemanticMetric {
    fn default() -> Self {
        Self::new(DEFAULT_SEMANTIC_NGRAM, DEFAULT_SEMANTIC_THRESHOLD)
    }
}
