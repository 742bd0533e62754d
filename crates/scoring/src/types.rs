use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a metric in results and explanations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    WordCount,
    PositionAdjusted,
    Semantic,
}

impl MetricKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            MetricKind::WordCount => "word_count",
            MetricKind::PositionAdjusted => "position_adjusted",
            MetricKind::Semantic => "semantic",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weighted contribution of one match to the position-adjusted metric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PositionContribution {
    pub position: usize,
    pub word_count: usize,
    /// `e^(-position / lambda_decay)`.
    pub weight: f64,
    /// `word_count * weight`.
    pub contribution: f64,
}

/// Auxiliary quantities each metric computed on the way to its value.
///
/// Serialized without a tag; variants are ordered so that deserialization
/// picks the most specific shape first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MetricMetadata {
    PositionAdjusted {
        lambda_decay: f64,
        weighted_words: f64,
        total_words: usize,
        match_count: usize,
        contributions: Vec<PositionContribution>,
    },
    Semantic {
        ngram_similarity: f64,
        jaccard_similarity: f64,
        ngram_size: usize,
        threshold: f64,
        semantic_match_found: bool,
    },
    WordCount {
        matched_words: usize,
        total_words: usize,
        match_count: usize,
    },
}

/// Output of one metric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricResult {
    pub name: MetricKind,
    /// `min(raw_value, 1.0)`.
    pub value: f64,
    /// Unclamped; may exceed 1.0 when matched words outnumber response words.
    pub raw_value: f64,
    pub metadata: MetricMetadata,
}

impl MetricResult {
    pub fn new(name: MetricKind, raw_value: f64, metadata: MetricMetadata) -> Self {
        Self {
            name,
            value: raw_value.min(1.0),
            raw_value,
            metadata,
        }
    }

    /// Value as a percentage, for explanations.
    pub fn percent(&self) -> f64 {
        self.value * 100.0
    }
}
