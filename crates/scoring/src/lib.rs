//! # Visibility metrics (`scoring`)
//!
//! Turns sentence matches into normalized scores. Three metrics share one
//! output shape, [`MetricResult`]:
//!
//! | Metric | Raw value |
//! |---|---|
//! | [`WordCountMetric`] | `Σ word_count / total_response_words` |
//! | [`PositionAdjustedMetric`] | `Σ word_count · e^(-position/λ) / total_response_words` |
//! | [`SemanticMetric`] | `0.6 · ngram_similarity + 0.4 · jaccard_similarity` over whole texts |
//!
//! `value` is always `min(raw_value, 1.0)`; `raw_value` is kept unclamped so
//! callers can see double counting. An empty response scores 0 everywhere.
//!
//! [`Metric`] is the closed set callers dispatch over. The word-count and
//! position metrics read [`MetricInput::matches`]; the semantic metric reads
//! the raw texts.
//!
//! ```
//! use matcher::{MatchKind, MatchRecord};
//! use scoring::{Metric, MetricInput};
//!
//! let matches = vec![MatchRecord {
//!     source_text: "Bu metin tam olarak kullanılacak.".into(),
//!     matched_text: "Bu metin tam olarak kullanılacak.".into(),
//!     position: 0,
//!     word_count: 5,
//!     similarity: 1.0,
//!     kind: MatchKind::Exact,
//! }];
//! let input = MetricInput {
//!     matches: &matches,
//!     total_response_words: 5,
//!     source_text: "Bu metin tam olarak kullanılacak.",
//!     response_text: "Bu metin tam olarak kullanılacak.",
//! };
//!
//! assert_eq!(Metric::word_count().calculate(&input).value, 1.0);
//! assert_eq!(Metric::position_adjusted(10.0).calculate(&input).value, 1.0);
//! ```

mod position;
mod semantic;
pub mod types;
mod word_count;

use matcher::MatchRecord;

pub use crate::position::{
    calculate_position_weight, valid_lambda_decay, PositionAdjustedMetric, DEFAULT_LAMBDA_DECAY,
};
pub use crate::semantic::{SemanticMetric, DEFAULT_SEMANTIC_NGRAM, DEFAULT_SEMANTIC_THRESHOLD};
pub use crate::types::{MetricKind, MetricMetadata, MetricResult, PositionContribution};
pub use crate::word_count::WordCountMetric;

/// Everything a metric may read.
#[derive(Debug, Clone, Copy)]
pub struct MetricInput<'a> {
    pub matches: &'a [MatchRecord],
    pub total_response_words: usize,
    pub source_text: &'a str,
    pub response_text: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    WordCount(WordCountMetric),
    PositionAdjusted(PositionAdjustedMetric),
    Semantic(SemanticMetric),
}

impl Metric {
    pub fn word_count() -> Self {
        Metric::WordCount(WordCountMetric)
    }

    pub fn position_adjusted(lambda_decay: f64) -> Self {
        Metric::PositionAdjusted(PositionAdjustedMetric::new(lambda_decay))
    }

    pub fn semantic(ngram_size: usize, threshold: f64) -> Self {
        Metric::Semantic(SemanticMetric::new(ngram_size, threshold))
    }

    pub fn kind(&self) -> MetricKind {
        match self {
            Metric::WordCount(_) => MetricKind::WordCount,
            Metric::PositionAdjusted(_) => MetricKind::PositionAdjusted,
            Metric::Semantic(_) => MetricKind::Semantic,
        }
    }

    pub fn calculate(&self, input: &MetricInput<'_>) -> MetricResult {
        match self {
            Metric::WordCount(m) => m.calculate(input.matches, input.total_response_words),
            Metric::PositionAdjusted(m) => m.calculate(input.matches, input.total_response_words),
            Metric::Semantic(m) => m.calculate(input.source_text, input.response_text),
        }
    }

    pub fn explain(&self, result: &MetricResult) -> String {
        match self {
            Metric::WordCount(m) => m.explain(result),
            Metric::PositionAdjusted(m) => m.explain(result),
            Metric::Semantic(m) => m.explain(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcher::MatchKind;
    use proptest::prelude::*;

    fn records(pairs: &[(usize, usize)]) -> Vec<MatchRecord> {
        pairs.iter()
            .map(|&(position, word_count)| MatchRecord {
                source_text: String::new(),
                matched_text: String::new(),
                position,
                word_count,
                similarity: 1.0,
                kind: MatchKind::Exact,
            })
            .collect()
    }

    proptest! {
        #[test]
        fn values_are_clamped(
            pairs in prop::collection::vec((0usize..50, 0usize..40), 0..8),
            total in 0usize..100,
            lambda in 0.1f64..50.0,
        ) {
            let matches = records(&pairs);
            let input = MetricInput {
                matches: &matches,
                total_response_words: total,
                source_text: "",
                response_text: "",
            };
            for metric in [Metric::word_count(), Metric::position_adjusted(lambda)] {
                let result = metric.calculate(&input);
                prop_assert!(result.value >= 0.0 && result.value <= 1.0);
                prop_assert!(result.raw_value >= result.value);
            }
        }

        #[test]
        fn position_adjusted_never_exceeds_word_count(
            pairs in prop::collection::vec((0usize..50, 0usize..40), 0..8),
            total in 1usize..100,
        ) {
            let matches = records(&pairs);
            let input = MetricInput {
                matches: &matches,
                total_response_words: total,
                source_text: "",
                response_text: "",
            };
            let wc = Metric::word_count().calculate(&input);
            let pa = Metric::position_adjusted(DEFAULT_LAMBDA_DECAY).calculate(&input);
            prop_assert!(pa.raw_value <= wc.raw_value + 1e-9);
        }

        #[test]
        fn weight_strictly_decreases(position in 0usize..200, lambda in 1.0f64..100.0) {
            prop_assert!(
                calculate_position_weight(position + 1, lambda)
                    < calculate_position_weight(position, lambda)
            );
        }

        #[test]
        fn semantic_value_in_range(source in "\\PC{0,60}", response in "\\PC{0,60}") {
            let result = Metric::semantic(2, 0.5).calculate(&MetricInput {
                matches: &[],
                total_response_words: 0,
                source_text: &source,
                response_text: &response,
            });
            prop_assert!(result.value >= 0.0 && result.value <= 1.0);
        }
    }

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(Metric::word_count().kind(), MetricKind::WordCount);
        assert_eq!(Metric::position_adjusted(1.0).kind(), MetricKind::PositionAdjusted);
        assert_eq!(Metric::semantic(3, 0.2).kind(), MetricKind::Semantic);
    }

    #[test]
    fn explain_dispatches_to_metric() {
        let matches = records(&[(0, 2)]);
        let input = MetricInput {
            matches: &matches,
            total_response_words: 4,
            source_text: "",
            response_text: "",
        };
        let metric = Metric::word_count();
        let text = metric.explain(&metric.calculate(&input));
        assert!(text.contains("2 of 4"));
    }
}
