use matcher::MatchRecord;

use crate::types::{MetricKind, MetricMetadata, MetricResult};

/// Share of the response made of matched source sentences.
///
/// `raw = Σ word_count / total_response_words`, 0 for an empty response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordCountMetric;

impl WordCountMetric {
    pub fn calculate(&self, matches: &[MatchRecord], total_response_words: usize) -> MetricResult {
        let matched_words: usize = matches.iter().map(|m| m.word_count).sum();
        let raw_value = if total_response_words == 0 {
            0.0
        } else {
            matched_words as f64 / total_response_words as f64
        };

        MetricResult::new(
            MetricKind::WordCount,
            raw_value,
            MetricMetadata::WordCount {
                matched_words,
                total_words: total_response_words,
                match_count: matches.len(),
            },
        )
    }

    pub fn explain(&self, result: &MetricResult) -> String {
        match &result.metadata {
            MetricMetadata::WordCount {
                matched_words,
                total_words,
                ..
            } => format!(
                "{matched_words} of {total_words} response words come from matched source \
                 sentences ({:.1}%).",
                result.percent()
            ),
            _ => format!("Word count coverage: {:.1}%.", result.percent()),
        }
    }
}
