//! Serializable outcome types of the engine.

use matcher::MatchRecord;
use scoring::MetricResult;
use serde::{Deserialize, Serialize};

/// Full outcome of analyzing one (source, response) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    /// `round(100 · (0.4 · word_count + 0.6 · position_adjusted))`.
    pub visibility: u8,
    pub metrics: AnalysisMetrics,
    /// Sorted ascending by `position`; at most one record per source sentence.
    pub matches: Vec<MatchRecord>,
    pub explanation: String,
    pub meta: AnalysisMeta,
}

impl AnalysisResult {
    pub fn exact_match_count(&self) -> usize {
        self.matches.iter().filter(|m| m.is_exact()).count()
    }

    /// Matches found in the first `n` response sentences.
    pub fn early_match_count(&self, n: usize) -> usize {
        self.matches.iter().filter(|m| m.position < n).count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisMetrics {
    pub word_count: MetricResult,
    pub position_adjusted: MetricResult,
    /// Present only when the semantic matcher is configured. Informational;
    /// never part of `visibility`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic: Option<MetricResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub language: String,
    pub source_word_count: usize,
    pub response_word_count: usize,
    pub source_sentence_count: usize,
    pub response_sentence_count: usize,
    /// Wall-clock duration of the call.
    pub processing_time_ms: f64,
}

/// One [`AnalysisResult`] per source, in input order, plus a ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MultiSourceAnalysisResult {
    pub results: Vec<AnalysisResult>,
    pub summary: MultiSourceSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MultiSourceSummary {
    /// Index of the most visible source; equals `ranking[0]`.
    pub most_visible: usize,
    pub average_visibility: f64,
    /// Source indices by descending visibility, ties in input order.
    pub ranking: Vec<usize>,
    pub total_sources: usize,
}

impl MultiSourceSummary {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        let mut ranking: Vec<usize> = (0..results.len()).collect();
        // stable: equal scores keep input order
        ranking.sort_by(|&a, &b| results[b].visibility.cmp(&results[a].visibility));

        let average_visibility = if results.is_empty() {
            0.0
        } else {
            results.iter().map(|r| f64::from(r.visibility)).sum::<f64>() / results.len() as f64
        };

        Self {
            most_visible: ranking.first().copied().unwrap_or(0),
            average_visibility,
            ranking,
            total_sources: results.len(),
        }
    }
}
