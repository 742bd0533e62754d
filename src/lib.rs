//! Workspace umbrella crate for GeoScore, a generative-engine visibility
//! scorer.
//!
//! Given a *source* text and a generated *response*, the engine measures how
//! much of the source the response reuses and where. It stitches the stage
//! crates together behind one API:
//!
//! 1. `canonical` splits both texts into sentences and counts words.
//! 2. `matcher` pairs source sentences with response sentences (exact
//!    containment first, then fuzzy edit-distance matches).
//! 3. `scoring` turns the matches into a word-count ratio and a
//!    position-decayed ratio.
//! 4. [`GeoEngine`] blends them into a 0–100 visibility score, builds a
//!    template explanation, and ranks several sources against one response.
//!
//! ```
//! use geoscore::GeoEngine;
//!
//! let engine = GeoEngine::default();
//! let result = engine
//!     .analyze("Bu metin birebir eşleşecek.", "Bu metin birebir eşleşecek.", None)
//!     .unwrap();
//!
//! assert!(result.visibility > 70);
//! assert_eq!(result.matches[0].position, 0);
//! ```
//!
//! The library never touches the filesystem (apart from the opt-in
//! [`GeoConfigFile::from_file`] loader), never installs a tracing subscriber
//! and keeps no state between calls.

pub mod config;
pub mod content;
mod engine;
mod error;
mod explain;
mod insights;
mod result;

pub use crate::config::{ConfigLoadError, GeoConfig, GeoConfigFile, GeoConfigOverrides};
pub use crate::content::{
    analyze_geo_patterns, content_quality, content_recommendations, keyword_density,
    ContentQuality, GeoPatternAnalysis, KeywordDensity, PatternFamily, PatternReport,
    Recommendation, Severity,
};
pub use crate::engine::{
    visibility_score, GeoEngine, POSITION_ADJUSTED_WEIGHT, WORD_COUNT_WEIGHT,
};
pub use crate::error::GeoError;
pub use crate::explain::{build_explanation, VisibilityBand};
pub use crate::insights::{get_insights, Insight, InsightKind};
pub use crate::result::{
    AnalysisMeta, AnalysisMetrics, AnalysisResult, MultiSourceAnalysisResult, MultiSourceSummary,
};

pub use canonical::{
    average_word_length, count_unique_words, count_words, ngrams, normalize,
    normalize_for_comparison, split_into_paragraphs_and_sentences, split_into_sentences, tokenize,
    word_frequency, NormalizeOptions, Token,
};
pub use matcher::{MatchKind, MatchOptions, MatchRecord, Matcher};
pub use scoring::{
    calculate_position_weight, Metric, MetricKind, MetricMetadata, MetricResult,
    PositionContribution,
};
pub use similarity::{
    combined_similarity, jaccard_similarity, levenshtein_distance, ngram_similarity, similarity,
};

/// [`GeoEngine::analyze`] with the default configuration.
pub fn analyze(
    source: &str,
    response: &str,
    query: Option<&str>,
) -> Result<AnalysisResult, GeoError> {
    GeoEngine::default().analyze(source, response, query)
}

/// [`GeoEngine::analyze_multiple`] with the default configuration.
pub fn analyze_multiple<S>(
    sources: &[S],
    response: &str,
    query: Option<&str>,
) -> Result<MultiSourceAnalysisResult, GeoError>
where
    S: AsRef<str> + Sync,
{
    GeoEngine::default().analyze_multiple(sources, response, query)
}

/// [`GeoEngine::quick_score`] with the default configuration.
pub fn quick_score(source: &str, response: &str) -> Result<u8, GeoError> {
    GeoEngine::default().quick_score(source, response)
}
