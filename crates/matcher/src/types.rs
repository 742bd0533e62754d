use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum similarity a fuzzy match must reach when nothing else is configured.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;

/// Matching strategy, and the kind of evidence a [`MatchRecord`] carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Normalized source sentence contained in a response sentence.
    Exact,
    /// Best edit-distance similarity above a threshold.
    Fuzzy,
    /// Lexical overlap over whole texts; evaluated by the semantic metric,
    /// never per sentence.
    Semantic,
}

impl MatchKind {
    /// Default matcher set, in run order.
    pub const DEFAULT_SET: [MatchKind; 2] = [MatchKind::Exact, MatchKind::Fuzzy];

    pub const fn as_str(self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Fuzzy => "fuzzy",
            MatchKind::Semantic => "semantic",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchKind {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(MatchKind::Exact),
            "fuzzy" => Ok(MatchKind::Fuzzy),
            "semantic" => Ok(MatchKind::Semantic),
            _ => Err(MatchError::UnknownMatcher(s.to_string())),
        }
    }
}

/// One correspondence between a source sentence and a response sentence.
///
/// `similarity` is exactly 1.0 for [`MatchKind::Exact`] records and below 1.0
/// for every other kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchRecord {
    /// Source sentence as it appeared in the source text.
    pub source_text: String,
    /// Response sentence it was found in, original casing.
    pub matched_text: String,
    /// Index of the response sentence, zero based.
    pub position: usize,
    /// Word count of `source_text`.
    pub word_count: usize,
    /// Similarity in [0, 1].
    pub similarity: f64,
    #[serde(rename = "type")]
    pub kind: MatchKind,
}

impl MatchRecord {
    pub fn is_exact(&self) -> bool {
        self.kind == MatchKind::Exact
    }
}

/// Per-call matcher options.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct MatchOptions {
    /// Similarity cutoff; only the fuzzy matcher reads it. Values outside
    /// [0, 1] are ignored in favor of the matcher's own threshold.
    pub threshold: Option<f64>,
    /// Compare without case folding; only the exact matcher reads it.
    pub case_sensitive: bool,
}

impl MatchOptions {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn case_sensitive(mut self) -> Self {
        self.case_sensitive = true;
        self
    }
}

/// Returns `threshold` when it is a usable cutoff.
pub(crate) fn valid_threshold(threshold: f64) -> Option<f64> {
    (0.0..=1.0).contains(&threshold).then_some(threshold)
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("unknown matcher type: {0}")]
    UnknownMatcher(String),
}
