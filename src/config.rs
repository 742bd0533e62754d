//! Engine configuration and YAML config-file support.
//!
//! [`GeoConfig`] is the resolved, always-valid configuration an engine owns.
//! [`GeoConfigOverrides`] is the partial form callers and files provide;
//! [`GeoConfigOverrides::resolve`] merges it against the defaults, replacing
//! out-of-range values instead of failing.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # GeoScore engine configuration
//! version: "1.0"
//! name: "blog audit"
//!
//! engine:
//!   lambda_decay: 8.0
//!   fuzzy_threshold: 0.85
//!   matchers: ["exact", "fuzzy", "semantic"]
//!   language: "tr"
//!   parallel: true
//!   semantic_ngram: 3
//!   semantic_threshold: 0.4
//! ```

use std::fs;
use std::path::Path;

use matcher::{MatchKind, DEFAULT_FUZZY_THRESHOLD};
use scoring::{
    valid_lambda_decay, DEFAULT_LAMBDA_DECAY, DEFAULT_SEMANTIC_NGRAM, DEFAULT_SEMANTIC_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_LANGUAGE: &str = "tr";

/// Errors that can occur when loading YAML configuration files.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Resolved engine configuration. Immutable once handed to an engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoConfig {
    /// Decay constant of the position weight `e^(-position / lambda_decay)`.
    pub lambda_decay: f64,
    /// Minimum Levenshtein similarity for a fuzzy match.
    pub fuzzy_threshold: f64,
    /// Matchers run in this order; earlier ones win a source sentence.
    pub matchers: Vec<MatchKind>,
    /// Language hint carried through to results; no algorithm reads it.
    pub language: String,
    /// Analyze sources of `analyze_multiple` on the rayon pool.
    pub parallel: bool,
    pub semantic_ngram: usize,
    pub semantic_threshold: f64,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            lambda_decay: DEFAULT_LAMBDA_DECAY,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            matchers: MatchKind::DEFAULT_SET.to_vec(),
            language: DEFAULT_LANGUAGE.to_string(),
            parallel: false,
            semantic_ngram: DEFAULT_SEMANTIC_NGRAM,
            semantic_threshold: DEFAULT_SEMANTIC_THRESHOLD,
        }
    }
}

impl GeoConfig {
    /// Replaces out-of-range values with their defaults and drops repeated
    /// matchers, keeping the first occurrence.
    pub fn sanitized(mut self) -> Self {
        let defaults = GeoConfig::default();

        self.lambda_decay = valid_lambda_decay(self.lambda_decay).unwrap_or(defaults.lambda_decay);
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            self.fuzzy_threshold = defaults.fuzzy_threshold;
        }
        if self.semantic_ngram == 0 {
            self.semantic_ngram = defaults.semantic_ngram;
        }
        if !(0.0..=1.0).contains(&self.semantic_threshold) {
            self.semantic_threshold = defaults.semantic_threshold;
        }

        let mut seen = Vec::with_capacity(self.matchers.len());
        self.matchers.retain(|kind| {
            if seen.contains(kind) {
                false
            } else {
                seen.push(*kind);
                true
            }
        });
        if self.matchers.is_empty() {
            self.matchers = defaults.matchers;
        }
        self
    }

    pub fn uses(&self, kind: MatchKind) -> bool {
        self.matchers.contains(&kind)
    }
}

/// Partial configuration; every field falls back to the [`GeoConfig`]
/// default when absent or unusable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeoConfigOverrides {
    pub lambda_decay: Option<f64>,
    pub fuzzy_threshold: Option<f64>,
    /// Matcher names; unknown names are skipped.
    pub matchers: Option<Vec<String>>,
    pub language: Option<String>,
    pub parallel: Option<bool>,
    pub semantic_ngram: Option<usize>,
    pub semantic_threshold: Option<f64>,
}

impl GeoConfigOverrides {
    pub fn resolve(&self) -> GeoConfig {
        let defaults = GeoConfig::default();

        let matchers = match &self.matchers {
            Some(names) => names
                .iter()
                .filter_map(|name| match name.parse::<MatchKind>() {
                    Ok(kind) => Some(kind),
                    Err(err) => {
                        warn!(matcher = %name, error = %err, "config_unknown_matcher");
                        None
                    }
                })
                .collect(),
            None => defaults.matchers.clone(),
        };

        GeoConfig {
            lambda_decay: self.lambda_decay.unwrap_or(defaults.lambda_decay),
            fuzzy_threshold: self.fuzzy_threshold.unwrap_or(defaults.fuzzy_threshold),
            matchers,
            language: self.language.clone().unwrap_or(defaults.language),
            parallel: self.parallel.unwrap_or(defaults.parallel),
            semantic_ngram: self.semantic_ngram.unwrap_or(defaults.semantic_ngram),
            semantic_threshold: self.semantic_threshold.unwrap_or(defaults.semantic_threshold),
        }
        .sanitized()
    }
}

/// Top-level YAML configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoConfigFile {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub engine: GeoConfigOverrides,
}

impl GeoConfigFile {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: GeoConfigFile = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }
    }

    pub fn to_config(&self) -> GeoConfig {
        self.engine.resolve()
    }
}

impl Default for GeoConfigFile {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            engine: GeoConfigOverrides::default(),
        }
    }
}
