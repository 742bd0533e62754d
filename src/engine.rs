//! The visibility engine: sentence splitting, matcher combination, metric
//! calculation and score aggregation for one or many sources.

use std::time::Instant;

use canonical::{count_words, split_into_sentences};
use fxhash::FxHashSet;
use matcher::{MatchKind, MatchOptions, MatchRecord, Matcher};
use scoring::{valid_lambda_decay, Metric, MetricInput, MetricResult};
use tracing::{debug, info, warn, Level};

use crate::config::GeoConfig;
use crate::error::GeoError;
use crate::explain::build_explanation;
use crate::result::{
    AnalysisMeta, AnalysisMetrics, AnalysisResult, MultiSourceAnalysisResult, MultiSourceSummary,
};

/// Weight of the word-count metric in the visibility score.
pub const WORD_COUNT_WEIGHT: f64 = 0.4;
/// Weight of the position-adjusted metric in the visibility score.
pub const POSITION_ADJUSTED_WEIGHT: f64 = 0.6;

/// `round(100 · (0.4 · word_count + 0.6 · position_adjusted))`, in 0..=100.
pub fn visibility_score(word_count: f64, position_adjusted: f64) -> u8 {
    let score =
        100.0 * (WORD_COUNT_WEIGHT * word_count + POSITION_ADJUSTED_WEIGHT * position_adjusted);
    score.round().clamp(0.0, 100.0) as u8
}

/// Stateless between calls; every method reads only its arguments and the
/// configuration fixed at construction, so one engine can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct GeoEngine {
    config: GeoConfig,
    matchers: Vec<Matcher>,
}

impl Default for GeoEngine {
    fn default() -> Self {
        Self::new(GeoConfig::default())
    }
}

impl GeoEngine {
    /// Out-of-range configuration values are replaced by their defaults.
    pub fn new(config: GeoConfig) -> Self {
        let config = config.sanitized();
        let matchers = config
            .matchers
            .iter()
            .map(|&kind| Matcher::from_kind(kind, config.fuzzy_threshold))
            .collect();
        Self { config, matchers }
    }

    pub fn config(&self) -> &GeoConfig {
        &self.config
    }

    /// Analyze one (source, response) pair.
    ///
    /// Fails with [`GeoError::InvalidInput`] when either text is empty or
    /// whitespace only.
    pub fn analyze(
        &self,
        source: &str,
        response: &str,
        query: Option<&str>,
    ) -> Result<AnalysisResult, GeoError> {
        let start = Instant::now();

        if let Err(err) = validate(source, response) {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(error = %err, elapsed_micros, "analyze_failure");
            return Err(err);
        }

        let span = tracing::span!(
            Level::INFO,
            "geo.analyze",
            source_len = source.len(),
            response_len = response.len()
        );
        let _guard = span.enter();

        let result = self.analyze_inner(source, response, query, start);

        let elapsed_micros = start.elapsed().as_micros();
        info!(
            visibility = result.visibility,
            match_count = result.matches.len(),
            elapsed_micros,
            "analyze_success"
        );
        Ok(result)
    }

    /// Run [`analyze`](Self::analyze) with a one-off configuration.
    pub fn analyze_with_config(
        &self,
        source: &str,
        response: &str,
        query: Option<&str>,
        config: &GeoConfig,
    ) -> Result<AnalysisResult, GeoError> {
        GeoEngine::new(config.clone()).analyze(source, response, query)
    }

    /// Analyze every source against the same response and rank them.
    ///
    /// Each source is analyzed independently; the ranking orders source
    /// indices by descending visibility and keeps input order on ties.
    pub fn analyze_multiple<S>(
        &self,
        sources: &[S],
        response: &str,
        query: Option<&str>,
    ) -> Result<MultiSourceAnalysisResult, GeoError>
    where
        S: AsRef<str> + Sync,
    {
        if sources.is_empty() {
            let err = GeoError::InvalidInput("at least one source is required".to_string());
            warn!(error = %err, "analyze_multiple_failure");
            return Err(err);
        }

        let results = self.analyze_each(sources, response, query)?;
        let summary = MultiSourceSummary::from_results(&results);

        info!(
            total_sources = summary.total_sources,
            most_visible = summary.most_visible,
            average_visibility = summary.average_visibility,
            "analyze_multiple_success"
        );
        Ok(MultiSourceAnalysisResult { results, summary })
    }

    /// Visibility only.
    pub fn quick_score(&self, source: &str, response: &str) -> Result<u8, GeoError> {
        self.analyze(source, response, None).map(|result| result.visibility)
    }

    /// Recompute the word-count and position-adjusted metrics for existing
    /// matches. `lambda_decay` overrides the configured decay for this call
    /// when it is finite and positive.
    pub fn recalculate_metrics(
        &self,
        matches: &[MatchRecord],
        total_response_words: usize,
        lambda_decay: Option<f64>,
    ) -> AnalysisMetrics {
        let lambda_decay = lambda_decay
            .and_then(valid_lambda_decay)
            .unwrap_or(self.config.lambda_decay);
        let input = MetricInput {
            matches,
            total_response_words,
            source_text: "",
            response_text: "",
        };

        AnalysisMetrics {
            word_count: Metric::word_count().calculate(&input),
            position_adjusted: Metric::position_adjusted(lambda_decay).calculate(&input),
            semantic: None,
        }
    }

    /// Run the configured matchers in order and combine their records.
    ///
    /// A source sentence claimed by an earlier matcher cannot be claimed
    /// again by a later one. The result is sorted by response position.
    pub fn find_matches<S, R>(
        &self,
        source_sentences: &[S],
        response_sentences: &[R],
    ) -> Vec<MatchRecord>
    where
        S: AsRef<str>,
        R: AsRef<str>,
    {
        let options = MatchOptions::default();
        let mut claimed: FxHashSet<String> = FxHashSet::default();
        let mut combined: Vec<MatchRecord> = Vec::new();

        for matcher in &self.matchers {
            let found = matcher.find_matches(source_sentences, response_sentences, &options);
            let found_count = found.len();
            let fresh: Vec<MatchRecord> = found
                .into_iter()
                .filter(|record| !claimed.contains(&record.source_text))
                .collect();

            debug!(
                matcher = %matcher.kind(),
                found = found_count,
                added = fresh.len(),
                "matcher_pass"
            );

            claimed.extend(fresh.iter().map(|record| record.source_text.clone()));
            combined.extend(fresh);
        }

        combined.sort_by_key(|record| record.position);
        combined
    }

    fn analyze_inner(
        &self,
        source: &str,
        response: &str,
        query: Option<&str>,
        start: Instant,
    ) -> AnalysisResult {
        let source_sentences = split_into_sentences(source);
        let response_sentences = split_into_sentences(response);
        let source_word_count = count_words(source);
        let response_word_count = count_words(response);

        let matches = self.find_matches(&source_sentences, &response_sentences);

        let input = MetricInput {
            matches: &matches,
            total_response_words: response_word_count,
            source_text: source,
            response_text: response,
        };
        let word_count = Metric::word_count().calculate(&input);
        let position_adjusted =
            Metric::position_adjusted(self.config.lambda_decay).calculate(&input);
        let semantic = self.semantic_metric(&input);

        let visibility = visibility_score(word_count.value, position_adjusted.value);
        let explanation = build_explanation(visibility, &matches);

        AnalysisResult {
            visibility,
            metrics: AnalysisMetrics {
                word_count,
                position_adjusted,
                semantic,
            },
            matches,
            explanation,
            meta: AnalysisMeta {
                query: query.map(str::to_string),
                language: self.config.language.clone(),
                source_word_count,
                response_word_count,
                source_sentence_count: source_sentences.len(),
                response_sentence_count: response_sentences.len(),
                processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
            },
        }
    }

    fn semantic_metric(&self, input: &MetricInput<'_>) -> Option<MetricResult> {
        self.config.uses(MatchKind::Semantic).then(|| {
            Metric::semantic(self.config.semantic_ngram, self.config.semantic_threshold)
                .calculate(input)
        })
    }

    #[cfg(feature = "parallel")]
    fn analyze_each<S>(
        &self,
        sources: &[S],
        response: &str,
        query: Option<&str>,
    ) -> Result<Vec<AnalysisResult>, GeoError>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        if self.config.parallel {
            sources
                .par_iter()
                .map(|source| self.analyze(source.as_ref(), response, query))
                .collect()
        } else {
            self.analyze_sequential(sources, response, query)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn analyze_each<S>(
        &self,
        sources: &[S],
        response: &str,
        query: Option<&str>,
    ) -> Result<Vec<AnalysisResult>, GeoError>
    where
        S: AsRef<str> + Sync,
    {
        self.analyze_sequential(sources, response, query)
    }

    fn analyze_sequential<S: AsRef<str>>(
        &self,
        sources: &[S],
        response: &str,
        query: Option<&str>,
    ) -> Result<Vec<AnalysisResult>, GeoError> {
        sources
            .iter()
            .map(|source| self.analyze(source.as_ref(), response, query))
            .collect()
    }
}

fn validate(source: &str, response: &str) -> Result<(), GeoError> {
    if source.trim().is_empty() {
        return Err(GeoError::empty("source"));
    }
    if response.trim().is_empty() {
        return Err(GeoError::empty("response"));
    }
    Ok(())
}
