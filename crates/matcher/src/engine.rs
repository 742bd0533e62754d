use crate::exact::ExactMatcher;
use crate::fuzzy::FuzzyMatcher;
use crate::types::{MatchKind, MatchOptions, MatchRecord, DEFAULT_FUZZY_THRESHOLD};


/// Placeholder strategy for whole-text lexical overlap.
///
/// Discovery of sentence pairs is not its job: semantic similarity is
/// scored over the full texts by the semantic metric, so this matcher
/// always returns no records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SemanticMatcher;

impl SemanticMatcher {
    pub fn find_matches<S: AsRef<str>, R: AsRef<str>>(
        &self,
        _source_sentences: &[S],
        _response_sentences: &[R],
        _options: &MatchOptions,
    ) -> Vec<MatchRecord> {
        Vec::new()
    }
}

/// A configured matching strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Matcher {
    Exact(ExactMatcher),
    Fuzzy(FuzzyMatcher),
    Semantic(SemanticMatcher),
}

impl Matcher {
    /// Build the matcher for `kind`. Only the fuzzy matcher reads
    /// `fuzzy_threshold`.
    pub fn from_kind(kind: MatchKind, fuzzy_threshold: f64) -> Self {
        match kind {
            MatchKind::Exact => Matcher::Exact(ExactMatcher::new()),
            MatchKind::Fuzzy => Matcher::Fuzzy(FuzzyMatcher::new(fuzzy_threshold)),
            MatchKind::Semantic => Matcher::Semantic(SemanticMatcher),
        }
    }

    pub fn kind(&self) -> MatchKind {
        match self {
            Matcher::Exact(_) => MatchKind::Exact,
            Matcher::Fuzzy(_) => MatchKind::Fuzzy,
            Matcher::Semantic(_) => MatchKind::Semantic,
        }
    }

    /// Match every source sentence against the response sentences.
    ///
    /// Records come back in source-sentence order, at most one per source
    /// sentence.
    pub fn find_matches<S: AsRef<str>, R: AsRef<str>>(
        &self,
        source_sentences: &[S],
        response_sentences: &[R],
        options: &MatchOptions,
    ) -> Vec<MatchRecord> {
        match self {
            Matcher::Exact(m) => m.find_matches(source_sentences, response_sentences, options),
            Matcher::Fuzzy(m) => m.find_matches(source_sentences, response_sentences, options),
            Matcher::Semantic(m) => m.find_matches(source_sentences, response_sentences, options),
        }
    }
}

impl From<MatchKind> for Matcher {
    fn from(kind: MatchKind) -> Self {
        Matcher::from_kind(kind, DEFAULT_FUZZY_THRESHOLD)
    }
}
