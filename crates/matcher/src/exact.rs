use canonical::{count_words, normalize, normalize_for_comparison, NormalizeOptions};

use crate::types::{MatchKind, MatchOptions, MatchRecord};

/// Substring matcher.
///
/// A source sentence matches the first response sentence whose normalized
/// text contains the normalized source sentence. The scan stops at that
/// first hit even if a later sentence is a verbatim copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactMatcher;

impl ExactMatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn find_matches<S: AsRef<str>, R: AsRef<str>>(
        &self,
        source_sentences: &[S],
        response_sentences: &[R],
        options: &MatchOptions,
    ) -> Vec<MatchRecord> {
        let prepare = |text: &str| {
            if options.case_sensitive {
                normalize(text, &NormalizeOptions::comparison().with_lowercase(false))
            } else {
                normalize_for_comparison(text)
            }
        };

        let haystacks: Vec<String> = response_sentences
            .iter()
            .map(|sentence| prepare(sentence.as_ref()))
            .collect();

        source_sentences
            .iter()
            .filter_map(|source| {
                let source = source.as_ref();
                let needle = prepare(source);
                if needle.is_empty() {
                    return None;
                }
                let position = haystacks
                    .iter()
                    .position(|haystack| haystack.contains(needle.as_str()))?;
                Some(MatchRecord {
                    source_text: source.to_string(),
                    matched_text: response_sentences[position].as_ref().to_string(),
                    position,
                    word_count: count_words(source),
                    similarity: 1.0,
                    kind: MatchKind::Exact,
                })
            })
            .collect()
    }
}
