//! Word tokenization and derived counts.
//!
//! A word is a maximal run of Unicode letters, combining marks, digits,
//! apostrophes and hyphens. Everything else separates words, so Turkish,
//! Cyrillic and CJK letters tokenize the same way Latin ones do. All
//! functions are total: empty input yields empty results.

use fxhash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use unicode_categories::UnicodeCategories;

/// A token with its UTF-8 byte offsets in the input text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The token text content.
    pub text: String,
    /// Byte offset (inclusive) in the input text.
    pub start: usize,
    /// Byte offset (exclusive) in the input text.
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Combining marks stay with their base letter. ASCII and typographic
/// apostrophes both join word parts ("Ankara'da").
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch.is_mark() || matches!(ch, '\'' | '\u{2019}' | '-')
}

/// Borrowing word iterator shared by every helper in this module.
pub fn words(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split(|ch: char| !is_word_char(ch))
        .filter(|word| !word.is_empty())
}

/// Tokenizes text into words with byte offsets.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if !is_word_char(ch) {
            if let Some(token_start) = start.take() {
                tokens.push(Token {
                    text: text[token_start..idx].to_string(),
                    start: token_start,
                    end: idx,
                });
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }

    if let Some(token_start) = start {
        tokens.push(Token {
            text: text[token_start..].to_string(),
            start: token_start,
            end: text.len(),
        });
    }

    tokens
}

pub fn count_words(text: &str) -> usize {
    words(text).count()
}

/// Number of distinct words; `case_insensitive` folds case before counting.
pub fn count_unique_words(text: &str, case_insensitive: bool) -> usize {
    if case_insensitive {
        words(text)
            .map(str::to_lowercase)
            .collect::<FxHashSet<_>>()
            .len()
    } else {
        words(text).collect::<FxHashSet<_>>().len()
    }
}

/// Occurrence count per word, case preserved.
pub fn word_frequency(text: &str) -> FxHashMap<String, usize> {
    let mut freq: FxHashMap<String, usize> = FxHashMap::default();
    for word in words(text) {
        *freq.entry(word.to_string()).or_insert(0) += 1;
    }
    freq
}

/// Sliding windows of `n` consecutive words joined by a single space.
///
/// Empty when `n` is zero or the text has fewer than `n` words.
pub fn ngrams(text: &str, n: usize) -> Vec<String> {
    let tokens: Vec<&str> = words(text).collect();
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }
    tokens.windows(n).map(|window| window.join(" ")).collect()
}

/// Mean word length in characters; 0.0 for text without words.
pub fn average_word_length(text: &str) -> f64 {
    let (chars, count) = words(text).fold((0usize, 0usize), |(chars, count), word| {
        (chars + word.chars().count(), count + 1)
    });
    if count == 0 {
        0.0
    } else {
        chars as f64 / count as f64
    }
}
