//! Text layer for visibility scoring.
//!
//! Everything downstream (similarity primitives, matchers, metrics) reads text
//! through this crate, so comparison behavior does not depend on which
//! matcher is asking.
//!
//! ## What we do
//!
//! - Normalization with independently togglable transforms (case folding,
//!   whitespace collapse, punctuation and diacritic stripping, trimming)
//! - A fixed comparison preset, [`normalize_for_comparison`]
//! - Unicode-aware word tokenization with byte offsets, counts, frequency
//!   tables and word n-grams
//! - Sentence splitting that survives abbreviations, decimals and ellipses
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence, no state between calls.
//! Every function here is total: empty or whitespace-only input produces
//! empty output, never an error.

mod config;
mod normalize;
mod sentence;
mod token;
mod whitespace;

pub use crate::config::NormalizeOptions;
pub use crate::normalize::{normalize, normalize_for_comparison};
pub use crate::sentence::{split_into_paragraphs_and_sentences, split_into_sentences};
pub use crate::token::{
    average_word_length, count_unique_words, count_words, ngrams, tokenize, word_frequency, words,
    Token,
};
pub use crate::whitespace::{collapse_whitespace, split_paragraphs};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn without_whitespace(text: &str) -> String {
        text.chars().filter(|c| !c.is_whitespace()).collect()
    }

    proptest! {
        #[test]
        fn sentences_reconstruct_input(text in "[a-zA-ZçğıöşüÇĞİÖŞÜ0-9 .!?,\n]{0,120}") {
            let sentences = split_into_sentences(&text);
            prop_assert_eq!(without_whitespace(&sentences.join(" ")), without_whitespace(&text));
        }

        #[test]
        fn sentences_are_trimmed_and_non_empty(text in "\\PC{0,80}") {
            for sentence in split_into_sentences(&text) {
                prop_assert!(!sentence.is_empty());
                prop_assert_eq!(sentence.trim(), sentence.as_str());
            }
        }

        #[test]
        fn comparison_normalization_is_idempotent(text in "\\PC{0,80}") {
            let once = normalize_for_comparison(&text);
            prop_assert_eq!(normalize_for_comparison(&once), once);
        }

        #[test]
        fn ngram_count_follows_word_count(text in "[a-z ]{0,60}", n in 1usize..5) {
            let words = count_words(&text);
            let expected = if words < n { 0 } else { words - n + 1 };
            prop_assert_eq!(ngrams(&text, n).len(), expected);
        }
    }

    #[test]
    fn comparison_preset_matches_explicit_options() {
        let text = "  Aynı   METİN. ";
        assert_eq!(
            normalize_for_comparison(text),
            normalize(text, &NormalizeOptions::comparison())
        );
    }
}
