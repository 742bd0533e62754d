//! # Similarity primitives
//!
//! Pure functions that score how alike two pieces of text are. Every
//! primitive reads its inputs through
//! [`canonical::normalize_for_comparison`], so two callers comparing the same
//! strings always get the same number.
//!
//! - [`levenshtein_distance`]: character edit distance, linear space
//! - [`similarity`]: `1 - distance / max_len`, the fuzzy matcher's score
//! - [`jaccard_similarity`]: overlap of word sets
//! - [`ngram_similarity`]: overlap of character n-gram sets
//! - [`combined_similarity`]: weighted blend of edit distance and Jaccard
//!
//! All scores are in `[0, 1]`. The empty-input conventions differ on purpose
//! between [`similarity`] (0.0) and [`ngram_similarity`] (1.0 when both are
//! too short); see the function docs.
//!
//! ```
//! use similarity::{levenshtein_distance, similarity};
//!
//! assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
//! assert_eq!(similarity("Aynı cümle.", "  aynı CÜMLE."), 1.0);
//! ```

mod levenshtein;
mod overlap;

pub use crate::levenshtein::{
    levenshtein_distance, normalized_distance, similarity, similarity_normalized,
};
pub use crate::overlap::{
    combined_similarity, jaccard_similarity, ngram_similarity, DEFAULT_COMBINED_WEIGHT,
};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn distance_is_symmetric(a in "\\PC{0,24}", b in "\\PC{0,24}") {
            prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
        }

        #[test]
        fn distance_to_self_is_zero(a in "\\PC{0,40}") {
            prop_assert_eq!(levenshtein_distance(&a, &a), 0);
        }

        #[test]
        fn triangle_inequality(a in "[a-e]{0,12}", b in "[a-e]{0,12}", c in "[a-e]{0,12}") {
            let ab = levenshtein_distance(&a, &b);
            let bc = levenshtein_distance(&b, &c);
            let ac = levenshtein_distance(&a, &c);
            prop_assert!(ac <= ab + bc);
        }

        #[test]
        fn distance_bounded_by_longer_input(a in "\\PC{0,24}", b in "\\PC{0,24}") {
            let max_len = a.chars().count().max(b.chars().count());
            prop_assert!(levenshtein_distance(&a, &b) <= max_len);
        }

        #[test]
        fn scores_stay_in_unit_interval(a in "\\PC{0,40}", b in "\\PC{0,40}", n in 1usize..4) {
            for score in [
                similarity(&a, &b),
                jaccard_similarity(&a, &b),
                ngram_similarity(&a, &b, n),
                combined_similarity(&a, &b, DEFAULT_COMBINED_WEIGHT),
            ] {
                prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
            }
        }
    }
}
