//! Set-overlap similarities: word-set Jaccard and character n-gram Jaccard.

use canonical::{normalize_for_comparison, words};
use fxhash::FxHashSet;

use crate::levenshtein::normalized_distance;

/// Weight of the edit-distance term in [`combined_similarity`].
pub const DEFAULT_COMBINED_WEIGHT: f64 = 0.6;

fn jaccard<T: Eq + std::hash::Hash>(a: &FxHashSet<T>, b: &FxHashSet<T>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Overlapping character windows of length `n` as borrowed slices.
fn char_shingles(text: &str, n: usize) -> FxHashSet<&str> {
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(text.len()))
        .collect();
    bounds
        .windows(n + 1)
        .map(|window| &text[window[0]..window[n]])
        .collect()
}

/// `|A ∩ B| / |A ∪ B|` over the word sets of both texts; 0.0 when both are
/// empty.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let a = normalize_for_comparison(a);
    let b = normalize_for_comparison(b);
    let set_a: FxHashSet<&str> = words(&a).collect();
    let set_b: FxHashSet<&str> = words(&b).collect();
    jaccard(&set_a, &set_b)
}

/// Jaccard similarity over character n-grams of the normalized texts.
///
/// Degenerate inputs follow a fixed convention: if both texts are shorter
/// than `n` characters the result is 1.0, if only one is it is 0.0. `n` of
/// zero is treated as 1.
pub fn ngram_similarity(a: &str, b: &str, n: usize) -> f64 {
    let n = n.max(1);
    let a = normalize_for_comparison(a);
    let b = normalize_for_comparison(b);
    let a_short = a.chars().count() < n;
    let b_short = b.chars().count() < n;

    match (a_short, b_short) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.0,
        (false, false) => jaccard(&char_shingles(&a, n), &char_shingles(&b, n)),
    }
}

/// `w · (1 - normalized_distance) + (1 - w) · jaccard`, with `w` clamped to
/// [0, 1]. A non-finite `w` falls back to [`DEFAULT_COMBINED_WEIGHT`].
pub fn combined_similarity(a: &str, b: &str, w: f64) -> f64 {
    let w = if w.is_finite() {
        w.clamp(0.0, 1.0)
    } else {
        DEFAULT_COMBINED_WEIGHT
    };
    w * (1.0 - normalized_distance(a, b)) + (1.0 - w) * jaccard_similarity(a, b)
}
