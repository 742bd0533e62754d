//! Edit distance and the normalized similarity derived from it.

use canonical::normalize_for_comparison;

/// Minimum number of single-character insertions, deletions and
/// substitutions that turn `a` into `b`.
///
/// Works on `char`s, not bytes, so `"ş"` and `"s"` are one substitution
/// apart. Two rolling rows sized by the shorter input keep memory at
/// O(min(|a|, |b|)).
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr: Vec<usize> = vec![0; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let substitution = prev[j] + usize::from(lc != sc);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// `1 - distance / max_len` over the comparison-normalized inputs.
///
/// Returns 0.0 when either side normalizes to empty, including when both
/// do. Contrast with [`ngram_similarity`](crate::ngram_similarity), which
/// treats two too-short inputs as equal.
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_normalized(&normalize_for_comparison(a), &normalize_for_comparison(b))
}

/// Same as [`similarity`] for inputs that already went through
/// [`normalize_for_comparison`]. Matchers use this to normalize each
/// sentence once instead of once per pair.
pub fn similarity_normalized(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    let max_len = a.chars().count().max(b.chars().count());
    1.0 - levenshtein_distance(a, b) as f64 / max_len as f64
}

/// Complement of [`similarity`], in [0, 1].
pub fn normalized_distance(a: &str, b: &str) -> f64 {
    1.0 - similarity(a, b)
}
