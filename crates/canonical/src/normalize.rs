use std::borrow::Cow;

use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::NormalizeOptions;

/// Canonicalize `text` according to `options`.
///
/// Total over any input: empty and whitespace-only text normalizes to the
/// empty string under the default options.
pub fn normalize(text: &str, options: &NormalizeOptions) -> String {
    // Mark removal needs decomposed input, so it runs before anything else.
    let base: Cow<str> = if options.strip_diacritics {
        Cow::Owned(
            text.nfd()
                .filter(|ch| !ch.is_mark_nonspacing())
                .nfc()
                .collect::<String>(),
        )
    } else {
        Cow::Borrowed(text)
    };

    let mut out = String::with_capacity(base.len());
    let mut pending_space = false;

    // Graphemes keep multi-codepoint clusters together; lowercasing may still
    // expand one char into several.
    for grapheme in base.graphemes(true) {
        if options.lowercase {
            for lower in grapheme.to_lowercase().chars() {
                dispatch_char(lower, options, &mut out, &mut pending_space);
            }
        } else {
            for ch in grapheme.chars() {
                dispatch_char(ch, options, &mut out, &mut pending_space);
            }
        }
    }
    if pending_space {
        out.push(' ');
    }

    if options.trim {
        let trimmed = out.trim();
        if trimmed.len() != out.len() {
            return trimmed.to_string();
        }
    }
    out
}

/// Fixed comparison preset: lowercase, collapsed whitespace, trimmed,
/// punctuation retained.
pub fn normalize_for_comparison(text: &str) -> String {
    normalize(text, &NormalizeOptions::comparison())
}

fn dispatch_char(ch: char, options: &NormalizeOptions, out: &mut String, pending_space: &mut bool) {
    if options.strip_punctuation && ch.is_punctuation() {
        return;
    }
    if options.collapse_whitespace && ch.is_whitespace() {
        *pending_space = true;
        return;
    }
    if *pending_space {
        out.push(' ');
        *pending_space = false;
    }
    out.push(ch);
}
