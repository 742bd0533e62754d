//! Options for the text normalizer.
//!
//! [`NormalizeOptions`] toggles each transform independently. Every field
//! has a documented default, and [`NormalizeOptions::comparison`] is the fixed
//! preset that all matchers and similarity primitives compare through.
//!
//! # Examples
//!
//! ```rust
//! use canonical::NormalizeOptions;
//!
//! let options = NormalizeOptions::default();
//! assert!(options.lowercase);
//! assert!(options.collapse_whitespace);
//! assert!(!options.strip_punctuation);
//! assert!(!options.strip_diacritics);
//! assert!(options.trim);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for [`normalize`](crate::normalize).
///
/// Cheap to copy and serde-friendly so it can be embedded in higher-level
/// configs.
///
/// ```json
/// {
///   "lowercase": true,
///   "collapse_whitespace": true,
///   "strip_punctuation": false,
///   "strip_diacritics": false,
///   "trim": true
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Apply locale-free Unicode lowercasing.
    ///
    /// Turkish dotted capital `İ` lowercases to `i` followed by U+0307, the
    /// same result on every platform.
    pub lowercase: bool,

    /// Collapse every run of Unicode whitespace into a single ASCII space.
    pub collapse_whitespace: bool,

    /// Remove Unicode punctuation characters.
    ///
    /// Punctuation is dropped, not replaced: `"it's"` becomes `"its"`.
    pub strip_punctuation: bool,

    /// Remove combining diacritical marks after canonical decomposition.
    ///
    /// Destructive for alphabets that rely on marks (`ş` becomes `s`,
    /// Devanagari vowel signs disappear), so it is opt-in.
    pub strip_diacritics: bool,

    /// Remove leading and trailing whitespace.
    pub trim: bool,
}

impl NormalizeOptions {
    /// The comparison preset: lowercase, collapse whitespace, trim, keep
    /// punctuation and diacritics.
    pub const fn comparison() -> Self {
        Self {
            lowercase: true,
            collapse_whitespace: true,
            strip_punctuation: false,
            strip_diacritics: false,
            trim: true,
        }
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn with_strip_punctuation(mut self, strip: bool) -> Self {
        self.strip_punctuation = strip;
        self
    }

    pub fn with_strip_diacritics(mut self, strip: bool) -> Self {
        self.strip_diacritics = strip;
        self
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self::comparison()
    }
}
