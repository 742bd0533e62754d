//! # Sentence matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` finds which source sentences reappear in a response. It consumes
//! two ordered sentence sequences (as produced by
//! [`canonical::split_into_sentences`]) and returns [`MatchRecord`]s: which
//! source sentence, which response sentence, where in the response, and how
//! similar they are.
//!
//! ## Core Types
//!
//! - [`MatchKind`]: selects the strategy and labels the evidence:
//!   - `Exact`: normalized containment, first hit wins, similarity 1.0.
//!   - `Fuzzy`: best Levenshtein similarity at or above a threshold.
//!   - `Semantic`: scored over whole texts by the semantic metric; the
//!     matcher itself reports nothing.
//! - [`Matcher`]: sum type over the three strategies with one
//!   [`find_matches`](Matcher::find_matches) contract.
//! - [`MatchOptions`]: per-call threshold and case sensitivity.
//!
//! Combining several matchers (run order, one record per source sentence,
//! ordering by position) is the caller's policy, not a matcher's.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{MatchKind, MatchOptions, Matcher};
//!
//! let source = vec!["Bu metin birebir eşleşecek."];
//! let response = vec!["Giriş.", "Bu metin birebir eşleşecek."];
//!
//! let hits = Matcher::from_kind(MatchKind::Exact, 0.8)
//!     .find_matches(&source, &response, &MatchOptions::default());
//!
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].position, 1);
//! assert_eq!(hits[0].kind, MatchKind::Exact);
//! ```

pub mod engine;
mod exact;
mod fuzzy;
pub mod types;

pub use crate::engine::{Matcher, SemanticMatcher};
pub use crate::exact::ExactMatcher;
pub use crate::fuzzy::FuzzyMatcher;
pub use crate::types::{MatchError, MatchKind, MatchOptions, MatchRecord, DEFAULT_FUZZY_THRESHOLD};
