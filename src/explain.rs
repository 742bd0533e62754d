//! Template explanation attached to every [`AnalysisResult`](crate::AnalysisResult).

use std::fmt::Write;

use matcher::{MatchKind, MatchRecord};

/// Coarse band a visibility score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityBand {
    High,
    Medium,
    Low,
    VeryLow,
}

impl VisibilityBand {
    pub fn from_score(visibility: u8) -> Self {
        match visibility {
            70.. => VisibilityBand::High,
            40..=69 => VisibilityBand::Medium,
            10..=39 => VisibilityBand::Low,
            _ => VisibilityBand::VeryLow,
        }
    }

    fn headline(self) -> &'static str {
        match self {
            VisibilityBand::High => "High visibility: the response draws heavily on the source.",
            VisibilityBand::Medium => {
                "Medium visibility: parts of the source are reflected in the response."
            }
            VisibilityBand::Low => "Low visibility: the source is only occasionally reflected.",
            VisibilityBand::VeryLow => {
                "Very low visibility: the source is barely reflected in the response."
            }
        }
    }
}

/// Deterministic explanation built from the score band, match kinds and
/// average match position.
pub fn build_explanation(visibility: u8, matches: &[MatchRecord]) -> String {
    let mut text = format!(
        "Visibility {visibility}/100. {}",
        VisibilityBand::from_score(visibility).headline()
    );

    if matches.is_empty() {
        text.push_str(" No source sentence was found in the response.");
        return text;
    }

    let count = |kind: MatchKind| matches.iter().filter(|m| m.kind == kind).count();
    let average_position =
        matches.iter().map(|m| m.position as f64).sum::<f64>() / matches.len() as f64;

    let _ = write!(
        text,
        " {} matching sentence{} ({} exact, {} fuzzy). Average match position: {:.1}.",
        matches.len(),
        if matches.len() == 1 { "" } else { "s" },
        count(MatchKind::Exact),
        count(MatchKind::Fuzzy),
        average_position
    );
    text
}
