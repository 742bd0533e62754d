//! Advisory messages derived from a finished analysis.

use serde::{Deserialize, Serialize};

use crate::result::AnalysisResult;

/// Response sentences counted as the top of an answer.
const EARLY_POSITIONS: usize = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Success,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Insight {
    pub kind: InsightKind,
    pub message: String,
}

impl Insight {
    fn new(kind: InsightKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Pure function of `result`; nothing is recomputed.
pub fn get_insights(result: &AnalysisResult) -> Vec<Insight> {
    let mut insights = Vec::new();

    if result.visibility >= 70 {
        insights.push(Insight::new(
            InsightKind::Success,
            format!(
                "High visibility ({}/100): the response relies heavily on this source.",
                result.visibility
            ),
        ));
    } else if result.visibility < 40 {
        insights.push(Insight::new(
            InsightKind::Warning,
            format!(
                "Low visibility ({}/100): state key facts in short, quotable sentences.",
                result.visibility
            ),
        ));
    }

    if result.matches.is_empty() {
        insights.push(Insight::new(
            InsightKind::Warning,
            "No source sentence was found in the response.",
        ));
        return insights;
    }

    let early = result.early_match_count(EARLY_POSITIONS);
    if early > 0 {
        insights.push(Insight::new(
            InsightKind::Info,
            format!("{early} match(es) appear in the first {EARLY_POSITIONS} response sentences."),
        ));
    }

    let exact = result.exact_match_count();
    if exact > 0 {
        insights.push(Insight::new(
            InsightKind::Success,
            format!("{exact} source sentence(s) were reused verbatim."),
        ));
    }

    insights
}
