use matcher::MatchRecord;

use crate::types::{MetricKind, MetricMetadata, MetricResult, PositionContribution};

/// Decay constant used when none (or an unusable one) is configured.
pub const DEFAULT_LAMBDA_DECAY: f64 = 10.0;

/// `e^(-position / lambda_decay)`: 1.0 at the first response sentence,
/// strictly decreasing afterwards.
pub fn calculate_position_weight(position: usize, lambda_decay: f64) -> f64 {
    (-(position as f64) / lambda_decay).exp()
}

/// Returns `lambda_decay` when it is finite and positive.
pub fn valid_lambda_decay(lambda_decay: f64) -> Option<f64> {
    (lambda_decay.is_finite() && lambda_decay > 0.0).then_some(lambda_decay)
}

/// Word-count coverage where matches early in the response weigh more.
///
/// Earlier sentences of a generated answer draw most of the attribution, so
/// each match is scaled by [`calculate_position_weight`] before summing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionAdjustedMetric {
    lambda_decay: f64,
}

impl PositionAdjustedMetric {
    /// Non-positive or non-finite decay falls back to [`DEFAULT_LAMBDA_DECAY`].
    pub fn new(lambda_decay: f64) -> Self {
        Self {
            lambda_decay: valid_lambda_decay(lambda_decay).unwrap_or(DEFAULT_LAMBDA_DECAY),
        }
    }

    pub fn lambda_decay(&self) -> f64 {
        self.lambda_decay
    }

    pub fn calculate(&self, matches: &[MatchRecord], total_response_words: usize) -> MetricResult {
        let contributions: Vec<PositionContribution> = matches
            .iter()
            .map(|m| {
                let weight = calculate_position_weight(m.position, self.lambda_decay);
                PositionContribution {
                    position: m.position,
                    word_count: m.word_count,
                    weight,
                    contribution: m.word_count as f64 * weight,
                }
            })
            .collect();
        let weighted_words: f64 = contributions.iter().map(|c| c.contribution).sum();

        let raw_value = if total_response_words == 0 {
            0.0
        } else {
            weighted_words / total_response_words as f64
        };

        MetricResult::new(
            MetricKind::PositionAdjusted,
            raw_value,
            MetricMetadata::PositionAdjusted {
                lambda_decay: self.lambda_decay,
                weighted_words,
                total_words: total_response_words,
                match_count: matches.len(),
                contributions,
            },
        )
    }

    pub fn explain(&self, result: &MetricResult) -> String {
        let MetricMetadata::PositionAdjusted {
            lambda_decay,
            contributions,
            ..
        } = &result.metadata
        else {
            return format!("Position-adjusted coverage: {:.1}%.", result.percent());
        };

        let mut text = format!(
            "Position-adjusted coverage is {:.1}% (decay {lambda_decay}).",
            result.percent()
        );
        if let Some(top) = contributions
            .iter()
            .max_by(|a, b| a.contribution.total_cmp(&b.contribution))
        {
            text.push_str(&format!(
                " Strongest contribution: {} words at response sentence {} (weight {:.2}).",
                top.word_count,
                top.position + 1,
                top.weight
            ));
        }
        text
    }
}

impl Default for PositionAdjustedMetric {
    fn default() -> Self {
        Self::new(DEFAULT_LAMBDA_DECAY)
    }
}
