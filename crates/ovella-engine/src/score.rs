//! Additive weighted rule evaluation and label thresholds.

use ovella_core::models::assessment::AssessmentInput;
use ovella_core::models::prediction::{Contributor, RiskLabel};

use crate::rules::RULES;

/// The raw scoring output: a capped aggregate score plus the contributors
/// that produced it, in evaluation order.
#[derive(Debug, Clone)]
pub struct ScoreOutcome {
    /// Aggregate risk in [0, 1]. Internal only — used to select a label,
    /// never shown to the user.
    pub risk_score: f64,
    pub contributors: Vec<Contributor>,
}

/// Evaluate every rule against a validated input.
///
/// Rules are independent and non-exclusive; the score is the sum of
/// triggered weights, capped at 1.0.
pub fn score(input: &AssessmentInput) -> ScoreOutcome {
    let mut total = 0.0;
    let mut contributors = Vec::new();

    for rule in RULES {
        if (rule.triggered)(input) {
            total += rule.weight;
            contributors.push(Contributor {
                feature: rule.feature.to_string(),
                contribution: rule.weight,
                explanation: None,
            });
        }
    }

    ScoreOutcome {
        risk_score: total.min(1.0),
        contributors,
    }
}

/// Map a risk score onto a label. 0.30 and 0.60 belong to the higher band.
pub fn label_for(risk_score: f64) -> RiskLabel {
    if risk_score < 0.3 {
        RiskLabel::NoRisk
    } else if risk_score < 0.6 {
        RiskLabel::Early
    } else {
        RiskLabel::High
    }
}
