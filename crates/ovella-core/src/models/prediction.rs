use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The discrete risk category shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskLabel {
    #[serde(rename = "No Risk")]
    NoRisk,
    Early,
    High,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::NoRisk => "No Risk",
            RiskLabel::Early => "Early",
            RiskLabel::High => "High",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named factor and how much it pushed the risk score upward.
///
/// Produced by scoring without an explanation; the ranking step attaches
/// one. Ordering is not meaningful until ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Contributor {
    pub feature: String,
    /// Weight in [0, 1].
    pub contribution: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Three-way probability distribution over the risk labels.
///
/// The three values always sum to 1.0 (up to floating-point epsilon).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Probabilities {
    #[serde(rename = "NoRisk")]
    pub no_risk: f64,
    #[serde(rename = "Early")]
    pub early: f64,
    #[serde(rename = "High")]
    pub high: f64,
}

impl Probabilities {
    pub fn sum(&self) -> f64 {
        self.no_risk + self.early + self.high
    }
}

/// The sole externally visible output of a prediction. Immutable once
/// produced; the caller owns it and may persist, cache, or log it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PredictionResult {
    pub label: RiskLabel,
    pub probabilities: Probabilities,
    /// At most three contributors, strongest first, each with an
    /// explanation attached.
    pub top_contributors: Vec<Contributor>,
}
