//! Remote response normalization.
//!
//! The deployed inference services have used two casing conventions over
//! time (`NoRisk` vs `noRisk`, `topContributors` vs `top_contributors`).
//! Rather than probing properties at runtime, the tolerated aliases are a
//! fixed part of the deserialization types, and everything is mapped into
//! the canonical [`PredictionResult`] in one step.

use serde::Deserialize;

use ovella_core::models::prediction::{Contributor, Probabilities, PredictionResult, RiskLabel};

use crate::error::RemoteError;

/// Raw response body from the inference service.
#[derive(Debug, Deserialize)]
pub struct RemoteResponse {
    pub label: RiskLabel,
    pub probabilities: RemoteProbabilities,
    #[serde(rename = "topContributors", alias = "top_contributors", default)]
    pub top_contributors: Vec<RemoteContributor>,
}

#[derive(Debug, Deserialize)]
pub struct RemoteProbabilities {
    #[serde(rename = "NoRisk", alias = "noRisk")]
    pub no_risk: f64,
    #[serde(rename = "Early", alias = "early")]
    pub early: f64,
    #[serde(rename = "High", alias = "high")]
    pub high: f64,
}

#[derive(Debug, Deserialize)]
pub struct RemoteContributor {
    pub feature: String,
    pub contribution: f64,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Map a raw remote response into the canonical result shape.
///
/// Probabilities are re-normalized so the sum-to-1.0 contract holds on the
/// remote path too; a non-finite value or non-positive sum is treated as a
/// malformed payload. The contributor list is clamped to three entries and
/// missing explanations are filled from the static table.
pub fn normalize(response: RemoteResponse) -> Result<PredictionResult, RemoteError> {
    let raw = response.probabilities;
    let values = [raw.no_risk, raw.early, raw.high];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(RemoteError::Malformed(
            "non-finite probability value".to_string(),
        ));
    }
    let sum: f64 = values.iter().sum();
    if sum <= 0.0 {
        return Err(RemoteError::Malformed(format!(
            "probabilities sum to {sum}, expected a positive value"
        )));
    }

    let probabilities = Probabilities {
        no_risk: raw.no_risk / sum,
        early: raw.early / sum,
        high: raw.high / sum,
    };

    let top_contributors = response
        .top_contributors
        .into_iter()
        .take(3)
        .map(|c| {
            let explanation = c
                .explanation
                .unwrap_or_else(|| ovella_engine::explain::explanation_for(&c.feature));
            Contributor {
                feature: c.feature,
                contribution: c.contribution,
                explanation: Some(explanation),
            }
        })
        .collect();

    Ok(PredictionResult {
        label: response.label,
        probabilities,
        top_contributors,
    })
}
