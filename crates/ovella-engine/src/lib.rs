//! ovella-engine
//!
//! The deterministic local risk model. Pure functions — no AWS, no network,
//! no shared state — so it can be invoked concurrently from any caller and
//! serves as the guaranteed fallback when the remote inference service is
//! unavailable.
//!
//! The pipeline is score → label → probabilities → ranked explanations;
//! [`evaluate`] runs the whole thing.

pub mod advice;
pub mod explain;
pub mod probability;
pub mod rules;
pub mod score;

use ovella_core::models::assessment::AssessmentInput;
use ovella_core::models::prediction::PredictionResult;

/// Run the full deterministic pipeline on a validated input.
///
/// Total: never fails for a validated input, and identical inputs always
/// produce identical results.
pub fn evaluate(input: &AssessmentInput) -> PredictionResult {
    let outcome = score::score(input);
    let label = score::label_for(outcome.risk_score);
    PredictionResult {
        label,
        probabilities: probability::probabilities_for(label),
        top_contributors: explain::rank(outcome.contributors),
    }
}
