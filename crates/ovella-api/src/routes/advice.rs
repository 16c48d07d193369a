use axum::Json;
use serde::Deserialize;

use ovella_core::models::advice::{AssessmentSummary, Recommendation};
use ovella_core::models::assessment::AssessmentInput;
use ovella_core::models::prediction::PredictionResult;

/// A completed prediction plus the input that produced it, as returned by
/// `/predict`. The generative variants of these endpoints live elsewhere;
/// these handlers are the deterministic fallback.
#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    pub input: AssessmentInput,
    pub result: PredictionResult,
}

pub async fn summary(Json(req): Json<AdviceRequest>) -> Json<AssessmentSummary> {
    Json(ovella_engine::advice::summarize(&req.result))
}

pub async fn recommendations(Json(req): Json<AdviceRequest>) -> Json<Vec<Recommendation>> {
    Json(ovella_engine::advice::recommend(&req.input, &req.result))
}
