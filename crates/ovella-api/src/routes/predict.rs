use axum::extract::State;
use axum::Json;
use serde_json::Value;

use ovella_core::models::prediction::PredictionResult;

use crate::error::ApiError;
use crate::state::AppState;

/// Run a risk prediction.
///
/// The body is the raw questionnaire submission; validation failures come
/// back as 400 with every violation listed. A valid submission always gets
/// a 200 — remote-service trouble is handled inside the orchestrator.
pub async fn predict(
    State(state): State<AppState>,
    Json(raw): Json<Value>,
) -> Result<Json<PredictionResult>, ApiError> {
    let result = state.orchestrator.predict(&raw).await?;
    tracing::info!(label = %result.label, "prediction completed");
    Ok(Json(result))
}
