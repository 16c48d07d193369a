use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::assessment::AssessmentInput;
use crate::models::prediction::PredictionResult;

/// The stored shape of a completed assessment: what the persistence
/// collaborator writes after a prediction. The prediction core itself
/// never retains one of these.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub user_id: String,
    pub input: AssessmentInput,
    pub result: PredictionResult,
    pub created_at: jiff::Timestamp,
}

impl AssessmentRecord {
    pub fn new(user_id: impl Into<String>, input: AssessmentInput, result: PredictionResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            input,
            result,
            created_at: jiff::Timestamp::now(),
        }
    }
}
