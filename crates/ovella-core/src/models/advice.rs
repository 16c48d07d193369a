use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Plain-language restatement of a prediction, shown on the result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSummary {
    pub headline: String,
    pub body: String,
}

/// One lifestyle recommendation derived from the assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    /// Grouping key for the clients, e.g. `exercise` or `nutrition`.
    pub category: String,
    pub text: String,
}
