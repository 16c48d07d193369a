use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// A single field-level problem found while validating a submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{field}: {message}")]
pub struct FieldViolation {
    /// Path of the offending field, e.g. `age` or `cycleRegularity`.
    pub field: String,
    pub message: String,
}

/// Every violation in one submission, aggregated.
///
/// Validation never stops at the first bad field — the client gets the
/// complete list in a single round trip.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("validation failed: {}", summarize(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(FieldViolation::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation {
                field: field.into(),
                message: message.into(),
            }],
        }
    }
}
