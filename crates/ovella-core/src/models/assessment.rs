use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Menstrual cycle regularity as reported in the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum CycleRegularity {
    Regular,
    Irregular,
}

/// Weekly exercise frequency buckets. Wire values match the questionnaire
/// option keys used by the clients (`1-2_week`, etc).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ExerciseFrequency {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "1-2_week")]
    OneToTwoPerWeek,
    #[serde(rename = "3-4_week")]
    ThreeToFourPerWeek,
    #[serde(rename = "5-plus_week")]
    FivePlusPerWeek,
}

/// Self-reported diet quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Diet {
    Balanced,
    Unhealthy,
    Other,
}

/// A validated questionnaire submission.
///
/// Construct via [`crate::validate::validate`]. The scoring engine assumes
/// the ranges documented here have already been enforced and never
/// re-checks them. Optional clinical and lab fields are carried through
/// untouched; the engine is free to ignore them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentInput {
    /// Age in years (12–60).
    pub age: f64,
    /// Body weight in kilograms (30–200).
    pub weight: f64,
    /// Height in centimeters (100–250).
    pub height: f64,
    /// Body mass index (10–50). Filled in from weight and height when the
    /// client did not supply it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    pub cycle_regularity: CycleRegularity,
    /// Cycle length in days (1–50).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_length: Option<f64>,
    pub exercise_frequency: ExerciseFrequency,
    pub diet: Diet,

    // Medical history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pregnant: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abortions: Option<f64>,

    // Lab values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fsh: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lh: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tsh: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amh: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prl: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vit_d3: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rbs: Option<f64>,

    // Symptom flags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_gain: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair_growth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_darkening: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair_loss: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pimples: Option<bool>,

    // Additional lifestyle flags and vitals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast_food: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_exercise: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bp_systolic: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bp_diastolic: Option<f64>,

    /// Fields the engine does not know about. Accepted and passed through
    /// untouched so the questionnaire can grow without a deploy here.
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
