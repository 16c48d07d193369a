//! The weighted risk rules.
//!
//! Each rule triggers independently and contributes a fixed weight. The
//! order of this table is the evaluation order; it fixes the contributor
//! list's pre-sort order and breaks ties during ranking, so reordering it
//! changes observable output.

use ovella_core::models::assessment::{
    AssessmentInput, CycleRegularity, Diet, ExerciseFrequency,
};

/// One additive risk rule.
pub struct RiskRule {
    /// Display name, also the key into the explanation table.
    pub feature: &'static str,
    pub weight: f64,
    pub triggered: fn(&AssessmentInput) -> bool,
}

/// Evaluation order: Age, BMI, Cycle Regularity, Exercise Frequency, Diet.
pub const RULES: &[RiskRule] = &[
    RiskRule {
        feature: "Age",
        weight: 0.2,
        triggered: |input| input.age > 30.0,
    },
    RiskRule {
        feature: "BMI",
        weight: 0.3,
        triggered: |input| effective_bmi(input) > 25.0,
    },
    RiskRule {
        feature: "Cycle Regularity",
        weight: 0.4,
        triggered: |input| input.cycle_regularity == CycleRegularity::Irregular,
    },
    RiskRule {
        feature: "Exercise Frequency",
        weight: 0.2,
        triggered: |input| input.exercise_frequency == ExerciseFrequency::None,
    },
    RiskRule {
        feature: "Diet",
        weight: 0.15,
        triggered: |input| input.diet == Diet::Unhealthy,
    },
];

/// BMI used for scoring: the validated field when present, otherwise
/// computed from weight and height. Keeps the engine total even for
/// inputs constructed without going through the validator.
pub fn effective_bmi(input: &AssessmentInput) -> f64 {
    input
        .bmi
        .unwrap_or_else(|| input.weight / (input.height / 100.0).powi(2))
}
