//! Input normalization and validation.
//!
//! Turns a raw, loosely-typed submission into an [`AssessmentInput`].
//! Numeric strings are coerced before range checks (mobile clients send
//! form values as strings), every violation is collected rather than
//! failing on the first, and BMI is derived from weight and height when
//! the client did not supply it.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{FieldViolation, ValidationError};
use crate::models::assessment::{
    AssessmentInput, CycleRegularity, Diet, ExerciseFrequency,
};

/// Wire keys the validator understands. Anything else lands in
/// [`AssessmentInput::extra`] untouched.
const KNOWN_FIELDS: &[&str] = &[
    "age",
    "weight",
    "height",
    "bmi",
    "cycleRegularity",
    "cycleLength",
    "exerciseFrequency",
    "diet",
    "medicalHistory",
    "pregnant",
    "abortions",
    "fsh",
    "lh",
    "tsh",
    "amh",
    "prl",
    "vitD3",
    "rbs",
    "weightGain",
    "hairGrowth",
    "skinDarkening",
    "hairLoss",
    "pimples",
    "fastFood",
    "regularExercise",
    "bpSystolic",
    "bpDiastolic",
];

/// Validate a raw submission, aggregating every field violation.
pub fn validate(raw: &Value) -> Result<AssessmentInput, ValidationError> {
    let Some(obj) = raw.as_object() else {
        return Err(ValidationError::single("$", "expected a JSON object"));
    };

    let mut violations = Vec::new();

    let age = require_number(obj, "age", 12.0, 60.0, &mut violations);
    let weight = require_number(obj, "weight", 30.0, 200.0, &mut violations);
    let height = require_number(obj, "height", 100.0, 250.0, &mut violations);
    let bmi = optional_number(obj, "bmi", Some((10.0, 50.0)), &mut violations);
    let cycle_regularity = require_variant::<CycleRegularity>(
        obj,
        "cycleRegularity",
        "regular, irregular",
        &mut violations,
    );
    let cycle_length = optional_number(obj, "cycleLength", Some((1.0, 50.0)), &mut violations);
    let exercise_frequency = require_variant::<ExerciseFrequency>(
        obj,
        "exerciseFrequency",
        "none, 1-2_week, 3-4_week, 5-plus_week",
        &mut violations,
    );
    let diet = require_variant::<Diet>(obj, "diet", "balanced, unhealthy, other", &mut violations);

    let medical_history = optional_string(obj, "medicalHistory", &mut violations);
    let pregnant = optional_bool(obj, "pregnant", &mut violations);
    let abortions = optional_number(obj, "abortions", Some((0.0, f64::MAX)), &mut violations);

    let fsh = optional_number(obj, "fsh", None, &mut violations);
    let lh = optional_number(obj, "lh", None, &mut violations);
    let tsh = optional_number(obj, "tsh", None, &mut violations);
    let amh = optional_number(obj, "amh", None, &mut violations);
    let prl = optional_number(obj, "prl", None, &mut violations);
    let vit_d3 = optional_number(obj, "vitD3", None, &mut violations);
    let rbs = optional_number(obj, "rbs", None, &mut violations);

    let weight_gain = optional_bool(obj, "weightGain", &mut violations);
    let hair_growth = optional_bool(obj, "hairGrowth", &mut violations);
    let skin_darkening = optional_bool(obj, "skinDarkening", &mut violations);
    let hair_loss = optional_bool(obj, "hairLoss", &mut violations);
    let pimples = optional_bool(obj, "pimples", &mut violations);
    let fast_food = optional_bool(obj, "fastFood", &mut violations);
    let regular_exercise = optional_bool(obj, "regularExercise", &mut violations);
    let bp_systolic = optional_number(obj, "bpSystolic", None, &mut violations);
    let bp_diastolic = optional_number(obj, "bpDiastolic", None, &mut violations);

    if !violations.is_empty() {
        return Err(ValidationError { violations });
    }

    // No violations recorded means every required field parsed.
    let (
        Some(age),
        Some(weight),
        Some(height),
        Some(cycle_regularity),
        Some(exercise_frequency),
        Some(diet),
    ) = (age, weight, height, cycle_regularity, exercise_frequency, diet)
    else {
        return Err(ValidationError::single("$", "incomplete submission"));
    };

    // Derive BMI only when the client did not supply one.
    let bmi = bmi.or_else(|| Some(round2(weight / (height / 100.0).powi(2))));

    let extra: Map<String, Value> = obj
        .iter()
        .filter(|(key, _)| !KNOWN_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(AssessmentInput {
        age,
        weight,
        height,
        bmi,
        cycle_regularity,
        cycle_length,
        exercise_frequency,
        diet,
        medical_history,
        pregnant,
        abortions,
        fsh,
        lh,
        tsh,
        amh,
        prl,
        vit_d3,
        rbs,
        weight_gain,
        hair_growth,
        skin_darkening,
        hair_loss,
        pimples,
        fast_food,
        regular_exercise,
        bp_systolic,
        bp_diastolic,
        extra,
    })
}

/// Round to two decimal places, matching what the clients display.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Accept a JSON number or a numeric string.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn present<'a>(obj: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    obj.get(field).filter(|v| !v.is_null())
}

fn require_number(
    obj: &Map<String, Value>,
    field: &str,
    min: f64,
    max: f64,
    violations: &mut Vec<FieldViolation>,
) -> Option<f64> {
    let Some(value) = present(obj, field) else {
        push(violations, field, "required field is missing");
        return None;
    };
    check_number(value, field, Some((min, max)), violations)
}

fn optional_number(
    obj: &Map<String, Value>,
    field: &str,
    range: Option<(f64, f64)>,
    violations: &mut Vec<FieldViolation>,
) -> Option<f64> {
    let value = present(obj, field)?;
    check_number(value, field, range, violations)
}

fn check_number(
    value: &Value,
    field: &str,
    range: Option<(f64, f64)>,
    violations: &mut Vec<FieldViolation>,
) -> Option<f64> {
    let Some(number) = coerce_number(value) else {
        push(violations, field, "expected a number");
        return None;
    };
    if let Some((min, max)) = range
        && (number < min || number > max)
    {
        let message = if max == f64::MAX {
            format!("must be at least {min}")
        } else {
            format!("must be between {min} and {max}")
        };
        push(violations, field, message);
        return None;
    }
    Some(number)
}

fn require_variant<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    field: &str,
    options: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<T> {
    let Some(value) = present(obj, field) else {
        push(violations, field, "required field is missing");
        return None;
    };
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            push(violations, field, format!("expected one of: {options}"));
            None
        }
    }
}

fn optional_bool(
    obj: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<bool> {
    let value = present(obj, field)?;
    match value.as_bool() {
        Some(b) => Some(b),
        None => {
            push(violations, field, "expected a boolean");
            None
        }
    }
}

fn optional_string(
    obj: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    let value = present(obj, field)?;
    match value.as_str() {
        Some(s) => Some(s.to_string()),
        None => {
            push(violations, field, "expected a string");
            None
        }
    }
}

fn push(violations: &mut Vec<FieldViolation>, field: &str, message: impl Into<String>) {
    violations.push(FieldViolation {
        field: field.to_string(),
        message: message.into(),
    });
}
