//! Top-contributor ranking and explanation text.

use std::cmp::Ordering;

use ovella_core::models::prediction::Contributor;

/// How many contributors the result surfaces.
const TOP_N: usize = 3;

/// Static explanation copy, keyed by feature name. This is the product's
/// display text; the clients render it verbatim.
const EXPLANATIONS: &[(&str, &str)] = &[
    (
        "Age",
        "Age can be a factor in PCOS risk, especially for women over 30.",
    ),
    (
        "BMI",
        "Higher BMI is associated with increased PCOS risk. Maintaining a healthy weight can help manage symptoms.",
    ),
    (
        "Cycle Regularity",
        "Irregular menstrual cycles are a key indicator of PCOS. Regular cycles suggest lower risk.",
    ),
    (
        "Exercise Frequency",
        "Regular exercise helps manage PCOS symptoms and reduces risk factors.",
    ),
    (
        "Diet",
        "A balanced diet rich in whole foods can help manage PCOS symptoms and improve overall health.",
    ),
];

/// Explanation for a feature, with a generated fallback for features the
/// table does not know (e.g. from a newer remote model).
pub fn explanation_for(feature: &str) -> String {
    EXPLANATIONS
        .iter()
        .find(|(name, _)| *name == feature)
        .map(|(_, text)| (*text).to_string())
        .unwrap_or_else(|| format!("{feature} contributes to your risk assessment."))
}

/// Sort contributors strongest-first, keep the top three, and attach
/// explanations.
///
/// The sort is stable, so equal weights keep their rule evaluation order
/// (Age outranks Exercise Frequency at 0.2, for example).
pub fn rank(mut contributors: Vec<Contributor>) -> Vec<Contributor> {
    contributors.sort_by(|a, b| {
        b.contribution
            .partial_cmp(&a.contribution)
            .unwrap_or(Ordering::Equal)
    });
    contributors.truncate(TOP_N);
    for contributor in &mut contributors {
        if contributor.explanation.is_none() {
            contributor.explanation = Some(explanation_for(&contributor.feature));
        }
    }
    contributors
}
