//! Deterministic summary and recommendation text.
//!
//! The product's generative summaries can be slow or unavailable; these
//! generators are the always-available fallback that satisfies the same
//! contract. Prose here is presentation copy, assembled from the ranked
//! contributors — nothing is computed that the prediction did not already
//! establish.

use ovella_core::models::advice::{AssessmentSummary, Recommendation};
use ovella_core::models::assessment::AssessmentInput;
use ovella_core::models::prediction::{PredictionResult, RiskLabel};

/// Plain-language restatement of a prediction.
pub fn summarize(result: &PredictionResult) -> AssessmentSummary {
    let confidence = (label_probability(result) * 100.0).round();

    let mut body = format!(
        "Based on your responses, your result is \"{}\" with {confidence}% confidence.",
        result.label
    );
    if result.top_contributors.is_empty() {
        body.push_str(" No individual risk factors stood out in your responses.");
    } else {
        body.push_str(" The main factors behind this result:");
        for contributor in &result.top_contributors {
            body.push(' ');
            match &contributor.explanation {
                Some(text) => body.push_str(text),
                None => body.push_str(&contributor.feature),
            }
        }
    }

    AssessmentSummary {
        headline: format!("Your assessment indicates: {}", result.label),
        body,
    }
}

/// Lifestyle recommendations derived from the ranked contributors, with a
/// baseline entry when nothing triggered.
pub fn recommend(input: &AssessmentInput, result: &PredictionResult) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = result
        .top_contributors
        .iter()
        .map(|contributor| recommendation_for(&contributor.feature, input))
        .collect();

    if recommendations.is_empty() {
        recommendations.push(Recommendation {
            category: "general".to_string(),
            text: "Your responses did not raise any risk flags. Keep up your current \
                   exercise and eating habits, and reassess if your symptoms change."
                .to_string(),
        });
    }

    recommendations
}

fn recommendation_for(feature: &str, input: &AssessmentInput) -> Recommendation {
    let (category, text) = match feature {
        "Exercise Frequency" => (
            "exercise",
            "Start small: 20\u{2013}30 minutes of moderate activity, three to four days a \
             week, measurably improves insulin sensitivity and cycle regularity."
                .to_string(),
        ),
        "Diet" => (
            "nutrition",
            "Shift toward whole foods: vegetables, lean protein, and whole grains. \
             Cutting processed food and added sugar helps manage PCOS symptoms."
                .to_string(),
        ),
        "BMI" => (
            "weight",
            format!(
                "At your current weight of {} kg, even a 5\u{2013}10% gradual reduction \
                 can meaningfully lower PCOS risk and improve hormonal balance.",
                input.weight
            ),
        ),
        "Cycle Regularity" => (
            "cycle",
            "Log your cycle dates and symptoms. Bring the log to a clinician \u{2014} \
             persistent irregularity is the single strongest signal worth evaluating."
                .to_string(),
        ),
        "Age" => (
            "screening",
            "Risk profiles shift after 30. Periodic check-ins with your clinician help \
             catch changes early."
                .to_string(),
        ),
        other => ("general", format!("Discuss {other} with your clinician.")),
    };

    Recommendation {
        category: category.to_string(),
        text,
    }
}

fn label_probability(result: &PredictionResult) -> f64 {
    match result.label {
        RiskLabel::NoRisk => result.probabilities.no_risk,
        RiskLabel::Early => result.probabilities.early,
        RiskLabel::High => result.probabilities.high,
    }
}
