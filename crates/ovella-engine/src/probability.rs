//! Probability synthesis.
//!
//! The displayed distribution is keyed only by the discrete label, not the
//! continuous score, so the probabilities shown to the user always agree
//! with the label next to them. Do not derive these from the risk score.

use ovella_core::models::prediction::{Probabilities, RiskLabel};

/// Fixed distribution for a label, normalized to sum exactly 1.0.
pub fn probabilities_for(label: RiskLabel) -> Probabilities {
    let (no_risk, early, high) = match label {
        RiskLabel::NoRisk => (0.7, 0.2, 0.1),
        RiskLabel::Early => (0.2, 0.6, 0.2),
        RiskLabel::High => (0.1, 0.2, 0.7),
    };
    normalize(Probabilities { no_risk, early, high })
}

/// Divide through by the sum. The table above already sums to 1.0 per row;
/// this guards future edits. A row that cannot be normalized is a
/// programmer error and should fail in tests, not be patched over.
fn normalize(raw: Probabilities) -> Probabilities {
    let sum = raw.sum();
    debug_assert!(
        sum.is_finite() && sum > 0.0,
        "probability table row must sum to a positive value, got {sum}"
    );
    let normalized = Probabilities {
        no_risk: raw.no_risk / sum,
        early: raw.early / sum,
        high: raw.high / sum,
    };
    debug_assert!(
        (normalized.sum() - 1.0).abs() < 1e-9,
        "normalized probabilities must sum to 1.0, got {}",
        normalized.sum()
    );
    normalized
}
