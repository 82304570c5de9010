use vigil_core::constants::USAGE_FAILURE_SCORE;
use vigil_core::memory::{AssessmentEntry, BoundedHistory};

/// Fraction of history entries whose recorded score exceeded the failure score.
/// An empty history has no failures.
pub fn failure_rate(history: &BoundedHistory<AssessmentEntry>) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    let failures = history
        .iter()
        .filter(|entry| entry.score > USAGE_FAILURE_SCORE)
        .count();
    failures as f64 / history.len() as f64
}
