use vigil_core::constants::{
    WEIGHT_AGE_DECAY, WEIGHT_CONTRADICTION, WEIGHT_PROVENANCE, WEIGHT_USAGE_FAILURE,
};
use vigil_core::memory::SignalScores;

/// Weighted composite corruption score, clamped to [0.0, 1.0].
///
/// ```text
/// score = 0.4·contradiction + 0.2·usageFailure + 0.2·ageDecay + 0.2·provenanceWeakness
/// ```
pub fn corruption_score(signals: &SignalScores) -> f64 {
    let raw = WEIGHT_CONTRADICTION * signals.contradiction_rate
        + WEIGHT_USAGE_FAILURE * signals.usage_failure_rate
        + WEIGHT_AGE_DECAY * signals.age_decay
        + WEIGHT_PROVENANCE * signals.provenance_weakness;
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contradiction_only() {
        let signals = SignalScores {
            contradiction_rate: 1.0,
            ..Default::default()
        };
        assert!((corruption_score(&signals) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn all_signals_saturated() {
        let signals = SignalScores {
            contradiction_rate: 1.0,
            usage_failure_rate: 1.0,
            age_decay: 1.0,
            provenance_weakness: 1.0,
        };
        assert!((corruption_score(&signals) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let signals = SignalScores {
            contradiction_rate: 5.0,
            usage_failure_rate: 5.0,
            age_decay: 0.0,
            provenance_weakness: 0.0,
        };
        assert_eq!(corruption_score(&signals), 1.0);
    }
}
