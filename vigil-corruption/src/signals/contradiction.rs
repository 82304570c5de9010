use chrono::{DateTime, Utc};
use vigil_core::config::CorruptionConfig;
use vigil_core::constants::{LOGICAL_FAILURE_RATE, SECONDS_PER_DAY};
use vigil_core::memory::MemoryProvenance;

use crate::context::{AssessmentContext, ContradictionEvidence};

/// Outcome of the three contradiction checks. `true` means contradicted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContradictionChecks {
    pub temporal: bool,
    pub logical: bool,
    pub factual: bool,
}

impl ContradictionChecks {
    /// Number of checks; the rate is always a multiple of one third.
    pub const COUNT: usize = 3;

    pub fn rate(&self) -> f64 {
        let hits = [self.temporal, self.logical, self.factual]
            .into_iter()
            .filter(|hit| *hit)
            .count();
        hits as f64 / Self::COUNT as f64
    }
}

/// Run the three checks.
///
/// Without evidence: temporal fires when the provenance is older than the
/// temporal window, logical when the prior usage-failure rate exceeds 0.5,
/// factual when provenance confidence is below the configured floor.
pub fn evaluate(
    provenance: &MemoryProvenance,
    prior_usage_failure_rate: f64,
    ctx: &AssessmentContext,
    config: &CorruptionConfig,
    now: DateTime<Utc>,
) -> ContradictionChecks {
    let window_days = config.temporal_window_days;
    let stale = |since: DateTime<Utc>| {
        let ms = (now - since).num_milliseconds().max(0) as f64;
        ms / 1000.0 / SECONDS_PER_DAY > window_days
    };

    let mut temporal = None;
    let mut logical = None;
    let mut factual = None;
    for evidence in &ctx.evidence {
        let (slot, hit) = match *evidence {
            ContradictionEvidence::Temporal { last_confirmed } => {
                (&mut temporal, stale(last_confirmed))
            }
            ContradictionEvidence::Logical { consistent } => (&mut logical, !consistent),
            ContradictionEvidence::Factual { verified } => (&mut factual, !verified),
        };
        *slot = Some(slot.unwrap_or(false) || hit);
    }

    ContradictionChecks {
        temporal: temporal.unwrap_or_else(|| stale(provenance.timestamp)),
        logical: logical.unwrap_or(prior_usage_failure_rate > LOGICAL_FAILURE_RATE),
        factual: factual.unwrap_or(provenance.confidence < config.factual_confidence_floor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use vigil_core::memory::{MemorySource, ValidationLevel};

    fn prov(confidence: f64, age_days: i64, now: DateTime<Utc>) -> MemoryProvenance {
        MemoryProvenance::new(
            MemorySource::ModelOutput,
            confidence,
            ValidationLevel::Basic,
            now - Duration::days(age_days),
        )
    }

    #[test]
    fn heuristics_without_evidence() {
        let now = Utc::now();
        let config = CorruptionConfig::default();
        let ctx = AssessmentContext::default();

        let fresh = evaluate(&prov(0.9, 1, now), 0.0, &ctx, &config, now);
        assert_eq!(fresh, ContradictionChecks::default());
        assert_eq!(fresh.rate(), 0.0);

        let bad = evaluate(&prov(0.3, 31, now), 0.6, &ctx, &config, now);
        assert!(bad.temporal && bad.logical && bad.factual);
        assert_eq!(bad.rate(), 1.0);
    }

    #[test]
    fn thresholds_are_strict() {
        let now = Utc::now();
        let config = CorruptionConfig::default();
        let ctx = AssessmentContext::default();
        let edge = evaluate(&prov(0.7, 30, now), 0.5, &ctx, &config, now);
        assert_eq!(edge, ContradictionChecks::default());
    }

    #[test]
    fn evidence_overrides_heuristics() {
        let now = Utc::now();
        let config = CorruptionConfig::default();
        let ctx = AssessmentContext::new()
            .with_evidence(ContradictionEvidence::Temporal {
                last_confirmed: now - Duration::days(2),
            })
            .with_evidence(ContradictionEvidence::Logical { consistent: false })
            .with_evidence(ContradictionEvidence::Factual { verified: true });

        let checks = evaluate(&prov(0.1, 200, now), 0.0, &ctx, &config, now);
        assert!(!checks.temporal);
        assert!(checks.logical);
        assert!(!checks.factual);
        assert!((checks.rate() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn any_contradicting_evidence_wins() {
        let now = Utc::now();
        let config = CorruptionConfig::default();
        let ctx = AssessmentContext::new()
            .with_evidence(ContradictionEvidence::Factual { verified: false })
            .with_evidence(ContradictionEvidence::Factual { verified: true });
        let checks = evaluate(&prov(0.95, 0, now), 0.0, &ctx, &config, now);
        assert!(checks.factual);
    }
}
