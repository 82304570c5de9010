//! Quarantine state machine.
//!
//! Status is recomputed from the composite score on every assessment. A manual
//! quarantine places a hold that keeps the memory quarantined regardless of
//! score until it is explicitly released. Quarantine never removes content.

use chrono::{DateTime, Utc};
use tracing::warn;

use vigil_core::config::CorruptionConfig;
use vigil_core::memory::{AssessmentEntry, MemoryHealth, QuarantineStatus};
use vigil_observability::quarantine_span;

/// History reason of a regular assessment.
pub const REASON_ASSESSED: &str = "assessed";
/// History reason appended when an assessment lands in quarantine.
pub const REASON_AUTO_QUARANTINE: &str = "auto_quarantine";
/// History reason appended when a manual hold is lifted.
pub const REASON_RELEASED: &str = "released";

/// `score ≥ quarantine → quarantined`, `score ≥ decay → decayed`, else healthy.
pub fn status_for(score: f64, config: &CorruptionConfig) -> QuarantineStatus {
    if score >= config.quarantine_threshold {
        QuarantineStatus::Quarantined
    } else if score >= config.decay_threshold {
        QuarantineStatus::Decayed
    } else {
        QuarantineStatus::Healthy
    }
}

/// Status after an assessment, honoring a manual hold.
pub fn resolve_status(health: &MemoryHealth, config: &CorruptionConfig) -> QuarantineStatus {
    if health.quarantine_hold.is_some() {
        QuarantineStatus::Quarantined
    } else {
        status_for(health.corruption_score, config)
    }
}

/// Record the automatic quarantine action.
pub fn auto_quarantine(health: &mut MemoryHealth, now: DateTime<Utc>) {
    let _span = quarantine_span!(health.memory_id, REASON_AUTO_QUARANTINE).entered();
    health.quarantine_status = QuarantineStatus::Quarantined;
    health.assessment_history.push(AssessmentEntry::new(
        now,
        health.corruption_score,
        REASON_AUTO_QUARANTINE,
    ));
    warn!(score = health.corruption_score, "memory auto-quarantined");
}

/// Manual quarantine: hold the memory in quarantine and record why.
pub fn place_hold(health: &mut MemoryHealth, reason: &str, now: DateTime<Utc>) {
    let _span = quarantine_span!(health.memory_id, reason).entered();
    health.quarantine_hold = Some(reason.to_string());
    health.quarantine_status = QuarantineStatus::Quarantined;
    health
        .assessment_history
        .push(AssessmentEntry::new(now, health.corruption_score, reason));
    warn!(score = health.corruption_score, "memory quarantined");
}

/// Lift a manual hold. Status falls back to what the current score implies.
/// Returns false if no hold was in place.
pub fn release_hold(health: &mut MemoryHealth, config: &CorruptionConfig, now: DateTime<Utc>) -> bool {
    if health.quarantine_hold.take().is_none() {
        return false;
    }
    health.quarantine_status = status_for(health.corruption_score, config);
    health.assessment_history.push(AssessmentEntry::new(
        now,
        health.corruption_score,
        REASON_RELEASED,
    ));
    warn!(
        memory_id = %health.memory_id,
        status = %health.quarantine_status,
        "quarantine hold released"
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banded() -> CorruptionConfig {
        CorruptionConfig {
            decay_threshold: 0.4,
            quarantine_threshold: 0.7,
            ..Default::default()
        }
    }

    #[test]
    fn bands_with_separate_thresholds() {
        let config = banded();
        assert_eq!(status_for(0.39, &config), QuarantineStatus::Healthy);
        assert_eq!(status_for(0.4, &config), QuarantineStatus::Decayed);
        assert_eq!(status_for(0.69, &config), QuarantineStatus::Decayed);
        assert_eq!(status_for(0.7, &config), QuarantineStatus::Quarantined);
    }

    #[test]
    fn default_thresholds_skip_decayed() {
        let config = CorruptionConfig::default();
        assert_eq!(status_for(0.4, &config), QuarantineStatus::Healthy);
        assert_eq!(status_for(0.69, &config), QuarantineStatus::Healthy);
        assert_eq!(status_for(0.7, &config), QuarantineStatus::Quarantined);
    }

    #[test]
    fn hold_overrides_score_until_released() {
        let now = Utc::now();
        let config = banded();
        let mut health = MemoryHealth::initial("m", now, 10);

        place_hold(&mut health, "operator review", now);
        assert_eq!(resolve_status(&health, &config), QuarantineStatus::Quarantined);
        assert_eq!(health.assessment_history.len(), 2);
        assert_eq!(
            health.assessment_history.last().map(|e| e.reason.as_str()),
            Some("operator review")
        );

        assert!(release_hold(&mut health, &config, now));
        assert_eq!(health.quarantine_status, QuarantineStatus::Healthy);
        assert!(!release_hold(&mut health, &config, now));
        assert_eq!(health.assessment_history.len(), 3);
    }
}
