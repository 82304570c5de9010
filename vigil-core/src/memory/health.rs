use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::history::{AssessmentEntry, BoundedHistory};
use super::status::QuarantineStatus;
use crate::constants::REASON_REGISTERED;

/// The four corruption sub-scores, each in [0.0, 1.0].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalScores {
    pub contradiction_rate: f64,
    pub usage_failure_rate: f64,
    pub age_decay: f64,
    pub provenance_weakness: f64,
}

/// Health record of a memory: sub-scores, composite score, quarantine state,
/// and a bounded audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryHealth {
    pub memory_id: String,
    pub contradiction_rate: f64,
    pub usage_failure_rate: f64,
    pub age_decay: f64,
    pub provenance_weakness: f64,
    pub corruption_score: f64,
    pub last_assessed: DateTime<Utc>,
    pub quarantine_status: QuarantineStatus,
    /// Reason of a manual quarantine that holds across re-assessments until released.
    #[serde(default)]
    pub quarantine_hold: Option<String>,
    pub assessment_history: BoundedHistory<AssessmentEntry>,
}

impl MemoryHealth {
    /// Zero scores, healthy, and a single "registered" history entry.
    pub fn initial(memory_id: impl Into<String>, now: DateTime<Utc>, max_history: usize) -> Self {
        let mut assessment_history = BoundedHistory::new(max_history);
        assessment_history.push(AssessmentEntry::new(now, 0.0, REASON_REGISTERED));
        Self {
            memory_id: memory_id.into(),
            contradiction_rate: 0.0,
            usage_failure_rate: 0.0,
            age_decay: 0.0,
            provenance_weakness: 0.0,
            corruption_score: 0.0,
            last_assessed: now,
            quarantine_status: QuarantineStatus::Healthy,
            quarantine_hold: None,
            assessment_history,
        }
    }

    pub fn signals(&self) -> SignalScores {
        SignalScores {
            contradiction_rate: self.contradiction_rate,
            usage_failure_rate: self.usage_failure_rate,
            age_decay: self.age_decay,
            provenance_weakness: self.provenance_weakness,
        }
    }

    pub fn set_signals(&mut self, signals: SignalScores) {
        self.contradiction_rate = signals.contradiction_rate;
        self.usage_failure_rate = signals.usage_failure_rate;
        self.age_decay = signals.age_decay;
        self.provenance_weakness = signals.provenance_weakness;
    }

    pub fn is_quarantined(&self) -> bool {
        self.quarantine_status == QuarantineStatus::Quarantined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_health_has_single_registration_entry() {
        let now = Utc::now();
        let health = MemoryHealth::initial("m1", now, 10);
        assert_eq!(health.corruption_score, 0.0);
        assert_eq!(health.quarantine_status, QuarantineStatus::Healthy);
        assert_eq!(health.assessment_history.len(), 1);
        let entry = health.assessment_history.last().unwrap();
        assert_eq!(entry.reason, REASON_REGISTERED);
        assert_eq!(entry.timestamp, now);
    }
}
