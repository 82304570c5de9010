use chrono::{DateTime, Utc};
use tracing::trace;

use vigil_core::config::CorruptionConfig;
use vigil_core::errors::{VigilError, VigilResult};
use vigil_core::memory::{
    AssessmentEntry, MemoryHealth, MemoryNode, MemoryProvenance, QuarantineStatus, SignalScores,
};
use vigil_core::traits::ITrustStrategy;

use crate::composite;
use crate::context::AssessmentContext;
use crate::quarantine::{self, REASON_ASSESSED};
use crate::signals::{age, contradiction, provenance, usage};
use crate::stats::CorruptionStatistics;

/// Provenance and health stored beside each node.
/// Created, replaced, and removed together with the node.
#[derive(Debug, Clone, PartialEq)]
pub struct CorruptionState {
    pub provenance: MemoryProvenance,
    pub health: MemoryHealth,
}

impl CorruptionState {
    /// Fresh state: initial health with a single registration entry.
    pub fn new(
        memory_id: &str,
        provenance: MemoryProvenance,
        now: DateTime<Utc>,
        max_history: usize,
    ) -> Self {
        Self {
            provenance,
            health: MemoryHealth::initial(memory_id, now, max_history),
        }
    }
}

/// Result of one health assessment.
#[derive(Debug, Clone)]
pub struct AssessmentOutcome {
    pub health: MemoryHealth,
    /// True if this assessment fired the automatic quarantine action.
    pub auto_quarantined: bool,
}

/// Corruption scoring under a fixed config.
#[derive(Debug, Clone, Default)]
pub struct CorruptionStrategy {
    config: CorruptionConfig,
}

impl CorruptionStrategy {
    pub fn new(config: CorruptionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CorruptionConfig {
        &self.config
    }

    /// Compute the four signals from the current state, before it is updated.
    pub fn signals(
        &self,
        state: &CorruptionState,
        ctx: &AssessmentContext,
        now: DateTime<Utc>,
    ) -> SignalScores {
        let prov = &state.provenance;
        let checks = contradiction::evaluate(
            prov,
            state.health.usage_failure_rate,
            ctx,
            &self.config,
            now,
        );
        SignalScores {
            contradiction_rate: checks.rate(),
            usage_failure_rate: usage::failure_rate(&state.health.assessment_history),
            age_decay: age::calculate(prov, now, self.config.age_ramp_days),
            provenance_weakness: provenance::weakness(prov),
        }
    }
}

impl ITrustStrategy for CorruptionStrategy {
    type State = CorruptionState;
    type Context = AssessmentContext;
    type Outcome = AssessmentOutcome;
    type Stats = CorruptionStatistics;

    fn name(&self) -> &'static str {
        "corruption"
    }

    fn assess(
        &self,
        node: &mut MemoryNode,
        state: &mut CorruptionState,
        ctx: &AssessmentContext,
        now: DateTime<Utc>,
    ) -> VigilResult<AssessmentOutcome> {
        let confidence = state.provenance.confidence;
        if !confidence.is_finite() {
            return Err(VigilError::InvalidSignal {
                memory_id: node.id.clone(),
                field: "confidence",
                value: confidence,
            });
        }

        let signals = self.signals(state, ctx, now);
        let score = composite::corruption_score(&signals);

        let health = &mut state.health;
        health.set_signals(signals);
        health.corruption_score = score;
        health.last_assessed = now;
        health.quarantine_status = quarantine::resolve_status(health, &self.config);
        health
            .assessment_history
            .set_max_entries(self.config.max_history_entries);
        health
            .assessment_history
            .push(AssessmentEntry::new(now, score, REASON_ASSESSED));

        // Fires on every assessment whose score lands in quarantine, including
        // re-assessments of an already quarantined memory. A manual hold alone
        // does not trigger it.
        let auto_quarantined = self.config.auto_quarantine
            && quarantine::status_for(score, &self.config) == QuarantineStatus::Quarantined;
        if auto_quarantined {
            quarantine::auto_quarantine(health, now);
        }

        trace!(
            score,
            status = %health.quarantine_status,
            contradiction = signals.contradiction_rate,
            usage_failure = signals.usage_failure_rate,
            age = signals.age_decay,
            provenance = signals.provenance_weakness,
            "health assessed"
        );
        Ok(AssessmentOutcome {
            health: health.clone(),
            auto_quarantined,
        })
    }

    fn record(&self, stats: &mut CorruptionStatistics, outcome: &AssessmentOutcome) {
        stats.record_assessment(&outcome.health);
        if outcome.auto_quarantined {
            stats.record_quarantine();
        }
    }
}
