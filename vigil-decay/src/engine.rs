use chrono::{DateTime, Utc};
use tracing::trace;

use vigil_core::config::DecayPolicy;
use vigil_core::errors::{VigilError, VigilResult};
use vigil_core::memory::{AssessmentEntry, BoundedHistory, MemoryNode};
use vigil_core::models::DecayResult;
use vigil_core::traits::ITrustStrategy;
use vigil_observability::decay_span;

use crate::formula;
use crate::stats::DecayStatistics;

/// Decay bookkeeping stored beside each node.
#[derive(Debug, Clone, PartialEq)]
pub struct DecayState {
    /// When decay was last applied. Inactivity is measured from the later of
    /// this and `last_accessed`, so repeated applications never double-count.
    pub last_decayed_at: Option<DateTime<Utc>>,
    /// Trust after each application, oldest first.
    pub history: BoundedHistory<AssessmentEntry>,
}

impl DecayState {
    pub fn new(max_history: usize) -> Self {
        Self {
            last_decayed_at: None,
            history: BoundedHistory::new(max_history),
        }
    }
}

/// Decay engine: applies [`formula::decay`] under a fixed policy.
#[derive(Debug, Clone, Default)]
pub struct DecayEngine {
    policy: DecayPolicy,
}

impl DecayEngine {
    pub fn new(policy: DecayPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &DecayPolicy {
        &self.policy
    }

    /// Pure decay of a node under this engine's policy.
    pub fn decay(&self, node: &MemoryNode, now: DateTime<Utc>) -> DecayResult {
        formula::decay(node, now, &self.policy)
    }

    /// Reject nodes whose inputs would poison the arithmetic.
    fn check_inputs(node: &MemoryNode) -> VigilResult<()> {
        if !node.decay_rate.is_finite() || node.decay_rate <= 0.0 {
            return Err(VigilError::InvalidSignal {
                memory_id: node.id.clone(),
                field: "decay_rate",
                value: node.decay_rate,
            });
        }
        if !(0.0..=1.0).contains(&node.importance) {
            return Err(VigilError::InvalidSignal {
                memory_id: node.id.clone(),
                field: "importance",
                value: node.importance,
            });
        }
        Ok(())
    }
}

impl ITrustStrategy for DecayEngine {
    type State = DecayState;
    type Context = ();
    type Outcome = DecayResult;
    type Stats = DecayStatistics;

    fn name(&self) -> &'static str {
        "decay"
    }

    fn assess(
        &self,
        node: &mut MemoryNode,
        state: &mut DecayState,
        _ctx: &(),
        now: DateTime<Utc>,
    ) -> VigilResult<DecayResult> {
        let _span = decay_span!(node.id).entered();
        Self::check_inputs(node)?;

        // Decay from the later of last access and last application.
        let result = match state.last_decayed_at {
            Some(decayed_at) if decayed_at > node.last_accessed => {
                let mut effective = node.clone();
                effective.last_accessed = decayed_at;
                self.decay(&effective, now)
            }
            _ => self.decay(node, now),
        };

        node.trust_score = result.new_trust;
        state.last_decayed_at = Some(state.last_decayed_at.map_or(now, |t| t.max(now)));
        state.history.set_max_entries(self.policy.max_history_entries);
        state.history.push(AssessmentEntry::new(
            now,
            result.new_trust.value(),
            result.status.as_str(),
        ));

        trace!(
            previous = %result.previous_trust,
            new = %result.new_trust,
            rate = result.adjusted_rate,
            "decay applied"
        );
        Ok(result)
    }

    fn record(&self, stats: &mut DecayStatistics, outcome: &DecayResult) {
        stats.record(outcome);
    }
}
