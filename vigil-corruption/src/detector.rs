//! CorruptionDetector: the public entry point for corruption tracking.
//!
//! Owns one trust lifecycle over [`CorruptionStrategy`] and the scheduler that
//! sweeps it. Every read and write of health or provenance goes through here.
//! Trust buckets in the statistics are decayed to the time of the query with
//! the detector's [`DecayPolicy`].

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use vigil_core::config::{CorruptionConfig, CorruptionConfigUpdate, DecayPolicy, VigilConfig};
use vigil_core::errors::VigilResult;
use vigil_core::memory::{MemoryHealth, MemoryNode, MemoryProvenance, QuarantineStatus};
use vigil_core::models::{StatusDistribution, SweepReport, TrustDistribution};
use vigil_decay::decay;
use vigil_lifecycle::{SweepScheduler, TrustEntry, TrustLifecycle};

use crate::audit::{AuditExport, AuditRecord};
use crate::context::AssessmentContext;
use crate::quarantine;
use crate::stats::CorruptionReport;
use crate::strategy::{CorruptionState, CorruptionStrategy};

/// Tracks corruption for a set of memories and quarantines suspect ones.
///
/// Nothing runs in the background until [`CorruptionDetector::start`] is
/// called; [`CorruptionDetector::shutdown`] stops it again.
pub struct CorruptionDetector {
    lifecycle: Arc<TrustLifecycle<CorruptionStrategy>>,
    scheduler: SweepScheduler,
    decay_policy: DecayPolicy,
    /// Serializes config read-merge-swap so concurrent updates never drop a field.
    config_update: Mutex<()>,
}

impl std::fmt::Debug for CorruptionDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorruptionDetector")
            .field("decay_policy", &self.decay_policy)
            .finish_non_exhaustive()
    }
}

impl CorruptionDetector {
    /// Detector with the default decay policy.
    pub fn new(config: CorruptionConfig) -> VigilResult<Self> {
        Self::with_decay_policy(config, DecayPolicy::default())
    }

    /// Detector whose trust buckets are decayed with `decay_policy`.
    pub fn with_decay_policy(
        config: CorruptionConfig,
        decay_policy: DecayPolicy,
    ) -> VigilResult<Self> {
        config.validate()?;
        decay_policy.validate()?;
        Ok(Self {
            lifecycle: Arc::new(TrustLifecycle::new(CorruptionStrategy::new(config))),
            scheduler: SweepScheduler::new(),
            decay_policy,
            config_update: Mutex::new(()),
        })
    }

    pub fn from_config(config: &VigilConfig) -> VigilResult<Self> {
        Self::with_decay_policy(config.corruption.clone(), config.decay.clone())
    }

    /// Active config snapshot.
    pub fn config(&self) -> CorruptionConfig {
        self.lifecycle.strategy().config().clone()
    }

    pub fn decay_policy(&self) -> &DecayPolicy {
        &self.decay_policy
    }

    // ── Registration ─────────────────────────────────────────────────────

    pub fn register_memory(&self, id: &str, content: &str, provenance: MemoryProvenance) {
        self.register_memory_at(id, content, provenance, Utc::now());
    }

    /// Register a memory with its provenance.
    ///
    /// Re-registering an id replaces content and provenance and resets health
    /// to its initial state. Usage, recency, and trust of the node are kept.
    pub fn register_memory_at(
        &self,
        id: &str,
        content: &str,
        provenance: MemoryProvenance,
        now: DateTime<Utc>,
    ) {
        // The cap is read under the entry guard so a concurrent config update
        // either sees this entry or is seen by it.
        let fresh_state = || {
            let cap = self.lifecycle.strategy().config().max_history_entries;
            CorruptionState::new(id, provenance.clone(), now, cap)
        };
        let mut replaced = true;
        self.lifecycle.registry().upsert(
            id,
            || {
                replaced = false;
                TrustEntry {
                    node: MemoryNode::new(id, content, now),
                    state: fresh_state(),
                }
            },
            |entry| {
                entry.node.content = content.to_string();
                entry.state = fresh_state();
            },
        );
        debug!(memory_id = %id, replaced, "memory registered");
    }

    /// Register a fully specified node. Replaces any existing entry outright.
    pub fn register_node(
        &self,
        node: MemoryNode,
        provenance: MemoryProvenance,
        now: DateTime<Utc>,
    ) {
        let fresh_entry = || {
            let cap = self.lifecycle.strategy().config().max_history_entries;
            TrustEntry {
                node: node.clone(),
                state: CorruptionState::new(&node.id, provenance.clone(), now, cap),
            }
        };
        let mut replaced = true;
        self.lifecycle.registry().upsert(
            &node.id,
            || {
                replaced = false;
                fresh_entry()
            },
            |entry| *entry = fresh_entry(),
        );
        debug!(memory_id = %node.id, replaced, "node registered");
    }

    /// Remove a memory with its provenance and health. Returns true if it existed.
    pub fn remove_memory(&self, id: &str) -> bool {
        let removed = self.lifecycle.remove(id);
        if removed {
            info!(memory_id = %id, "memory removed");
        }
        removed
    }

    pub fn access_memory(&self, id: &str) -> VigilResult<()> {
        self.access_memory_at(id, Utc::now())
    }

    /// Usage +1, recency = `now`. Health is untouched.
    pub fn access_memory_at(&self, id: &str, now: DateTime<Utc>) -> VigilResult<()> {
        self.lifecycle.access(id, now)
    }

    // ── Assessment ───────────────────────────────────────────────────────

    pub fn assess_memory_health(
        &self,
        id: &str,
        ctx: Option<&AssessmentContext>,
    ) -> VigilResult<MemoryHealth> {
        self.assess_memory_health_at(id, ctx, Utc::now())
    }

    /// Recompute the health of one memory. Fails with `NotRegistered` for unknown ids.
    pub fn assess_memory_health_at(
        &self,
        id: &str,
        ctx: Option<&AssessmentContext>,
        now: DateTime<Utc>,
    ) -> VigilResult<MemoryHealth> {
        let empty = AssessmentContext::default();
        let outcome = self.lifecycle.assess(id, ctx.unwrap_or(&empty), now)?;
        Ok(outcome.health)
    }

    pub fn assess_all(&self) -> SweepReport {
        self.assess_all_at(Utc::now())
    }

    /// Assess every memory with an empty context. Per-item failures are isolated.
    pub fn assess_all_at(&self, now: DateTime<Utc>) -> SweepReport {
        self.lifecycle.sweep(now)
    }

    // ── Quarantine ───────────────────────────────────────────────────────

    pub fn quarantine_memory(&self, id: &str, reason: &str) -> bool {
        self.quarantine_memory_at(id, reason, Utc::now())
    }

    /// Manually quarantine a memory regardless of its score. The hold persists
    /// across re-assessments until released. Unknown ids are a no-op; returns
    /// whether the id was found.
    pub fn quarantine_memory_at(&self, id: &str, reason: &str, now: DateTime<Utc>) -> bool {
        let result = self.lifecycle.update(id, |entry, stats| {
            quarantine::place_hold(&mut entry.state.health, reason, now);
            stats.record_quarantine();
        });
        match result {
            Ok(()) => true,
            Err(_) => {
                debug!(memory_id = %id, "quarantine of unknown memory ignored");
                false
            }
        }
    }

    pub fn release_quarantine(&self, id: &str) -> VigilResult<bool> {
        self.release_quarantine_at(id, Utc::now())
    }

    /// Lift a manual quarantine hold. Status falls back to what the current
    /// score implies. Returns false if no hold was in place.
    pub fn release_quarantine_at(&self, id: &str, now: DateTime<Utc>) -> VigilResult<bool> {
        let strategy = self.lifecycle.strategy();
        self.lifecycle.update(id, |entry, _| {
            quarantine::release_hold(&mut entry.state.health, strategy.config(), now)
        })
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub fn get_memory_health(&self, id: &str) -> Option<MemoryHealth> {
        self.lifecycle.get(id).map(|entry| entry.state.health)
    }

    pub fn get_provenance(&self, id: &str) -> Option<MemoryProvenance> {
        self.lifecycle.get(id).map(|entry| entry.state.provenance)
    }

    pub fn get_memory(&self, id: &str) -> Option<MemoryNode> {
        self.lifecycle.get(id).map(|entry| entry.node)
    }

    /// Health records with the given status, sorted by id.
    pub fn get_memories_by_status(&self, status: QuarantineStatus) -> Vec<MemoryHealth> {
        self.lifecycle
            .snapshot()
            .into_iter()
            .map(|entry| entry.state.health)
            .filter(|health| health.quarantine_status == status)
            .collect()
    }

    pub fn get_corruption_statistics(&self) -> CorruptionReport {
        self.get_corruption_statistics_at(Utc::now())
    }

    /// Running statistics plus status and trust distributions. Trust buckets
    /// come from each node decayed to `now`; stored trust is left untouched.
    pub fn get_corruption_statistics_at(&self, now: DateTime<Utc>) -> CorruptionReport {
        self.report(&self.lifecycle.snapshot(), now)
    }

    fn report(
        &self,
        snapshot: &[TrustEntry<CorruptionState>],
        now: DateTime<Utc>,
    ) -> CorruptionReport {
        let status_distribution: StatusDistribution = snapshot
            .iter()
            .map(|entry| entry.state.health.quarantine_status)
            .collect();
        let trust_distribution: TrustDistribution = snapshot
            .iter()
            .map(|entry| decay(&entry.node, now, &self.decay_policy).status)
            .collect();
        CorruptionReport {
            total_memories: snapshot.len(),
            statistics: self.lifecycle.stats(),
            status_distribution,
            trust_distribution,
        }
    }

    pub fn len(&self) -> usize {
        self.lifecycle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lifecycle.is_empty()
    }

    // ── Config ───────────────────────────────────────────────────────────

    /// Merge a partial update into the active config.
    ///
    /// The merged config is validated before it replaces the active one, so a
    /// rejected update changes nothing. Lowering the history cap truncates
    /// existing histories. If the interval changed while the sweep is
    /// running, the sweep is restarted once at the new interval.
    pub fn update_config(&self, update: CorruptionConfigUpdate) -> VigilResult<()> {
        let _guard = self
            .config_update
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let previous = self.lifecycle.strategy();
        let merged = previous.config().merged(&update);
        merged.validate()?;

        let cap = merged.max_history_entries;
        let interval = merged.assessment_interval();
        let cap_changed = cap != previous.config().max_history_entries;
        let interval_changed = interval != previous.config().assessment_interval();
        self.lifecycle.replace_strategy(CorruptionStrategy::new(merged));

        if cap_changed {
            self.lifecycle.registry().for_each_mut(|entry| {
                entry.state.health.assessment_history.set_max_entries(cap)
            });
        }
        if interval_changed && self.scheduler.is_running() {
            self.scheduler.start(Arc::clone(&self.lifecycle), interval)?;
        }
        info!(cap_changed, interval_changed, "corruption config updated");
        Ok(())
    }

    // ── Audit ────────────────────────────────────────────────────────────

    pub fn export_for_audit(&self) -> AuditExport {
        self.export_for_audit_at(Utc::now())
    }

    /// Full snapshot of config, statistics, and every memory's provenance and
    /// health history. Content is represented by its hash.
    pub fn export_for_audit_at(&self, now: DateTime<Utc>) -> AuditExport {
        let snapshot = self.lifecycle.snapshot();
        let records: Vec<AuditRecord> = snapshot
            .iter()
            .map(|entry| AuditRecord::from_entry(&entry.node, &entry.state))
            .collect();
        let statistics = self.report(&snapshot, now);
        AuditExport::new(now, self.config(), statistics, records)
    }

    // ── Scheduling ───────────────────────────────────────────────────────

    /// Start the periodic assessment sweep at the configured interval.
    /// Restarts it if already running. Must be called inside a Tokio runtime.
    pub fn start(&self) -> VigilResult<()> {
        let _guard = self
            .config_update
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let interval = self.lifecycle.strategy().config().assessment_interval();
        self.scheduler.start(Arc::clone(&self.lifecycle), interval)
    }

    /// Stop the periodic sweep. No-op when not running; an in-flight sweep
    /// finishes but no new one starts.
    pub fn stop(&self) -> bool {
        self.scheduler.stop()
    }

    /// Stop the periodic sweep and wait for it to exit.
    pub async fn shutdown(&self) -> VigilResult<()> {
        self.scheduler.shutdown().await
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Interval of the running sweep, if any.
    pub fn sweep_interval(&self) -> Option<std::time::Duration> {
        self.scheduler.interval()
    }
}
