//! DecayManager: plain trust decay over its own registry and sweep.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use vigil_core::config::DecayPolicy;
use vigil_core::errors::{VigilError, VigilResult};
use vigil_core::memory::{AssessmentEntry, MemoryNode, TrustStatus};
use vigil_core::models::{DecayResult, SweepReport, TrustDistribution};
use vigil_lifecycle::{SweepScheduler, TrustLifecycle};

use crate::archival::{self, ArchivalDecision};
use crate::engine::{DecayEngine, DecayState};
use crate::stats::DecayReport;

/// Manages trust decay for a set of memories.
///
/// Nothing runs in the background until [`DecayManager::start`] is called.
pub struct DecayManager {
    lifecycle: Arc<TrustLifecycle<DecayEngine>>,
    scheduler: SweepScheduler,
    /// Serializes policy swaps with scheduler restarts.
    policy_update: Mutex<()>,
}

impl DecayManager {
    pub fn new(policy: DecayPolicy) -> VigilResult<Self> {
        policy.validate()?;
        Ok(Self {
            lifecycle: Arc::new(TrustLifecycle::new(DecayEngine::new(policy))),
            scheduler: SweepScheduler::new(),
            policy_update: Mutex::new(()),
        })
    }

    pub fn policy(&self) -> DecayPolicy {
        self.lifecycle.strategy().policy().clone()
    }

    /// Validate and swap the policy. Histories are truncated to the new cap,
    /// and a running sweep is restarted once if the interval changed.
    pub fn update_policy(&self, policy: DecayPolicy) -> VigilResult<()> {
        policy.validate()?;
        let _guard = self.lock_policy_update();
        let cap = policy.max_history_entries;
        let interval = policy.sweep_interval();
        let previous = self.lifecycle.replace_strategy(DecayEngine::new(policy));

        if cap != previous.policy().max_history_entries {
            self.lifecycle
                .registry()
                .for_each_mut(|entry| entry.state.history.set_max_entries(cap));
        }
        if self.scheduler.is_running() && self.scheduler.interval() != Some(interval) {
            self.scheduler.start(Arc::clone(&self.lifecycle), interval)?;
        }
        info!(max_history = cap, "decay policy updated");
        Ok(())
    }

    /// Register a node, replacing any node with the same id.
    pub fn add_memory(&self, node: MemoryNode) {
        let cap = self.lifecycle.strategy().policy().max_history_entries;
        let id = node.id.clone();
        let replaced = self.lifecycle.insert(node, DecayState::new(cap));
        debug!(memory_id = %id, replaced, "memory added");
    }

    pub fn access_memory(&self, id: &str) -> VigilResult<()> {
        self.access_memory_at(id, Utc::now())
    }

    /// Usage +1, recency = `now`.
    pub fn access_memory_at(&self, id: &str, now: DateTime<Utc>) -> VigilResult<()> {
        self.lifecycle.access(id, now)
    }

    pub fn refresh_memory(&self, id: &str) -> VigilResult<f64> {
        self.refresh_memory_at(id, Utc::now())
    }

    /// Boost trust by the policy's refresh amount, capped at 1.0. Counts as an access.
    pub fn refresh_memory_at(&self, id: &str, now: DateTime<Utc>) -> VigilResult<f64> {
        let boost = self.lifecycle.strategy().policy().refresh_boost;
        self.lifecycle.update(id, |entry, _| {
            entry.node.trust_score = entry.node.trust_score + boost;
            entry.node.touch(now);
            let trust = entry.node.trust_score.value();
            entry
                .state
                .history
                .push(AssessmentEntry::new(now, trust, "refreshed"));
            trust
        })
    }

    pub fn apply_decay(&self, id: &str) -> VigilResult<DecayResult> {
        self.apply_decay_at(id, Utc::now())
    }

    /// Decay one memory and store the result.
    pub fn apply_decay_at(&self, id: &str, now: DateTime<Utc>) -> VigilResult<DecayResult> {
        self.lifecycle.assess(id, &(), now)
    }

    pub fn apply_decay_to_all(&self) -> SweepReport {
        self.apply_decay_to_all_at(Utc::now())
    }

    /// Decay every memory. Per-item failures are isolated and reported.
    pub fn apply_decay_to_all_at(&self, now: DateTime<Utc>) -> SweepReport {
        self.lifecycle.sweep(now)
    }

    pub fn get_memory(&self, id: &str) -> Option<MemoryNode> {
        self.lifecycle.get(id).map(|entry| entry.node)
    }

    /// Remove a memory and its history. Returns true if it existed.
    pub fn remove_memory(&self, id: &str) -> bool {
        self.lifecycle.remove(id)
    }

    pub fn memories_by_status(&self, status: TrustStatus) -> Vec<MemoryNode> {
        self.lifecycle
            .snapshot()
            .into_iter()
            .filter(|entry| entry.node.trust_score.status() == status)
            .map(|entry| entry.node)
            .collect()
    }

    /// Decay history of one memory, oldest first.
    pub fn decay_history(&self, id: &str) -> VigilResult<Vec<AssessmentEntry>> {
        self.lifecycle
            .get(id)
            .map(|entry| entry.state.history.iter().cloned().collect())
            .ok_or_else(|| VigilError::not_registered(id))
    }

    pub fn statistics(&self) -> DecayReport {
        let snapshot = self.lifecycle.snapshot();
        let distribution: TrustDistribution = snapshot
            .iter()
            .map(|entry| entry.node.trust_score.status())
            .collect();
        DecayReport {
            total_memories: snapshot.len(),
            distribution,
            statistics: self.lifecycle.stats(),
        }
    }

    /// Memories whose current trust makes them archive-eligible.
    pub fn archival_candidates(&self) -> Vec<ArchivalDecision> {
        self.lifecycle
            .snapshot()
            .iter()
            .map(|entry| archival::evaluate(&entry.node))
            .filter(|decision| decision.should_archive)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lifecycle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lifecycle.is_empty()
    }

    /// Start the periodic sweep at the policy's interval. Must be called
    /// inside a Tokio runtime.
    pub fn start(&self) -> VigilResult<()> {
        let _guard = self.lock_policy_update();
        let interval = self.lifecycle.strategy().policy().sweep_interval();
        self.scheduler.start(Arc::clone(&self.lifecycle), interval)
    }

    /// Stop the periodic sweep. No-op when not running.
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

    fn lock_policy_update(&self) -> MutexGuard<'_, ()> {
        self.policy_update
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
