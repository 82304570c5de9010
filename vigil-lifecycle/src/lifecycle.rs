//! TrustLifecycle: one registry, one scoring strategy, per-item atomic assessment.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::time::Instant;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tracing::{debug, error, warn};

use vigil_core::errors::{VigilError, VigilResult};
use vigil_core::memory::MemoryNode;
use vigil_core::models::SweepReport;
use vigil_core::traits::ITrustStrategy;
use vigil_observability::{assessment_span, sweep_span};

use crate::registry::{Registry, TrustEntry};

/// Generic trust lifecycle.
///
/// All mutation of node and strategy state goes through this type. An
/// assessment holds the item's entry guard from the read of its state to the
/// statistics update, so concurrent callers never observe a half-written
/// record. Operations on different ids only contend on shared shards.
///
/// Lock order: entry guard, then statistics. Statistics are never held while
/// acquiring an entry.
pub struct TrustLifecycle<S: ITrustStrategy> {
    strategy: RwLock<Arc<S>>,
    registry: Registry<S::State>,
    stats: Mutex<S::Stats>,
}

impl<S: ITrustStrategy> TrustLifecycle<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            strategy: RwLock::new(Arc::new(strategy)),
            registry: Registry::new(),
            stats: Mutex::new(S::Stats::default()),
        }
    }

    /// Snapshot of the active strategy. An assessment uses one snapshot
    /// throughout, so a concurrent swap never mixes two configs.
    pub fn strategy(&self) -> Arc<S> {
        self.strategy
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swap the active strategy, returning the previous one.
    pub fn replace_strategy(&self, strategy: S) -> Arc<S> {
        let mut slot = self.strategy.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *slot, Arc::new(strategy))
    }

    pub fn registry(&self) -> &Registry<S::State> {
        &self.registry
    }

    /// Register a node with its initial state. Returns true if an entry was replaced.
    pub fn insert(&self, node: MemoryNode, state: S::State) -> bool {
        self.registry.insert(TrustEntry { node, state }).is_some()
    }

    /// Remove a node and its state. Returns true if the id existed.
    pub fn remove(&self, id: &str) -> bool {
        self.registry.remove(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<TrustEntry<S::State>> {
        self.registry.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.registry.contains(id)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn ids(&self) -> Vec<String> {
        self.registry.ids()
    }

    pub fn snapshot(&self) -> Vec<TrustEntry<S::State>> {
        self.registry.snapshot()
    }

    /// Record an access: usage +1, recency = `now`.
    pub fn access(&self, id: &str, now: DateTime<Utc>) -> VigilResult<()> {
        let mut entry = self
            .registry
            .get_mut(id)
            .ok_or_else(|| VigilError::not_registered(id))?;
        entry.node.touch(now);
        Ok(())
    }

    /// Run `f` on one entry and the statistics, atomically for that id.
    pub fn update<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut TrustEntry<S::State>, &mut S::Stats) -> R,
    ) -> VigilResult<R> {
        let mut entry = self
            .registry
            .get_mut(id)
            .ok_or_else(|| VigilError::not_registered(id))?;
        let mut stats = self.lock_stats();
        Ok(f(entry.value_mut(), &mut stats))
    }

    /// Assess one item: compute, write node/state, fold into statistics.
    pub fn assess(
        &self,
        id: &str,
        ctx: &S::Context,
        now: DateTime<Utc>,
    ) -> VigilResult<S::Outcome> {
        let strategy = self.strategy();
        let _span = assessment_span!(strategy.name(), id).entered();

        let mut entry = self
            .registry
            .get_mut(id)
            .ok_or_else(|| VigilError::not_registered(id))?;
        let TrustEntry { node, state } = entry.value_mut();
        let outcome = strategy.assess(node, state, ctx, now)?;
        strategy.record(&mut self.lock_stats(), &outcome);

        debug!(outcome = ?outcome, "assessment complete");
        Ok(outcome)
    }

    /// Assess every registered id with the default context.
    ///
    /// Items are assessed in parallel and independently: an item that fails
    /// or panics is logged, reported, and skipped. Ids removed mid-sweep are skipped silently.
    pub fn sweep(&self, now: DateTime<Utc>) -> SweepReport {
        let ids = self.registry.ids();
        let name = self.strategy().name();
        let span = sweep_span!(name, ids.len());
        let _guard = span.enter();

        let started = Instant::now();
        let ctx = S::Context::default();

        let results: Vec<Result<(), String>> = ids
            .par_iter()
            .filter_map(|id| {
                let assessed =
                    panic::catch_unwind(AssertUnwindSafe(|| self.assess(id, &ctx, now)));
                match assessed {
                    Ok(Ok(_)) => Some(Ok(())),
                    Ok(Err(VigilError::NotRegistered { .. })) => {
                        debug!(memory_id = %id, "removed during sweep, skipping");
                        None
                    }
                    Ok(Err(err)) => {
                        warn!(memory_id = %id, error = %err, "assessment failed, skipping");
                        Some(Err(id.clone()))
                    }
                    Err(_) => {
                        error!(memory_id = %id, "assessment panicked, skipping");
                        Some(Err(id.clone()))
                    }
                }
            })
            .collect();

        let mut report = SweepReport {
            strategy: name.to_string(),
            started_at: Some(now),
            ..Default::default()
        };
        for result in results {
            match result {
                Ok(()) => report.assessed += 1,
                Err(id) => {
                    report.failed += 1;
                    report.failed_ids.push(id);
                }
            }
        }
        report.duration_ms = started.elapsed().as_millis() as u64;

        debug!(
            assessed = report.assessed,
            failed = report.failed,
            duration_ms = report.duration_ms,
            "sweep complete"
        );
        report
    }

    /// Cloned snapshot of the running statistics.
    pub fn stats(&self) -> S::Stats {
        self.lock_stats().clone()
    }

    fn lock_stats(&self) -> MutexGuard<'_, S::Stats> {
        self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
