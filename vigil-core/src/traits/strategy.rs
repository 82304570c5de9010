use std::fmt;

use chrono::{DateTime, Utc};

use crate::errors::VigilResult;
use crate::memory::MemoryNode;

/// Scoring strategy plugged into a trust lifecycle.
///
/// The lifecycle owns the registry, scheduling, and per-item locking; the
/// strategy owns the arithmetic. `assess` runs while the item's entry is
/// locked, so it must be bounded in time and must not touch the registry.
pub trait ITrustStrategy: Send + Sync + 'static {
    /// Per-item state stored beside the node (health record, decay history, ...).
    type State: Clone + Send + Sync + fmt::Debug + 'static;
    /// Per-assessment input supplied by the caller. The default is used by sweeps.
    type Context: Default + Send + Sync;
    /// What a single assessment produces.
    type Outcome: Clone + Send + fmt::Debug;
    /// Running aggregates updated alongside every assessment.
    type Stats: Default + Clone + Send + fmt::Debug + 'static;

    /// Short name used in logs and sweep reports.
    fn name(&self) -> &'static str;

    /// Recompute scores for one item, mutating node and state in place.
    fn assess(
        &self,
        node: &mut MemoryNode,
        state: &mut Self::State,
        ctx: &Self::Context,
        now: DateTime<Utc>,
    ) -> VigilResult<Self::Outcome>;

    /// Fold one outcome into the running aggregates.
    fn record(&self, stats: &mut Self::Stats, outcome: &Self::Outcome);
}
