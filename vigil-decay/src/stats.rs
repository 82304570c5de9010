use serde::{Deserialize, Serialize};

use vigil_core::memory::TrustStatus;
use vigil_core::models::{DecayResult, RunningMean, TrustDistribution};

/// Running aggregates over every decay application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecayStatistics {
    pub total_decays: u64,
    pub archive_transitions: u64,
    pub avg_trust: RunningMean,
    pub avg_decay_amount: RunningMean,
}

impl DecayStatistics {
    pub fn record(&mut self, result: &DecayResult) {
        self.total_decays += 1;
        if result.status == TrustStatus::ArchiveEligible
            && result.previous_trust.status() != TrustStatus::ArchiveEligible
        {
            self.archive_transitions += 1;
        }
        self.avg_trust.record(result.new_trust.value());
        self.avg_decay_amount.record(result.decay_amount);
    }
}

/// Statistics snapshot: running aggregates plus the current bucket counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayReport {
    pub total_memories: usize,
    pub distribution: TrustDistribution,
    pub statistics: DecayStatistics,
}
