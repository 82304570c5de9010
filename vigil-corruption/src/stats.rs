use serde::{Deserialize, Serialize};

use vigil_core::memory::MemoryHealth;
use vigil_core::models::{RunningMean, StatusDistribution, TrustDistribution};

/// Running aggregates, updated alongside each assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorruptionStatistics {
    pub total_assessments: u64,
    /// Quarantine actions fired, automatic and manual.
    pub quarantined_count: u64,
    pub avg_corruption_score: RunningMean,
    pub avg_contradiction_rate: RunningMean,
    pub avg_age_decay_rate: RunningMean,
}

impl CorruptionStatistics {
    pub fn record_assessment(&mut self, health: &MemoryHealth) {
        self.total_assessments += 1;
        self.avg_corruption_score.record(health.corruption_score);
        self.avg_contradiction_rate.record(health.contradiction_rate);
        self.avg_age_decay_rate.record(health.age_decay);
    }

    pub fn record_quarantine(&mut self) {
        self.quarantined_count += 1;
    }
}

/// Aggregate snapshot: running statistics plus on-demand distributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorruptionReport {
    pub total_memories: usize,
    pub statistics: CorruptionStatistics,
    pub status_distribution: StatusDistribution,
    pub trust_distribution: TrustDistribution,
}
