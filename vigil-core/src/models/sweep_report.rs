use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one sweep over a registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub strategy: String,
    pub started_at: Option<DateTime<Utc>>,
    /// Items assessed successfully.
    pub assessed: usize,
    /// Items whose assessment failed and was skipped.
    pub failed: usize,
    /// Ids of failed items.
    pub failed_ids: Vec<String>,
    pub duration_ms: u64,
}

impl SweepReport {
    pub fn total(&self) -> usize {
        self.assessed + self.failed
    }
}
