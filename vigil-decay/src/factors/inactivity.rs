use chrono::{DateTime, Utc};
use vigil_core::constants::SECONDS_PER_DAY;
use vigil_core::memory::MemoryNode;

/// Days since the node was last accessed. Never negative.
pub fn days_inactive(node: &MemoryNode, now: DateTime<Utc>) -> f64 {
    let millis = (now - node.last_accessed).num_milliseconds().max(0) as f64;
    millis / 1_000.0 / SECONDS_PER_DAY
}
