//! A minimal strategy that counts assessments, used to exercise the
//! lifecycle machinery without any scoring arithmetic.

use chrono::{DateTime, Utc};
use vigil_core::errors::{VigilError, VigilResult};
use vigil_core::memory::MemoryNode;
use vigil_core::traits::ITrustStrategy;

#[derive(Default)]
pub struct CountingStrategy;

#[derive(Debug, Clone, Default)]
pub struct CountingStats {
    pub assessments: u64,
}

impl ITrustStrategy for CountingStrategy {
    type State = u64;
    type Context = ();
    type Outcome = u64;
    type Stats = CountingStats;

    fn name(&self) -> &'static str {
        "counting"
    }

    fn assess(
        &self,
        node: &mut MemoryNode,
        state: &mut u64,
        _ctx: &(),
        _now: DateTime<Utc>,
    ) -> VigilResult<u64> {
        if node.id.starts_with("panic") {
            panic!("strategy panicked on {}", node.id);
        }
        if node.id.starts_with("bad") {
            return Err(VigilError::InvalidSignal {
                memory_id: node.id.clone(),
                field: "id",
                value: f64::NAN,
            });
        }
        *state += 1;
        Ok(*state)
    }

    fn record(&self, stats: &mut CountingStats, _outcome: &u64) {
        stats.assessments += 1;
    }
}

pub fn node(id: &str) -> MemoryNode {
    MemoryNode::new(id, format!("content of {id}"), Utc::now())
}
