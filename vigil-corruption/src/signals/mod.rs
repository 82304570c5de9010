//! The four corruption signals, each in [0.0, 1.0].

pub mod age;
pub mod contradiction;
pub mod provenance;
pub mod usage;

pub use contradiction::ContradictionChecks;

use chrono::{DateTime, Utc};
use vigil_core::constants::SECONDS_PER_DAY;
use vigil_core::memory::MemoryProvenance;

/// Days since the provenance timestamp, never negative.
pub fn provenance_age_days(provenance: &MemoryProvenance, now: DateTime<Utc>) -> f64 {
    let ms = (now - provenance.timestamp).num_milliseconds().max(0) as f64;
    ms / 1000.0 / SECONDS_PER_DAY
}
