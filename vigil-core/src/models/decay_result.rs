use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::memory::{TrustScore, TrustStatus};

/// Output of one decay computation. Pure data; applying it is the caller's choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayResult {
    pub memory_id: String,
    pub previous_trust: TrustScore,
    pub new_trust: TrustScore,
    pub days_inactive: f64,
    /// Per-day rate after usage, importance, category, and clamping.
    pub adjusted_rate: f64,
    pub decay_amount: f64,
    pub status: TrustStatus,
    pub computed_at: DateTime<Utc>,
}
