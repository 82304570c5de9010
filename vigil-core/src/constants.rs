/// Vigil system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seconds in one day, the unit of every decay and age computation.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Decimal places kept on a trust score after each decay application.
pub const TRUST_SCORE_PRECISION: i32 = 3;

/// Floor on the adjusted per-day decay rate.
pub const MIN_DECAY_PER_DAY: f64 = 0.001;

/// History entry score above which an assessment counts as a usage failure.
pub const USAGE_FAILURE_SCORE: f64 = 0.5;

/// Prior usage-failure rate above which the logical contradiction check fires.
pub const LOGICAL_FAILURE_RATE: f64 = 0.5;

/// Composite corruption weights.
pub const WEIGHT_CONTRADICTION: f64 = 0.4;
pub const WEIGHT_USAGE_FAILURE: f64 = 0.2;
pub const WEIGHT_AGE_DECAY: f64 = 0.2;
pub const WEIGHT_PROVENANCE: f64 = 0.2;

/// Reason recorded on the first history entry of a freshly registered memory.
pub const REASON_REGISTERED: &str = "registered";
