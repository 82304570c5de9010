//! Default values for every config section.

// Decay policy
pub const DEFAULT_USAGE_BONUS: f64 = 0.001;
pub const DEFAULT_USAGE_BONUS_CAP: f64 = 0.02;
pub const DEFAULT_IMPORTANCE_BONUS: f64 = 0.02;
pub const DEFAULT_MAX_DECAY_PER_DAY: f64 = 0.05;
pub const DEFAULT_REFRESH_BOOST: f64 = 0.1;
pub const DEFAULT_DECAY_SWEEP_INTERVAL_SECS: u64 = 3_600;
pub const DEFAULT_DECAY_HISTORY_ENTRIES: usize = 50;
pub const DEFAULT_CATEGORY_MULTIPLIERS: &[(&str, f64)] =
    &[("core", 0.5), ("standard", 1.0), ("ephemeral", 2.0)];

// Corruption detection
pub const DEFAULT_DECAY_THRESHOLD: f64 = 0.7;
pub const DEFAULT_QUARANTINE_THRESHOLD: f64 = 0.7;
pub const DEFAULT_CORRUPTION_HISTORY_ENTRIES: usize = 100;
pub const DEFAULT_ASSESSMENT_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_AUTO_QUARANTINE: bool = true;
pub const DEFAULT_TEMPORAL_WINDOW_DAYS: f64 = 30.0;
pub const DEFAULT_AGE_RAMP_DAYS: f64 = 90.0;
pub const DEFAULT_FACTUAL_CONFIDENCE_FLOOR: f64 = 0.7;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

// Fresh memory nodes
pub const DEFAULT_NODE_TRUST: f64 = 1.0;
pub const DEFAULT_NODE_IMPORTANCE: f64 = 0.5;
pub const DEFAULT_NODE_DECAY_RATE: f64 = 0.01;
pub const DEFAULT_NODE_CATEGORY: &str = "standard";
