//! Span definitions per operation: assessment, sweep, decay, quarantine.
//!
//! Each span carries its key identifiers via the `tracing` crate.

/// Create an assessment span.
#[macro_export]
macro_rules! assessment_span {
    ($strategy:expr, $memory_id:expr) => {
        tracing::debug_span!("vigil.assessment", strategy = %$strategy, memory_id = %$memory_id)
    };
}

/// Create a sweep span.
#[macro_export]
macro_rules! sweep_span {
    ($strategy:expr, $memory_count:expr) => {
        tracing::info_span!("vigil.sweep", strategy = %$strategy, memory_count = $memory_count)
    };
}

/// Create a decay span.
#[macro_export]
macro_rules! decay_span {
    ($memory_id:expr) => {
        tracing::debug_span!("vigil.decay", memory_id = %$memory_id)
    };
}

/// Create a quarantine span.
#[macro_export]
macro_rules! quarantine_span {
    ($memory_id:expr, $reason:expr) => {
        tracing::info_span!("vigil.quarantine", memory_id = %$memory_id, reason = %$reason)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ASSESSMENT: &str = "vigil.assessment";
    pub const SWEEP: &str = "vigil.sweep";
    pub const DECAY: &str = "vigil.decay";
    pub const QUARANTINE: &str = "vigil.quarantine";
}
