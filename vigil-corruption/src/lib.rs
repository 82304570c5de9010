//! # vigil-corruption
//!
//! Corruption detection: four signals combined into a composite score,
//! a quarantine state machine driven by that score, running statistics,
//! and a full audit export.

pub mod audit;
pub mod composite;
pub mod context;
pub mod detector;
pub mod quarantine;
pub mod signals;
pub mod stats;
pub mod strategy;

pub use audit::{AuditExport, AuditRecord};
pub use context::{AssessmentContext, ContradictionEvidence};
pub use detector::CorruptionDetector;
pub use stats::{CorruptionReport, CorruptionStatistics};
pub use strategy::{AssessmentOutcome, CorruptionState, CorruptionStrategy};
