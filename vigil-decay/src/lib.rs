//! # vigil-decay
//!
//! Trust decay: a pure, deterministic function of node, time, and policy,
//! plus the strategy and manager that apply it to a registry.

pub mod archival;
pub mod engine;
pub mod factors;
pub mod formula;
pub mod manager;
pub mod stats;

pub use archival::ArchivalDecision;
pub use engine::{DecayEngine, DecayState};
pub use formula::{decay, DecayBreakdown};
pub use manager::DecayManager;
pub use stats::{DecayReport, DecayStatistics};
