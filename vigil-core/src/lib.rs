//! # vigil-core
//!
//! Foundation crate for the Vigil trust-lifecycle engine.
//! Defines the data model, the scoring-strategy trait, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod memory;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{CorruptionConfig, DecayPolicy, VigilConfig};
pub use errors::{VigilError, VigilResult};
pub use memory::{
    MemoryHealth, MemoryNode, MemoryProvenance, QuarantineStatus, TrustScore, TrustStatus,
};
pub use traits::ITrustStrategy;
