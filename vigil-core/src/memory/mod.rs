pub mod health;
pub mod history;
pub mod node;
pub mod provenance;
pub mod status;
pub mod trust_score;

pub use health::{MemoryHealth, SignalScores};
pub use history::{AssessmentEntry, BoundedHistory};
pub use node::MemoryNode;
pub use provenance::{MemoryProvenance, MemorySource, ValidationLevel};
pub use status::{QuarantineStatus, TrustStatus};
pub use trust_score::TrustScore;
