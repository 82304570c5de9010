use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pre-computed evidence for one of the three contradiction checks.
///
/// Evidence replaces the built-in heuristic for its check. Several pieces of
/// evidence for the same check are combined: any contradiction wins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContradictionEvidence {
    /// The memory was last confirmed still true at this time.
    Temporal { last_confirmed: DateTime<Utc> },
    /// Result of a consistency check against related memories.
    Logical { consistent: bool },
    /// Result of an external fact check.
    Factual { verified: bool },
}

/// Caller-supplied input to a single assessment. Sweeps use the empty default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentContext {
    pub evidence: Vec<ContradictionEvidence>,
}

impl AssessmentContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_evidence(mut self, evidence: ContradictionEvidence) -> Self {
        self.evidence.push(evidence);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.evidence.is_empty()
    }
}
