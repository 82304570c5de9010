use serde::{Deserialize, Serialize};
use std::fmt;

use super::trust_score::TrustScore;

/// Decay-engine bucket derived from a trust score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustStatus {
    Hot,
    Warm,
    Cool,
    ArchiveEligible,
}

impl TrustStatus {
    /// `trust > 0.8 → hot`, `> 0.6 → warm`, `> 0.4 → cool`, else archive-eligible.
    pub fn from_trust(trust: f64) -> Self {
        if trust > TrustScore::HOT {
            Self::Hot
        } else if trust > TrustScore::WARM {
            Self::Warm
        } else if trust > TrustScore::COOL {
            Self::Cool
        } else {
            Self::ArchiveEligible
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::ArchiveEligible => "archive_eligible",
        }
    }
}

impl fmt::Display for TrustStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quarantine state of a memory, derived from its corruption score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuarantineStatus {
    #[default]
    Healthy,
    Decayed,
    Quarantined,
}

impl QuarantineStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Decayed => "decayed",
            Self::Quarantined => "quarantined",
        }
    }
}

impl fmt::Display for QuarantineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
