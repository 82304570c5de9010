use serde::{Deserialize, Serialize};

use crate::memory::{QuarantineStatus, TrustStatus};

/// Count of memories per quarantine status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDistribution {
    pub healthy: usize,
    pub decayed: usize,
    pub quarantined: usize,
}

impl StatusDistribution {
    pub fn add(&mut self, status: QuarantineStatus) {
        match status {
            QuarantineStatus::Healthy => self.healthy += 1,
            QuarantineStatus::Decayed => self.decayed += 1,
            QuarantineStatus::Quarantined => self.quarantined += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.healthy + self.decayed + self.quarantined
    }
}

/// Count of memories per decay bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustDistribution {
    pub hot: usize,
    pub warm: usize,
    pub cool: usize,
    pub archive_eligible: usize,
}

impl TrustDistribution {
    pub fn add(&mut self, status: TrustStatus) {
        match status {
            TrustStatus::Hot => self.hot += 1,
            TrustStatus::Warm => self.warm += 1,
            TrustStatus::Cool => self.cool += 1,
            TrustStatus::ArchiveEligible => self.archive_eligible += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.hot + self.warm + self.cool + self.archive_eligible
    }
}

impl FromIterator<TrustStatus> for TrustDistribution {
    fn from_iter<I: IntoIterator<Item = TrustStatus>>(iter: I) -> Self {
        let mut dist = Self::default();
        for status in iter {
            dist.add(status);
        }
        dist
    }
}

impl FromIterator<QuarantineStatus> for StatusDistribution {
    fn from_iter<I: IntoIterator<Item = QuarantineStatus>>(iter: I) -> Self {
        let mut dist = Self::default();
        for status in iter {
            dist.add(status);
        }
        dist
    }
}
