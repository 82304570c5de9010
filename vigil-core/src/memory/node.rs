use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::trust_score::TrustScore;
use crate::config::defaults;

/// A stored memory item. The engine never interprets `content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryNode {
    pub id: String,
    /// Opaque payload.
    pub content: String,
    /// Current trust, decays with inactivity.
    pub trust_score: TrustScore,
    /// Number of recorded accesses.
    pub usage_count: u64,
    pub last_accessed: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    /// Tag used for the decay-rate multiplier lookup.
    pub category: String,
    /// Importance in [0.0, 1.0].
    pub importance: f64,
    /// Base per-day decay rate, > 0.
    pub decay_rate: f64,
}

impl MemoryNode {
    /// A fresh node with full trust, created and last accessed at `now`.
    pub fn new(id: impl Into<String>, content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            trust_score: TrustScore::new(defaults::DEFAULT_NODE_TRUST),
            usage_count: 0,
            last_accessed: now,
            created_at: now,
            category: defaults::DEFAULT_NODE_CATEGORY.to_string(),
            importance: defaults::DEFAULT_NODE_IMPORTANCE,
            decay_rate: defaults::DEFAULT_NODE_DECAY_RATE,
        }
    }

    pub fn with_trust(mut self, trust: f64) -> Self {
        self.trust_score = TrustScore::new(trust);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Importance is clamped to [0.0, 1.0].
    pub fn with_importance(mut self, importance: f64) -> Self {
        self.importance = importance.clamp(0.0, 1.0);
        self
    }

    pub fn with_decay_rate(mut self, decay_rate: f64) -> Self {
        self.decay_rate = decay_rate;
        self
    }

    pub fn with_usage(mut self, usage_count: u64, last_accessed: DateTime<Utc>) -> Self {
        self.usage_count = usage_count;
        self.last_accessed = last_accessed;
        self
    }

    /// Record an access: bump usage and recency.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.usage_count = self.usage_count.saturating_add(1);
        if now > self.last_accessed {
            self.last_accessed = now;
        }
    }

    /// blake3 hash of the content, used in audit exports instead of the payload.
    pub fn content_hash(&self) -> String {
        blake3::hash(self.content.as_bytes()).to_hex().to_string()
    }
}

/// Identity equality: two nodes are equal if they have the same id.
impl PartialEq for MemoryNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
