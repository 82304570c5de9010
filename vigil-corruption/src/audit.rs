use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vigil_core::config::CorruptionConfig;
use vigil_core::constants::VERSION;
use vigil_core::errors::VigilResult;
use vigil_core::memory::{MemoryHealth, MemoryNode, MemoryProvenance, TrustScore};

use crate::stats::CorruptionReport;
use crate::strategy::CorruptionState;

/// One memory in an audit export. Content is represented by its blake3 hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub memory_id: String,
    pub content_hash: String,
    pub trust_score: TrustScore,
    pub usage_count: u64,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub last_accessed: DateTime<Utc>,
    pub provenance: MemoryProvenance,
    pub health: MemoryHealth,
}

impl AuditRecord {
    pub fn from_entry(node: &MemoryNode, state: &CorruptionState) -> Self {
        Self {
            memory_id: node.id.clone(),
            content_hash: node.content_hash(),
            trust_score: node.trust_score,
            usage_count: node.usage_count,
            category: node.category.clone(),
            created_at: node.created_at,
            last_accessed: node.last_accessed,
            provenance: state.provenance.clone(),
            health: state.health.clone(),
        }
    }
}

/// Point-in-time snapshot of config, statistics, scores, and history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditExport {
    pub export_id: Uuid,
    pub exported_at: DateTime<Utc>,
    pub engine_version: String,
    pub config: CorruptionConfig,
    pub statistics: CorruptionReport,
    /// Sorted by memory id.
    pub records: Vec<AuditRecord>,
}

impl AuditExport {
    pub fn new(
        exported_at: DateTime<Utc>,
        config: CorruptionConfig,
        statistics: CorruptionReport,
        records: Vec<AuditRecord>,
    ) -> Self {
        Self {
            export_id: Uuid::new_v4(),
            exported_at,
            engine_version: VERSION.to_string(),
            config,
            statistics,
            records,
        }
    }

    pub fn to_json(&self) -> VigilResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> VigilResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
