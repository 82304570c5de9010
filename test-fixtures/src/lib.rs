//! Test fixture loader for Vigil golden scenarios.
//!
//! Provides typed deserialization of the golden JSON files and builders that
//! turn relative fixture times ("60 days ago") into concrete nodes and
//! provenance records anchored at a caller-chosen `now`.

use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use vigil_core::memory::{
    MemoryNode, MemoryProvenance, MemorySource, QuarantineStatus, SignalScores, TrustStatus,
    ValidationLevel,
};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

// ── Builders ─────────────────────────────────────────────────────────────

/// Node fields as they appear in fixtures, with recency expressed in days.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeSpec {
    pub trust_score: f64,
    pub usage_count: u64,
    pub days_since_access: i64,
    pub decay_rate: f64,
    pub category: String,
    pub importance: f64,
}

impl NodeSpec {
    pub fn build(&self, id: &str, now: DateTime<Utc>) -> MemoryNode {
        let last_accessed = now - Duration::days(self.days_since_access);
        let mut node = MemoryNode::new(id, format!("fixture {id}"), last_accessed)
            .with_trust(self.trust_score)
            .with_category(self.category.clone())
            .with_importance(self.importance)
            .with_decay_rate(self.decay_rate);
        node.usage_count = self.usage_count;
        node
    }
}

/// Provenance fields as they appear in fixtures, with age expressed in days.
#[derive(Debug, Clone, Deserialize)]
pub struct ProvenanceSpec {
    pub source: MemorySource,
    pub confidence: f64,
    pub validation_level: ValidationLevel,
    pub age_days: i64,
    #[serde(default)]
    pub chain_of_trust: Vec<String>,
}

impl ProvenanceSpec {
    pub fn build(&self, now: DateTime<Utc>) -> MemoryProvenance {
        MemoryProvenance::new(
            self.source,
            self.confidence,
            self.validation_level,
            now - Duration::days(self.age_days),
        )
        .with_chain(self.chain_of_trust.iter().cloned())
    }
}

/// A fresh node accessed at `now` with neutral importance.
pub fn node(id: &str, now: DateTime<Utc>) -> MemoryNode {
    MemoryNode::new(id, format!("content of {id}"), now).with_importance(0.0)
}

/// Provenance recorded at `now` with the given confidence and validation level.
pub fn provenance(
    confidence: f64,
    validation_level: ValidationLevel,
    now: DateTime<Utc>,
) -> MemoryProvenance {
    MemoryProvenance::new(MemorySource::UserInput, confidence, validation_level, now)
}

// ── Golden scenarios ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct DecayExpectation {
    pub adjusted_rate: f64,
    pub decay_amount: f64,
    pub new_trust: f64,
    pub status: TrustStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecayScenario {
    pub description: String,
    pub node: NodeSpec,
    pub expected: DecayExpectation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProvenanceScenario {
    pub description: String,
    pub provenance: ProvenanceSpec,
    pub expected_provenance_weakness: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompositeScenario {
    pub description: String,
    pub signals: SignalScores,
    pub expected_corruption_score: f64,
    pub expected_status: QuarantineStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuarantineScenario {
    pub description: String,
    pub provenance: ProvenanceSpec,
    pub logical_consistent: Option<bool>,
    pub expected_signals: SignalScores,
    pub expected_corruption_score: f64,
    pub expected_status: QuarantineStatus,
    pub expected_history_reasons: Vec<String>,
    pub expected_quarantined_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReRegisterScenario {
    pub description: String,
    pub first: ProvenanceSpec,
    pub second: ProvenanceSpec,
}

/// All decay scenarios under `golden/decay`, with their file stems.
pub fn decay_scenarios() -> Vec<(String, DecayScenario)> {
    list_fixtures("golden/decay")
        .into_iter()
        .map(|path| {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let scenario = load_fixture(&format!("golden/decay/{stem}.json"));
            (stem, scenario)
        })
        .collect()
}
