use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a memory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemorySource {
    UserInput,
    ModelOutput,
    FineTune,
    Imported,
}

/// How thoroughly a memory was validated before storage.
///
/// Values outside the known set deserialize to `Unrecognized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationLevel {
    None,
    Basic,
    Thorough,
    Verified,
    #[serde(other)]
    Unrecognized,
}

impl ValidationLevel {
    /// Base provenance weakness contributed by the validation depth.
    pub fn base_weakness(self) -> f64 {
        match self {
            Self::Verified => 0.0,
            Self::Thorough => 0.1,
            Self::Basic => 0.3,
            Self::None => 0.6,
            Self::Unrecognized => 0.5,
        }
    }
}

/// Origin metadata for a memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryProvenance {
    pub source: MemorySource,
    /// Source confidence in [0.0, 1.0].
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
    pub validation_level: ValidationLevel,
    /// Ordered attestation identifiers. Only the length is scored.
    #[serde(default)]
    pub chain_of_trust: Vec<String>,
}

impl MemoryProvenance {
    pub fn new(
        source: MemorySource,
        confidence: f64,
        validation_level: ValidationLevel,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            source,
            confidence,
            timestamp,
            validation_level,
            chain_of_trust: Vec::new(),
        }
    }

    pub fn with_chain(mut self, chain: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.chain_of_trust = chain.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_validation_level_deserializes() {
        let level: ValidationLevel = serde_json::from_str("\"peer_reviewed\"").unwrap();
        assert_eq!(level, ValidationLevel::Unrecognized);
        assert_eq!(level.base_weakness(), 0.5);
    }

    #[test]
    fn source_uses_kebab_case() {
        let json = serde_json::to_string(&MemorySource::UserInput).unwrap();
        assert_eq!(json, "\"user-input\"");
        let parsed: MemorySource = serde_json::from_str("\"fine-tune\"").unwrap();
        assert_eq!(parsed, MemorySource::FineTune);
    }
}
