pub mod corruption_config;
pub mod decay_policy;
pub mod defaults;
pub mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use corruption_config::{CorruptionConfig, CorruptionConfigUpdate};
pub use decay_policy::DecayPolicy;
pub use observability_config::ObservabilityConfig;

use crate::errors::VigilResult;

/// Top-level configuration, one section per subsystem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VigilConfig {
    pub decay: DecayPolicy,
    pub corruption: CorruptionConfig,
    pub observability: ObservabilityConfig,
}

impl VigilConfig {
    /// Parse and validate a TOML document. Missing sections and fields take defaults.
    pub fn from_toml(source: &str) -> VigilResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> VigilResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Validate every section.
    pub fn validate(&self) -> VigilResult<()> {
        self.decay.validate()?;
        self.corruption.validate()?;
        Ok(())
    }
}
