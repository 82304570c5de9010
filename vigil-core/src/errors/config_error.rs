/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("thresholds must satisfy 0 <= decay ({decay}) <= quarantine ({quarantine}) <= 1")]
    InvalidThresholds { decay: f64, quarantine: f64 },

    #[error("interval for {component} must be greater than zero")]
    InvalidInterval { component: &'static str },

    #[error("history cap for {component} must be greater than zero")]
    InvalidHistoryCap { component: &'static str },

    #[error("invalid policy field {field}: {reason}")]
    InvalidPolicy { field: String, reason: String },
}
