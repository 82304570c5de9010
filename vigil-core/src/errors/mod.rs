mod config_error;
mod scheduler_error;

pub use config_error::ConfigError;
pub use scheduler_error::SchedulerError;

/// Top-level error for every Vigil operation.
#[derive(Debug, thiserror::Error)]
pub enum VigilError {
    #[error("memory not registered: {id}")]
    NotRegistered { id: String },

    #[error("invalid configuration: {0}")]
    ConfigInvalid(#[from] ConfigError),

    #[error("invalid signal for memory {memory_id}: {field} = {value}")]
    InvalidSignal {
        memory_id: String,
        field: &'static str,
        value: f64,
    },

    #[error("scheduler error: {0}")]
    Scheduler(#[from] SchedulerError),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl VigilError {
    /// Shorthand for the unknown-id error.
    pub fn not_registered(id: impl Into<String>) -> Self {
        Self::NotRegistered { id: id.into() }
    }
}

/// Result alias used across the workspace.
pub type VigilResult<T> = Result<T, VigilError>;
