//! Subscriber installation driven by [`ObservabilityConfig`].

pub mod spans;

use tracing_subscriber::EnvFilter;
use vigil_core::config::ObservabilityConfig;

/// Install a global subscriber.
///
/// `RUST_LOG` wins over `config.log_level` when set. Returns `false` if a
/// global subscriber was already installed (the existing one stays active).
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.is_ok()
}
