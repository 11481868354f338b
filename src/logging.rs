//! Logging setup for the command-line front end.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr so stdout stays clean for
/// readouts. `RUST_LOG` overrides the configured level.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
