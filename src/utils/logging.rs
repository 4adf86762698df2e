//! Diagnostic logging. Everything goes to stderr so stdout stays the
//! user-facing channel.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn enable_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={level}",
            env!("CARGO_PKG_NAME").replace('-', "_")
        ))
    });

    // A second call (e.g. from tests driving `run` twice) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
