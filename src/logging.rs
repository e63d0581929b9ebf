//! Tracing subscriber setup for the CLI.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Picks the default filter directive.
///
/// `--verbose` wins over the configured level. `RUST_LOG` still overrides
/// both when set.
pub fn default_filter(verbose: bool, configured: &str) -> String {
    if verbose {
        "debug".to_string()
    } else {
        configured.to_string()
    }
}

/// Initializes the global tracing subscriber.
///
/// Calling it again after a subscriber is installed is a no-op.
pub fn init(verbose: bool, configured: &str) {
    let filter = default_filter(verbose, configured);
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .ok();
}
