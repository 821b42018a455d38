//! # Observability
//!
//! Tracing subscriber setup for the command-line tools. The library itself
//! only emits `tracing` events and never installs a subscriber.

use crate::config::ToolConfig;
use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` wins, then the configured level
#[must_use]
pub fn env_filter(config: &ToolConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global `tracing` subscriber, writing to stderr
///
/// Stdout is reserved for generated documents so they can be piped into
/// `kubectl apply -f -`. Calling this twice is harmless; the second call
/// leaves the first subscriber in place.
pub fn init_tracing(config: &ToolConfig) {
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_ansi(config.log_enable_color)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("tracing subscriber already initialized: {e}");
    }
}
