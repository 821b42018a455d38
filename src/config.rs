//! # Tool Configuration
//!
//! Settings for the command-line tools, loaded from environment variables.
//! Command-line flags take precedence over these values.

use crate::codec::Format;
use crate::constants::{DEFAULT_LOG_LEVEL, ENV_LOG_COLOR, ENV_LOG_LEVEL, ENV_OUTPUT_FORMAT};

/// Tool-level configuration
///
/// All settings have defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Log level used when `RUST_LOG` is not set (error, warn, info, debug, trace)
    pub log_level: String,
    /// Default output format for printed documents
    pub output: Format,
    /// Enable ANSI colors in log output
    pub log_enable_color: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            output: Format::Yaml,
            log_enable_color: false,
        }
    }
}

impl ToolConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup(ENV_LOG_LEVEL)
                .filter(|v| !v.trim().is_empty())
                .map_or(defaults.log_level, |v| v.trim().to_lowercase()),
            output: value_or_default(lookup(ENV_OUTPUT_FORMAT), defaults.output),
            log_enable_color: lookup(ENV_LOG_COLOR)
                .map_or(defaults.log_enable_color, |v| parse_bool(&v)),
        }
    }
}

fn value_or_default<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn parse_bool(value: &str) -> bool {
    let v_lower = value.to_lowercase();
    v_lower == "true" || v_lower == "1" || v_lower == "yes" || v_lower == "on"
}
