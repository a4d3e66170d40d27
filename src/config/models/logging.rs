//! Logging configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Logging configuration, applied when no `RUST_LOG` is set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive (`info`, `mindcare_corporate=debug`, ...)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
