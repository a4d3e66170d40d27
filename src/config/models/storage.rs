//! Where transactions and preferences are kept

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file backing the preference store; in-memory only when unset
    #[serde(default)]
    pub preferences_path: Option<String>,
    /// Database for checkout transactions and quote requests, e.g.
    /// `sqlite://data/corporate.db?mode=rwc`. Without it checkout sessions
    /// do not survive a restart.
    #[serde(default)]
    pub database_url: Option<String>,
}

impl StorageConfig {
    pub fn is_sqlite(&self) -> bool {
        self.database_url
            .as_deref()
            .is_some_and(|url| url.starts_with("sqlite:"))
    }
}
