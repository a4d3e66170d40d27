//! Storage layer
//!
//! Corporate transactions and quote requests live in a repository behind the
//! [`TransactionRepository`] trait: a database when `database_url` is set,
//! process memory otherwise. The app's single persisted preference flag lives
//! in the [`PreferenceStore`].

pub mod database;
pub mod preferences;
pub mod transactions;

pub use database::DatabaseRepository;

pub use preferences::{NOTIFICATIONS_ENABLED_KEY, PreferenceStore};
pub use transactions::{
    CorporateTransaction, InMemoryRepository, PaymentStatus, StoredQuoteRequest,
    TransactionRepository, TransactionStatus,
};

use crate::config::StorageConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use std::path::Path;
use tracing::{info, warn};

/// All storage handles the server needs
#[derive(Clone)]
pub struct StorageLayer {
    pub transactions: Arc<dyn TransactionRepository>,
    pub preferences: Arc<PreferenceStore>,
}

impl StorageLayer {
    /// Open the configured storage backends
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        let preferences = match &config.preferences_path {
            Some(path) => PreferenceStore::open(path).await?,
            None => PreferenceStore::in_memory(),
        };

        let transactions: Arc<dyn TransactionRepository> = match &config.database_url {
            Some(url) => {
                if config.is_sqlite() {
                    create_sqlite_parent(url).await?;
                }
                Arc::new(DatabaseRepository::connect(url).await?)
            }
            None => {
                warn!("No database_url configured, checkout sessions are lost on restart");
                Arc::new(InMemoryRepository::new())
            }
        };

        info!(
            persistent_preferences = config.preferences_path.is_some(),
            persistent_transactions = config.database_url.is_some(),
            "Storage layer initialized"
        );

        Ok(Self {
            transactions,
            preferences: Arc::new(preferences),
        })
    }

    /// Purely in-memory storage, used by tests and ephemeral deployments
    pub fn in_memory() -> Self {
        Self {
            transactions: Arc::new(InMemoryRepository::new()),
            preferences: Arc::new(PreferenceStore::in_memory()),
        }
    }
}

/// SQLite creates the file with `mode=rwc` but not its directory
async fn create_sqlite_parent(url: &str) -> Result<()> {
    let path = url
        .trim_start_matches("sqlite:")
        .trim_start_matches("//")
        .split('?')
        .next()
        .unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return Ok(());
    }

    match Path::new(path).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            tokio::fs::create_dir_all(dir).await?;
            Ok(())
        }
        _ => Ok(()),
    }
}
