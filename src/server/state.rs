//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::checkout::CheckoutService;
use crate::core::pricing::PricingResolver;
use crate::storage::StorageLayer;
use std::sync::Arc;
use std::time::Instant;

/// HTTP server state shared across handlers
///
/// Every field is cheap to clone; actix clones the state into each worker.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Tier table and quote arithmetic
    pub resolver: Arc<PricingResolver>,
    /// Checkout and quote flows
    pub checkout: CheckoutService,
    /// Storage layer
    pub storage: StorageLayer,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(
        config: Config,
        resolver: Arc<PricingResolver>,
        checkout: CheckoutService,
        storage: StorageLayer,
    ) -> Self {
        Self {
            config: Arc::new(config),
            resolver,
            checkout,
            storage,
            started_at: Instant::now(),
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
