//! Top-level service configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Root of `corporate.yaml`; every section may be omitted
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    #[serde(default)]
    pub server: ServerConfig,
    /// Tier table and discount
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Checkout session provider
    #[serde(default)]
    pub checkout: CheckoutConfig,
    /// Where the notification flag lives
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
