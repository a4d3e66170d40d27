//! Service configuration
//!
//! Parsing and validation are separate steps: a file is parsed, environment
//! and command-line values are layered on top, and only the final result is
//! validated. See [`crate::server::load_config`].

mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Service configuration; the YAML document is a `GatewayConfig`
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub gateway: GatewayConfig,
}

impl Config {
    /// Read a YAML file without validating it
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "reading configuration");

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("cannot read {}: {}", path.display(), e)))?;

        let config = Self::from_yaml(&content)?;

        debug!(custom_tiers = config.pricing().tiers.is_some(), "configuration ready");
        Ok(config)
    }

    /// Every section is optional; omitted ones take their defaults. Values
    /// may still be incomplete (a key expected from the environment), so
    /// nothing is validated here.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let gateway: GatewayConfig = serde_yaml::from_str(content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(Self { gateway })
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get pricing configuration
    pub fn pricing(&self) -> &PricingConfig {
        &self.gateway.pricing
    }

    /// Get checkout configuration
    pub fn checkout(&self) -> &CheckoutConfig {
        &self.gateway.checkout
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.gateway.storage
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.gateway.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.gateway.validate().map_err(GatewayError::Config)?;
        self.gateway.server.cors.warn_if_permissive();

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.gateway)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
