//! Environment overrides
//!
//! Every `CORPORATE_*` variable overrides the matching file setting, so a
//! container can run from the example file plus a handful of secrets.

use super::models::*;
use crate::utils::error::{GatewayError, Result};
use std::str::FromStr;
use tracing::debug;

impl GatewayConfig {
    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server configuration
        if let Some(host) = lookup("CORPORATE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("CORPORATE_PORT") {
            self.server.port = parse("CORPORATE_PORT", &port)?;
        }
        if let Some(workers) = lookup("CORPORATE_WORKERS") {
            self.server.workers = Some(parse("CORPORATE_WORKERS", &workers)?);
        }
        if let Some(origins) = lookup("CORPORATE_CORS_ORIGINS") {
            self.server.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect();
        }

        // Pricing configuration
        if let Some(currency) = lookup("CORPORATE_CURRENCY") {
            self.pricing.currency = currency.to_uppercase();
        }
        if let Some(rate) = lookup("CORPORATE_ANNUAL_DISCOUNT_RATE") {
            self.pricing.annual_discount_rate = parse("CORPORATE_ANNUAL_DISCOUNT_RATE", &rate)?;
        }

        // Checkout configuration
        if let Some(provider) = lookup("CORPORATE_CHECKOUT_PROVIDER") {
            self.checkout.provider = CheckoutProviderKind::from_str(&provider)
                .map_err(GatewayError::config)?;
        }
        if let Some(base_url) = lookup("CORPORATE_CHECKOUT_BASE_URL") {
            self.checkout.base_url = Some(base_url);
        }
        if let Some(api_url) = lookup("CORPORATE_CHECKOUT_API_URL") {
            self.checkout.api_url = Some(api_url);
        }
        if let Some(api_key) = lookup("CORPORATE_CHECKOUT_API_KEY") {
            self.checkout.api_key = Some(api_key);
        }
        if let Some(secret) = lookup("CORPORATE_CHECKOUT_WEBHOOK_SECRET") {
            self.checkout.webhook_secret = Some(secret);
        }

        // Storage configuration
        if let Some(path) = lookup("CORPORATE_PREFERENCES_PATH") {
            self.storage.preferences_path = Some(path);
        }
        if let Some(url) = lookup("CORPORATE_DATABASE_URL") {
            self.storage.database_url = Some(url);
        }

        // Logging configuration
        if let Some(level) = lookup("CORPORATE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(json) = lookup("CORPORATE_LOG_JSON") {
            self.logging.json = parse("CORPORATE_LOG_JSON", &json)?;
        }

        debug!("Environment overrides applied");
        Ok(())
    }
}

fn parse<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| GatewayError::config(format!("Invalid {}: {}", key, e)))
}
