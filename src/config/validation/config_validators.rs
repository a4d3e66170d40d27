//! Validators for each configuration section

use super::trait_def::Validate;
use crate::config::models::*;
use crate::core::pricing::{PricingResolver, TierTable};
use crate::utils::is_valid_http_url;
use rust_decimal::Decimal;

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<(), String> {
        self.server
            .validate()
            .map_err(|e| format!("Server config error: {}", e))?;
        self.pricing
            .validate()
            .map_err(|e| format!("Pricing config error: {}", e))?;
        self.checkout
            .validate()
            .map_err(|e| format!("Checkout config error: {}", e))?;
        self.storage
            .validate()
            .map_err(|e| format!("Storage config error: {}", e))?;
        self.logging
            .validate()
            .map_err(|e| format!("Logging config error: {}", e))?;
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        if self.timeout == 0 {
            return Err("Timeout cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Workers cannot be 0".to_string());
        }

        self.cors.validate()
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.allows_all_origins() && self.allow_credentials {
            return Err(
                "CORS cannot allow all origins (*) when credentials are enabled".to_string(),
            );
        }
        Ok(())
    }
}

impl Validate for PricingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!(
                "Currency must be a 3-letter ISO code, got '{}'",
                self.currency
            ));
        }

        if self.annual_discount_rate < Decimal::ZERO || self.annual_discount_rate >= Decimal::ONE
        {
            return Err(format!(
                "Annual discount rate must be in [0, 1), got {}",
                self.annual_discount_rate
            ));
        }

        if let Some(tiers) = &self.tiers {
            TierTable::new(tiers.clone()).map_err(|e| e.to_string())?;
        }

        PricingResolver::from_config(self)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

impl Validate for CheckoutConfig {
    fn validate(&self) -> Result<(), String> {
        if self.timeout == 0 {
            return Err("Checkout timeout cannot be 0".to_string());
        }

        if let Some(base_url) = &self.base_url {
            if !is_valid_http_url(base_url) {
                return Err(format!("Invalid checkout base_url: {}", base_url));
            }
        }

        for path in [&self.success_path, &self.cancel_path] {
            if !path.starts_with('/') {
                return Err(format!("Checkout return path must start with '/': {}", path));
            }
        }

        if self.provider == CheckoutProviderKind::Http {
            match &self.api_url {
                Some(url) if is_valid_http_url(url) => {}
                Some(url) => return Err(format!("Invalid checkout api_url: {}", url)),
                None => return Err("The http checkout provider requires api_url".to_string()),
            }
            if self.api_key.as_deref().is_none_or(|key| key.trim().is_empty()) {
                return Err("The http checkout provider requires api_key".to_string());
            }
        }

        // An empty secret would match a request without the header
        if self.webhook_secret.as_deref().is_some_and(|s| s.is_empty()) {
            return Err("webhook_secret cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.preferences_path {
            if path.trim().is_empty() {
                return Err("preferences_path cannot be empty".to_string());
            }
        }
        if let Some(url) = &self.database_url {
            const SCHEMES: [&str; 3] = ["sqlite:", "postgres://", "postgresql://"];
            if !SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
                return Err(format!(
                    "database_url must be a sqlite or postgres URL, got {}",
                    url
                ));
            }
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
