//! Checkout session providers

use super::hosted::HostedCheckoutProvider;
use super::http::HttpCheckoutProvider;
use crate::config::{CheckoutConfig, CheckoutProviderKind};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Everything a provider needs to open a payment session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutSessionRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
    pub plan: String,
    pub employees: u32,
    pub customer_email: String,
    pub origin_url: String,
    pub success_url: String,
    pub cancel_url: String,
    pub metadata: BTreeMap<String, String>,
}

/// An opened payment session
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CheckoutSession {
    #[serde(alias = "session_id")]
    pub id: String,
    #[serde(alias = "checkout_url")]
    pub url: String,
}

/// Creates hosted payment sessions
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Provider name recorded on each transaction
    fn name(&self) -> &'static str;

    async fn create_session(&self, request: &CheckoutSessionRequest) -> Result<CheckoutSession>;
}

/// Build the provider selected in the configuration
pub fn build_provider(config: &CheckoutConfig) -> Result<Arc<dyn CheckoutProvider>> {
    match config.provider {
        CheckoutProviderKind::Hosted => Ok(Arc::new(HostedCheckoutProvider::new(
            config.base_url.clone(),
        ))),
        CheckoutProviderKind::Http => {
            let api_url = config.api_url.clone().ok_or_else(|| {
                GatewayError::config("The http checkout provider requires api_url")
            })?;
            let api_key = config.api_key.clone().ok_or_else(|| {
                GatewayError::config("The http checkout provider requires api_key")
            })?;
            Ok(Arc::new(HttpCheckoutProvider::new(
                api_url,
                api_key,
                std::time::Duration::from_secs(config.timeout),
            )?))
        }
    }
}
