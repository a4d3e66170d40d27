//! Sessions created by an external payment API

use super::provider::{CheckoutProvider, CheckoutSession, CheckoutSessionRequest};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// POSTs the session request as JSON with bearer auth and expects
/// `{"id": ..., "url": ...}` back.
#[derive(Debug, Clone)]
pub struct HttpCheckoutProvider {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl HttpCheckoutProvider {
    pub fn new(api_url: String, api_key: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mindcare-corporate/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }
}

#[async_trait]
impl CheckoutProvider for HttpCheckoutProvider {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn create_session(&self, request: &CheckoutSessionRequest) -> Result<CheckoutSession> {
        debug!(api_url = %self.api_url, plan = %request.plan, "Creating checkout session");

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::timeout(format!("Payment API timed out: {}", e))
                } else {
                    GatewayError::external(format!("Payment API unreachable: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Payment API rejected checkout session");
            return Err(GatewayError::external(format!(
                "Payment API returned {}: {}",
                status, body
            )));
        }

        let session: CheckoutSession = response.json().await.map_err(|e| {
            GatewayError::external(format!("Payment API returned an invalid session: {}", e))
        })?;

        if !crate::utils::is_valid_http_url(&session.url) {
            return Err(GatewayError::external(format!(
                "Payment API returned an invalid checkout url: {}",
                session.url
            )));
        }

        Ok(session)
    }
}
