//! Locally minted checkout sessions

use super::provider::{CheckoutProvider, CheckoutSession, CheckoutSessionRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

/// Mints session ids locally and points the customer at
/// `{base_url}/checkout/{session_id}`.
#[derive(Debug, Clone, Default)]
pub struct HostedCheckoutProvider {
    base_url: Option<String>,
}

impl HostedCheckoutProvider {
    /// `base_url` falls back to the request's origin when unset
    pub fn new(base_url: Option<String>) -> Self {
        Self { base_url }
    }
}

#[async_trait]
impl CheckoutProvider for HostedCheckoutProvider {
    fn name(&self) -> &'static str {
        "hosted"
    }

    async fn create_session(&self, request: &CheckoutSessionRequest) -> Result<CheckoutSession> {
        let id = format!("cs_{}", Uuid::new_v4().simple());
        let base = self.base_url.as_deref().unwrap_or(&request.origin_url);
        let url = format!("{}/checkout/{}", base.trim_end_matches('/'), id);

        debug!(session_id = %id, "Hosted checkout session created");
        Ok(CheckoutSession { id, url })
    }
}
