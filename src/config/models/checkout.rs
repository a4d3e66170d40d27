//! Checkout provider configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Which backend creates checkout sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutProviderKind {
    /// Sessions are minted locally and served under `base_url`
    #[default]
    Hosted,
    /// Sessions are created by an external payment API
    Http,
}

impl std::str::FromStr for CheckoutProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hosted" => Ok(Self::Hosted),
            "http" => Ok(Self::Http),
            other => Err(format!("Unknown checkout provider: {}", other)),
        }
    }
}

/// Checkout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    #[serde(default)]
    pub provider: CheckoutProviderKind,
    /// Public base URL for hosted checkout pages; the request origin when unset
    #[serde(default)]
    pub base_url: Option<String>,
    /// Session-creation endpoint of the payment API
    #[serde(default)]
    pub api_url: Option<String>,
    /// Bearer token for the payment API
    #[serde(default)]
    pub api_key: Option<String>,
    /// Payment API timeout in seconds
    #[serde(default = "default_checkout_timeout")]
    pub timeout: u64,
    /// Path on the origin the customer returns to after paying
    #[serde(default = "default_success_path")]
    pub success_path: String,
    /// Path on the origin the customer returns to after cancelling
    #[serde(default = "default_cancel_path")]
    pub cancel_path: String,
    /// Shared secret expected in `x-webhook-secret` on payment callbacks
    #[serde(default)]
    pub webhook_secret: Option<String>,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            provider: CheckoutProviderKind::default(),
            base_url: None,
            api_url: None,
            api_key: None,
            timeout: default_checkout_timeout(),
            success_path: default_success_path(),
            cancel_path: default_cancel_path(),
            webhook_secret: None,
        }
    }
}
