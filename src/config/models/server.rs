//! HTTP listener and CORS settings

use super::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Where and how the corporate API listens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    /// The landing pages call `:8001/api` unless told otherwise
    #[serde(default = "default_port")]
    pub port: u16,
    /// Actix workers; one per CPU when unset
    #[serde(default)]
    pub workers: Option<usize>,
    /// Client request timeout, seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Largest accepted JSON body, bytes. Checkout and quote forms are small.
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            timeout: default_timeout(),
            max_body_size: default_max_body_size(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }
}

/// Cross-origin access for the pricing page and the corporate site.
///
/// Both are served from other origins than the API, so CORS is on by
/// default. An empty `allowed_origins` list admits every origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Site origins, e.g. `https://mindcare.example.com`; `*` admits all
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_cors_methods")]
    pub allowed_methods: Vec<String>,
    #[serde(default = "default_cors_headers")]
    pub allowed_headers: Vec<String>,
    /// Preflight cache lifetime, seconds
    #[serde(default = "default_cors_max_age")]
    pub max_age: u32,
    #[serde(default)]
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: Vec::new(),
            allowed_methods: default_cors_methods(),
            allowed_headers: default_cors_headers(),
            max_age: default_cors_max_age(),
            allow_credentials: false,
        }
    }
}

impl CorsConfig {
    pub fn allows_all_origins(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }

    /// Log configurations that are fine for the public pages but worth knowing about
    pub fn warn_if_permissive(&self) {
        if self.enabled && self.allows_all_origins() {
            warn!("CORS allows all origins");
        }
    }
}

/// The pages only read plans, post forms and toggle the notification flag
fn default_cors_methods() -> Vec<String> {
    ["GET", "POST", "PUT", "OPTIONS"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_cors_headers() -> Vec<String> {
    ["content-type", "x-request-id"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_cors_max_age() -> u32 {
    3600
}
