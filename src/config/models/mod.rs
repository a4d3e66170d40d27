//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

pub mod checkout;
pub mod gateway;
pub mod logging;
pub mod pricing;
pub mod server;
pub mod storage;

pub use checkout::*;
pub use gateway::*;
pub use logging::*;
pub use pricing::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port (the landing pages expect `:8001/api`)
pub fn default_port() -> u16 {
    8001
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    256 * 1024
}

pub fn default_true() -> bool {
    true
}

pub fn default_checkout_timeout() -> u64 {
    15
}

pub fn default_success_path() -> String {
    "/checkout/success".to_string()
}

pub fn default_cancel_path() -> String {
    "/checkout/cancel".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}
