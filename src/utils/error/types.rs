//! The service-wide error enum

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Every fallible operation in the crate returns this; `response.rs` maps
/// each variant to a status and a `{detail, code}` body
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failure talking to the payment API
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 422. The message is shown to the customer as-is.
    #[error("{0}")]
    Validation(String),

    /// 400 with the fixed Portuguese message the pages display; carries the rejected key
    #[error("Plano inválido")]
    InvalidPlan(String),

    #[error("{0}")]
    BadRequest(String),

    /// Webhook called without the shared secret
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Payment API answered with a non-2xx status (502)
    #[error("External service error: {0}")]
    External(String),

    #[error("Payment provider timed out: {0}")]
    Timeout(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Internal server error: {0}")]
    Internal(String),
}
