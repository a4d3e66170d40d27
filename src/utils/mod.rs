//! Utility modules for the corporate gateway
//!
//! - **error**: service error type and its HTTP mapping
//! - **format**: locale-aware money formatting

pub mod error;
pub mod format;

pub use format::format_currency;

use uuid::Uuid;

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Check if a string is a valid email
pub fn is_valid_email(email: &str) -> bool {
    format::EMAIL_PATTERN.is_match(email)
}

/// Compare secrets without leaking the position of the first mismatch
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |diff, (x, y)| diff | (x ^ y))
        == 0
}

/// Check if a string is an absolute http(s) URL
pub fn is_valid_http_url(input: &str) -> bool {
    match url::Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}
