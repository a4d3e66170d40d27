//! Custom test assertions

use actix_web::http::StatusCode;
use serde_json::Value;

/// Assert the status and the `{detail, code}` error body shape
pub fn assert_error_body(status: StatusCode, body: &Value, expected_status: StatusCode) {
    assert_eq!(status, expected_status, "unexpected status, body: {}", body);
    assert!(
        body["detail"].is_string(),
        "Expected a string `detail` in error body, got {}",
        body
    );
    assert!(
        body["code"].is_string(),
        "Expected a string `code` in error body, got {}",
        body
    );
}

/// Assert a JSON number equals an expected amount
#[macro_export]
macro_rules! assert_amount {
    ($value:expr, $expected:expr) => {
        let actual = $value
            .as_f64()
            .unwrap_or_else(|| panic!("expected a number, got {}", $value));
        assert!(
            (actual - ($expected as f64)).abs() < 1e-9,
            "amount mismatch: left `{}`, right `{}`",
            actual,
            $expected
        );
    };
}
