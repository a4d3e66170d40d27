//! HTTP response handling for errors
//!
//! Bodies follow the `{"detail": ...}` shape the landing pages read on
//! failure.

use super::types::GatewayError;
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use tracing::{error, warn};

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            GatewayError::InvalidPlan(_) | GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::External(_) | GatewayError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        let detail = if status_code.is_server_error() && !matches!(self, GatewayError::External(_))
        {
            error!(error = %self, "Request failed with internal error");
            "An internal error occurred".to_string()
        } else {
            self.to_string()
        };

        HttpResponse::build(status_code).json(ErrorResponse {
            detail,
            code: self.code().to_string(),
        })
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: String,
}

/// Decode a JSON body read as raw bytes, classified like the extractor:
/// syntax errors are a 400, shape errors a 422
pub fn decode_json<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, GatewayError> {
    serde_json::from_slice(body).map_err(|e| {
        if e.is_data() {
            GatewayError::validation(e.to_string())
        } else {
            GatewayError::bad_request(format!("Malformed JSON: {}", e))
        }
    })
}

/// Maps JSON extractor failures onto the service's error shape.
///
/// Unparsable bodies are a 400; well-formed JSON that does not fit the
/// payload (missing field, wrong type) is a 422.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let gateway_error = match &err {
        JsonPayloadError::Deserialize(inner) if inner.is_data() => {
            GatewayError::validation(inner.to_string())
        }
        JsonPayloadError::Deserialize(inner) => {
            GatewayError::bad_request(format!("Malformed JSON: {}", inner))
        }
        JsonPayloadError::ContentType => {
            GatewayError::bad_request("Content-Type must be application/json")
        }
        other => GatewayError::bad_request(other.to_string()),
    };

    warn!(path = %req.path(), error = %err, "Rejected JSON payload");
    gateway_error.into()
}
