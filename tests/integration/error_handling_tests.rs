//! Error handling integration tests
//!
//! Verifies that library errors map onto the HTTP status and body the
//! landing pages rely on.

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;
    use mindcare_corporate::utils::error::{ErrorResponse, GatewayError};

    async fn body_of(error: &GatewayError) -> ErrorResponse {
        let bytes = to_bytes(error.error_response().into_body())
            .await
            .expect("error body");
        serde_json::from_slice(&bytes).expect("error body is JSON")
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (GatewayError::validation("email is invalid"), 422),
            (GatewayError::invalid_plan("gold"), 400),
            (GatewayError::bad_request("Malformed JSON"), 400),
            (GatewayError::unauthorized("bad secret"), 401),
            (GatewayError::not_found("session"), 404),
            (GatewayError::external("Payment API returned 503"), 502),
            (GatewayError::timeout("Payment API timed out"), 504),
            (GatewayError::storage("disk full"), 500),
            (GatewayError::config("missing api_key"), 500),
        ];

        for (error, status) in cases {
            assert_eq!(error.status_code().as_u16(), status, "{:?}", error);
        }
    }

    #[actix_web::test]
    async fn test_invalid_plan_detail_is_localized() {
        let body = body_of(&GatewayError::invalid_plan("gold")).await;
        assert_eq!(body.detail, "Plano inválido");
        assert_eq!(body.code, "INVALID_PLAN");
    }

    #[actix_web::test]
    async fn test_internal_details_are_hidden() {
        let body = body_of(&GatewayError::storage("/var/lib/corporate is read-only")).await;
        assert_eq!(body.detail, "An internal error occurred");
        assert!(!body.detail.contains("/var/lib"));
    }

    #[actix_web::test]
    async fn test_payment_api_errors_are_surfaced() {
        let body = body_of(&GatewayError::external("Payment API returned 503")).await;
        assert!(body.detail.contains("503"));
        assert_eq!(body.code, "EXTERNAL_ERROR");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(GatewayError::validation("x").is_client_error());
        assert!(GatewayError::invalid_plan("x").is_client_error());
        assert!(!GatewayError::internal("x").is_client_error());
    }
}
