//! HTTP API integration tests
//!
//! Drives the full actix application (CORS, request ids, JSON error
//! handling, routes) over in-memory storage.

#[cfg(test)]
mod tests {
    use crate::assert_amount;
    use crate::common::assertions::assert_error_body;
    use crate::common::{CheckoutFactory, QuoteFactory, test_state};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use mindcare_corporate::Config;
    use mindcare_corporate::config::CheckoutProviderKind;
    use mindcare_corporate::server::HttpServer;
    use serde_json::{Value, json};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn post_checkout(config: &Config, body: Value) -> (StatusCode, Value) {
        let app = test::init_service(HttpServer::create_app(test_state(config))).await;
        let req = test::TestRequest::post()
            .uri("/api/corporate/checkout")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    // ==================== Checkout ====================

    #[actix_web::test]
    async fn test_checkout_with_hosted_base_url() {
        let mut config = Config::default();
        config.gateway.checkout.base_url = Some("https://pay.mindcare.example".to_string());

        let (status, body) = post_checkout(&config, CheckoutFactory::valid()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let session_id = body["session_id"].as_str().expect("session_id");
        assert_eq!(
            body["checkout_url"],
            format!("https://pay.mindcare.example/checkout/{}", session_id)
        );
    }

    #[actix_web::test]
    async fn test_checkout_amounts_follow_chosen_plan() {
        let config = Config::default();

        for (plan, employees, amount) in [
            ("starter", 30, 450),
            ("BUSINESS", 150, 1800),
            ("enterprise", 250, 2000),
            // chosen plan wins over the recommended one
            ("starter", 120, 1800),
        ] {
            let (status, body) = post_checkout(&config, CheckoutFactory::for_plan(plan, employees)).await;
            assert_eq!(status, StatusCode::OK, "{}", plan);
            assert_amount!(body["amount"], amount);
        }
    }

    #[actix_web::test]
    async fn test_checkout_required_fields() {
        let config = Config::default();

        for field in ["company", "name", "email", "employees", "plan", "origin_url"] {
            let (status, body) = post_checkout(&config, CheckoutFactory::without(field)).await;
            assert_error_body(status, &body, StatusCode::UNPROCESSABLE_ENTITY);
        }

        let (status, _) = post_checkout(&config, CheckoutFactory::without("phone")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_checkout_invalid_plan() {
        let (status, body) =
            post_checkout(&Config::default(), CheckoutFactory::for_plan("gold", 10)).await;
        assert_error_body(status, &body, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Plano inválido");
    }

    #[actix_web::test]
    async fn test_checkout_wrong_types_are_unprocessable() {
        let config = Config::default();

        let mut body = CheckoutFactory::valid();
        body["employees"] = json!("not-a-number");
        let (status, body) = post_checkout(&config, body).await;
        assert_error_body(status, &body, StatusCode::UNPROCESSABLE_ENTITY);

        let mut body = CheckoutFactory::valid();
        body["email"] = json!("invalid-email");
        let (status, body) = post_checkout(&config, body).await;
        assert_error_body(status, &body, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, body) = post_checkout(&config, json!({})).await;
        assert_error_body(status, &body, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_checkout_through_payment_api() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/sessions"))
            .and(header("authorization", "Bearer sk_test_corporate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "sess_123",
                "url": "https://checkout.payments.example/sess_123"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut config = Config::default();
        config.gateway.checkout.provider = CheckoutProviderKind::Http;
        config.gateway.checkout.api_url = Some(format!("{}/v1/sessions", mock_server.uri()));
        config.gateway.checkout.api_key = Some("sk_test_corporate".to_string());

        let (status, body) = post_checkout(&config, CheckoutFactory::valid()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["session_id"], "sess_123");
        assert_eq!(body["checkout_url"], "https://checkout.payments.example/sess_123");
    }

    #[actix_web::test]
    async fn test_payment_api_failure_is_bad_gateway() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&mock_server)
            .await;

        let mut config = Config::default();
        config.gateway.checkout.provider = CheckoutProviderKind::Http;
        config.gateway.checkout.api_url = Some(mock_server.uri());
        config.gateway.checkout.api_key = Some("sk_test_corporate".to_string());

        let (status, body) = post_checkout(&config, CheckoutFactory::valid()).await;
        assert_error_body(status, &body, StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn test_webhook_marks_transaction_paid() {
        let app = test::init_service(HttpServer::create_app(test_state(&Config::default()))).await;

        let req = test::TestRequest::post()
            .uri("/api/corporate/checkout")
            .set_json(CheckoutFactory::valid())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let session_id = body["session_id"].as_str().expect("session_id").to_string();

        let req = test::TestRequest::post()
            .uri("/api/corporate/checkout/webhook")
            .set_json(json!({"session_id": session_id, "payment_status": "paid"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        // a final status does not move again
        let req = test::TestRequest::post()
            .uri("/api/corporate/checkout/webhook")
            .set_json(json!({"session_id": session_id, "payment_status": "expired"}))
            .to_request();
        let _ = test::call_service(&app, req).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/corporate/checkout/status/{}", session_id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["payment_status"], "paid");
        assert_eq!(body["status"], "completed");
    }

    #[actix_web::test]
    async fn test_webhook_for_unknown_session() {
        let app = test::init_service(HttpServer::create_app(test_state(&Config::default()))).await;

        let req = test::TestRequest::post()
            .uri("/api/corporate/checkout/webhook")
            .set_json(json!({"session_id": "cs_unknown", "payment_status": "paid"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    // ==================== Quote requests ====================

    #[actix_web::test]
    async fn test_quote_request_recommends_plan() {
        let app = test::init_service(HttpServer::create_app(test_state(&Config::default()))).await;

        let req = test::TestRequest::post()
            .uri("/api/corporate/quote")
            .set_json(QuoteFactory::valid())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["recommended_plan"], "ENTERPRISE");
    }

    #[actix_web::test]
    async fn test_quote_request_without_employees() {
        let app = test::init_service(HttpServer::create_app(test_state(&Config::default()))).await;

        let mut quote = QuoteFactory::valid();
        if let Some(object) = quote.as_object_mut() {
            object.remove("employees");
        }
        let req = test::TestRequest::post()
            .uri("/api/corporate/quote")
            .set_json(quote)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert!(body.get("recommended_plan").is_none());
    }

    #[actix_web::test]
    async fn test_quote_request_invalid_email() {
        let app = test::init_service(HttpServer::create_app(test_state(&Config::default()))).await;

        let mut quote = QuoteFactory::valid();
        quote["email"] = json!("maria-at-acme");
        let req = test::TestRequest::post()
            .uri("/api/corporate/quote")
            .set_json(quote)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        assert_error_body(status, &body, StatusCode::UNPROCESSABLE_ENTITY);
    }

    // ==================== Pricing ====================

    #[actix_web::test]
    async fn test_calculate_uses_configured_discount() {
        let mut config = Config::default();
        config.gateway.pricing.annual_discount_rate = rust_decimal_macros::dec!(0.25);
        let app = test::init_service(HttpServer::create_app(test_state(&config))).await;

        let req = test::TestRequest::get()
            .uri("/api/corporate/pricing/calculate?employees=10")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_amount!(body["quote"]["monthly_price"], 150);
        assert_amount!(body["quote"]["annual_price"], 1350);
        assert_amount!(body["quote"]["annual_savings"], 450);
        assert_eq!(body["quote"]["monthly_display"], "R$ 150,00");
    }

    #[actix_web::test]
    async fn test_cors_preflight_is_answered() {
        let app = test::init_service(HttpServer::create_app(test_state(&Config::default()))).await;

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/api/corporate/checkout")
            .insert_header(("origin", "https://mindcare.example.com"))
            .insert_header(("access-control-request-method", "POST"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert!(resp.headers().contains_key("access-control-allow-origin"));
    }
}
