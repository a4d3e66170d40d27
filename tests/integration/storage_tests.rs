//! Storage integration tests
//!
//! The notification flag and checkout sessions must survive a restart when
//! a preferences file and a database are configured.

#[cfg(test)]
mod tests {
    use crate::common::CheckoutFactory;
    use actix_web::{test, web};
    use mindcare_corporate::Config;
    use mindcare_corporate::server::{HttpServer, build_state};
    use mindcare_corporate::storage::{NOTIFICATIONS_ENABLED_KEY, StorageLayer};
    use serde_json::{Value, json};

    fn config_with_preferences(path: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.gateway.storage.preferences_path = Some(path.display().to_string());
        config
    }

    #[tokio::test]
    async fn test_preferences_survive_reopen() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = config_with_preferences(&dir.path().join("preferences.json"));

        let storage = StorageLayer::new(config.storage()).await.expect("open storage");
        assert!(storage.preferences.is_persistent());
        assert!(!storage.preferences.notifications_enabled());
        storage
            .preferences
            .set_notifications_enabled(true)
            .await
            .expect("persist flag");

        let reopened = StorageLayer::new(config.storage()).await.expect("reopen storage");
        assert!(reopened.preferences.notifications_enabled());
        assert_eq!(
            reopened.preferences.get(NOTIFICATIONS_ENABLED_KEY).as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn test_corrupt_preferences_file_is_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json").expect("write corrupt file");

        let result = StorageLayer::new(config_with_preferences(&path).storage()).await;
        assert!(result.is_err());
    }

    #[actix_web::test]
    async fn test_preference_endpoint_writes_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("preferences.json");
        let config = config_with_preferences(&path);

        let storage = StorageLayer::new(config.storage()).await.expect("open storage");
        let state = web::Data::new(build_state(&config, storage).expect("state"));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::put()
            .uri("/api/preferences/notifications")
            .set_json(json!({"enabled": true}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["enabled"], true);

        let content = std::fs::read_to_string(&path).expect("preferences file written");
        let stored: Value = serde_json::from_str(&content).expect("preferences file is JSON");
        assert_eq!(stored[NOTIFICATIONS_ENABLED_KEY], "true");
    }

    #[actix_web::test]
    async fn test_paid_callback_after_restart_finds_session() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut config = Config::default();
        config.gateway.storage.database_url = Some(format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("db").join("corporate.db").display()
        ));

        let session_id = {
            let storage = StorageLayer::new(config.storage()).await.expect("open storage");
            let state = web::Data::new(build_state(&config, storage).expect("state"));
            let app = test::init_service(HttpServer::create_app(state)).await;

            let req = test::TestRequest::post()
                .uri("/api/corporate/checkout")
                .set_json(CheckoutFactory::valid())
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["success"], true);
            body["session_id"].as_str().expect("session id").to_string()
        };

        let storage = StorageLayer::new(config.storage()).await.expect("reopen storage");
        let state = web::Data::new(build_state(&config, storage).expect("state"));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/api/corporate/checkout/webhook")
            .set_json(json!({"session_id": session_id, "payment_status": "paid"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let req = test::TestRequest::get()
            .uri(&format!("/api/corporate/checkout/status/{}", session_id))
            .to_request();
        let status: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(status["payment_status"], "paid");
        assert_eq!(status["status"], "completed");
        assert_eq!(status["amount"], 600.0);
    }

    #[actix_web::test]
    async fn test_preference_endpoint_rejects_non_boolean() {
        let config = Config::default();
        let state = web::Data::new(
            build_state(&config, StorageLayer::in_memory()).expect("state"),
        );
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::put()
            .uri("/api/preferences/notifications")
            .set_json(json!({"enabled": "yes"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 422);
    }
}
