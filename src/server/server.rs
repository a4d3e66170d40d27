//! Actix application assembly and the listener

use crate::config::{Config, ServerConfig};
use crate::core::checkout::{CheckoutService, build_provider};
use crate::core::pricing::PricingResolver;
use crate::server::middleware::RequestIdMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::StorageLayer;
use crate::utils::error::{GatewayError, Result, json_error_handler};
use actix_cors::Cors;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// A configured but not yet bound corporate API server
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
}

impl HttpServer {
    /// Opens the configured storage; fails on an unreadable preferences file
    pub async fn new(config: &Config) -> Result<Self> {
        let storage = StorageLayer::new(config.storage()).await?;
        Self::with_storage(config, storage)
    }

    /// Tests and embedders hand in their own storage
    pub fn with_storage(config: &Config, storage: StorageLayer) -> Result<Self> {
        let state = build_state(config, storage)?;

        Ok(Self {
            config: config.gateway.server.clone(),
            state,
        })
    }

    /// One app per worker. Middleware runs outermost-last: server header,
    /// request id, access log, CORS.
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let server_config = &state.config.gateway.server;
        let cors = build_cors(server_config);
        let json_config = web::JsonConfig::default()
            .limit(server_config.max_body_size)
            .error_handler(json_error_handler);

        App::new()
            .app_data(state)
            .app_data(json_config)
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .wrap(DefaultHeaders::new().add(("Server", "MindCare-Corporate")))
            .configure(routes::configure_routes)
    }

    /// Bind and serve until shutdown
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();
        let timeout = Duration::from_secs(self.config.timeout);

        info!(address = %bind_addr, workers, "binding corporate API");

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .client_request_timeout(timeout)
            .bind(&bind_addr)
            .map_err(|e| GatewayError::server(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!(address = %bind_addr, "corporate API listening");

        server
            .await
            .map_err(|e| GatewayError::server(format!("server terminated: {}", e)))?;

        info!("corporate API stopped");
        Ok(())
    }
}

/// Wire the resolver, checkout provider and storage into handler state
pub fn build_state(config: &Config, storage: StorageLayer) -> Result<AppState> {
    let resolver = Arc::new(PricingResolver::from_config(config.pricing())?);
    let provider = build_provider(config.checkout())?;

    info!(
        tiers = resolver.table().len(),
        currency = resolver.currency(),
        provider = provider.name(),
        "Pricing and checkout initialized"
    );

    let checkout = CheckoutService::new(
        Arc::clone(&resolver),
        provider,
        Arc::clone(&storage.transactions),
        config.checkout().clone(),
    );

    Ok(AppState::new(config.clone(), resolver, checkout, storage))
}

fn build_cors(config: &ServerConfig) -> Cors {
    let cors_config = &config.cors;
    if !cors_config.enabled {
        return Cors::default();
    }

    let mut cors = Cors::default();

    if cors_config.allows_all_origins() {
        cors = cors.allow_any_origin();
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<actix_web::http::Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    if methods.is_empty() {
        warn!("No valid CORS methods configured");
    } else {
        cors = cors.allowed_methods(methods);
    }

    let headers: Vec<actix_web::http::header::HeaderName> = cors_config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();
    if !headers.is_empty() {
        cors = cors.allowed_headers(headers);
    }

    cors = cors
        .expose_headers([crate::server::middleware::REQUEST_ID_HEADER])
        .max_age(cors_config.max_age as usize);

    if cors_config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
