//! Liveness and build endpoints

use crate::server::state::AppState;
use crate::{BuildInfo, VERSION};
use actix_web::{HttpResponse, Result as ActixResult, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/version", web::get().to(version_info));
}

/// Always `healthy` while the process serves requests; also names the
/// checkout provider so a misconfigured deploy is visible at a glance
pub async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("health check");

    Ok(HttpResponse::Ok().json(HealthStatus {
        status: "healthy",
        timestamp: Utc::now(),
        version: VERSION,
        uptime_seconds: state.uptime_seconds(),
        checkout_provider: state.checkout.provider_name(),
    }))
}

async fn version_info() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(BuildInfo::current()))
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub checkout_provider: &'static str,
}
