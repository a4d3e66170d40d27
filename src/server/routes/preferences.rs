//! Notification preference endpoints

use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Configure preference routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/preferences/notifications")
            .route(web::get().to(get_notifications))
            .route(web::put().to(set_notifications)),
    );
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NotificationPreference {
    pub enabled: bool,
}

/// GET /api/preferences/notifications
pub async fn get_notifications(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(NotificationPreference {
        enabled: state.storage.preferences.notifications_enabled(),
    }))
}

/// PUT /api/preferences/notifications
pub async fn set_notifications(
    state: web::Data<AppState>,
    payload: web::Json<NotificationPreference>,
) -> Result<HttpResponse> {
    let enabled = payload.enabled;
    state
        .storage
        .preferences
        .set_notifications_enabled(enabled)
        .await?;

    info!(enabled, "Notification preference updated");
    Ok(HttpResponse::Ok().json(NotificationPreference { enabled }))
}
