//! Corporate checkout and quote-request endpoints

use crate::core::checkout::{CorporateCheckoutRequest, PaymentWebhook, QuoteRequest};
use crate::server::middleware::RequestId;
use crate::server::state::AppState;
use crate::utils::constant_time_eq;
use crate::utils::error::{GatewayError, Result, decode_json};
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use tracing::{info, warn};

/// Header carrying the shared secret on payment callbacks
pub const WEBHOOK_SECRET_HEADER: &str = "x-webhook-secret";

/// Configure corporate routes (mounted under `/api/corporate`)
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/checkout", web::post().to(create_checkout))
        .route("/checkout/webhook", web::post().to(payment_webhook))
        .route(
            "/checkout/status/{session_id}",
            web::get().to(checkout_status),
        )
        .route("/quote", web::post().to(submit_quote));
}

/// POST /api/corporate/checkout
pub async fn create_checkout(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: web::Json<CorporateCheckoutRequest>,
) -> Result<HttpResponse> {
    let request = payload.into_inner();
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();
    info!(
        request_id = %request_id,
        company = %request.company,
        plan = %request.plan,
        employees = request.employees,
        "Corporate checkout requested"
    );

    let response = state.checkout.create_checkout(request).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/corporate/checkout/status/{session_id}
pub async fn checkout_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let status = state.checkout.checkout_status(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(status))
}

/// POST /api/corporate/checkout/webhook
///
/// The body is decoded only after the secret matches, so unauthenticated
/// callers learn nothing about the payload shape.
pub async fn payment_webhook(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse> {
    if let Some(expected) = state.config().checkout().webhook_secret.as_deref() {
        let provided = req
            .headers()
            .get(WEBHOOK_SECRET_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        if !constant_time_eq(provided, expected) {
            warn!(
                peer = ?req.peer_addr(),
                "Rejected payment webhook with a missing or wrong secret"
            );
            return Err(GatewayError::unauthorized("Invalid webhook secret"));
        }
    }

    let webhook: PaymentWebhook = decode_json(&body)?;
    let status = state.checkout.apply_webhook(webhook).await?;
    Ok(HttpResponse::Ok().json(status))
}

/// POST /api/corporate/quote
pub async fn submit_quote(
    state: web::Data<AppState>,
    payload: web::Json<QuoteRequest>,
) -> Result<HttpResponse> {
    let ack = state.checkout.submit_quote(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ack))
}
