//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod corporate;
pub mod health;
pub mod preferences;
pub mod pricing;

use actix_web::web;

/// Register every route group on the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .service(
            web::scope("/api")
                .service(
                    web::scope("/corporate")
                        .configure(pricing::configure_routes)
                        .configure(corporate::configure_routes),
                )
                .configure(preferences::configure_routes),
        );
}
