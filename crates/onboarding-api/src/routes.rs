//! API routes configuration
//!
//! This module configures all HTTP routes for the onboarding API.

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::handlers;

/// Configure API routes for the onboarding backend
///
/// - GET  /api/config      - Fetch the page layout (seeds defaults if absent)
/// - POST /api/config      - Replace the page layout
/// - GET  /api/users       - List applicants
/// - POST /api/users       - Create an applicant
/// - GET  /api/user/all    - Legacy alias for listing applicants
/// - GET  /api/healthcheck - Health check endpoint
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(handlers::get_config)
            .service(handlers::save_config)
            .service(handlers::create_user)
            .service(handlers::list_users)
            .service(handlers::list_users_legacy)
            .route("/healthcheck", web::get().to(healthcheck_handler)),
    );
}

/// Health check endpoint handler
async fn healthcheck_handler() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
