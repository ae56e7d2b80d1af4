//! HTTP route registration for the onboarding server.
//!
//! This module wires the Actix-Web application to the shared
//! `onboarding-api` route configuration so the server keeps its
//! entrypoint lightweight.

use actix_web::web;

/// Register all HTTP routes for the server.
pub fn configure(cfg: &mut web::ServiceConfig) {
    onboarding_api::routes::configure_routes(cfg);
}
