//! Handlers for the `/api/config` endpoints.
//!
//! Reads seed the default layout when the store is empty; writes replace the
//! singleton row wholesale and echo the persisted, normalized state.

use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse, Responder};
use log::error;
use onboarding_core::ConfigStore;

use crate::models::{ConfigRequest, ConfigResponse, ErrorResponse};

/// GET /api/config - Fetch the onboarding page layout
///
/// # Example Response
/// ```json
/// {
///   "page2Components": ["aboutMe", "birthdate"],
///   "page3Components": ["address"]
/// }
/// ```
#[get("/config")]
pub async fn get_config(store: web::Data<Arc<ConfigStore>>) -> impl Responder {
    match store.fetch_or_seed().await {
        Ok(config) => HttpResponse::Ok().json(ConfigResponse::from(config)),
        Err(e) => {
            error!("Failed to load onboarding configuration: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("STORE_ERROR", &e.to_string()))
        }
    }
}

/// POST /api/config - Replace the onboarding page layout
///
/// Accepts arrays, comma-separated strings, or null per slot (see
/// [`ConfigRequest`]) and responds with the normalized state as persisted.
#[post("/config")]
pub async fn save_config(
    request: web::Json<ConfigRequest>,
    store: web::Data<Arc<ConfigStore>>,
) -> impl Responder {
    match store.replace(request.normalized()).await {
        Ok(config) => HttpResponse::Ok().json(ConfigResponse::from(config)),
        Err(e) => {
            error!("Failed to save onboarding configuration: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("STORE_ERROR", &e.to_string()))
        }
    }
}
