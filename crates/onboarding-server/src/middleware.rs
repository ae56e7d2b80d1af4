//! Server-wide middleware configuration helpers.
//!
//! Keeps the Actix application setup focused by providing a reusable
//! constructor for the CORS layer the web frontend depends on.

use actix_cors::Cors;
use actix_web::http::Method;
use log::debug;

use crate::config::ServerConfig;

/// Build CORS middleware from server configuration using actix-cors.
///
/// An empty origin list or a `"*"` entry allows any origin; otherwise each
/// configured origin is allow-listed exactly.
pub fn build_cors_from_config(config: &ServerConfig) -> Cors {
    let cors_config = &config.cors;

    let mut cors = Cors::default();

    if cors_config.allowed_origins.is_empty()
        || cors_config.allowed_origins.contains(&"*".to_string())
    {
        cors = cors.allow_any_origin();
        debug!("CORS: Allowing any origin");
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
        debug!("CORS: Allowed origins: {:?}", cors_config.allowed_origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    if !methods.is_empty() {
        cors = cors.allowed_methods(methods);
    }

    cors = cors.allow_any_header();

    if cors_config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors.max_age(cors_config.max_age)
}
