// Onboarding Server
//
// Main server binary for the onboarding backend: persistence-backed HTTP API
// for the multi-page onboarding web form.

use anyhow::Result;
use log::info;
use onboarding_server::{config::ServerConfig, lifecycle, logging};

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = match ServerConfig::from_file("config.toml") {
        Ok(cfg) => cfg,
        Err(_) => {
            eprintln!("Warning: config.toml not found, using defaults");
            ServerConfig::default()
        }
    };

    // Initialize logging
    logging::init_logging(&config.logging)?;

    info!(
        "Starting onboarding server v{}",
        env!("CARGO_PKG_VERSION")
    );
    info!(
        "Configuration loaded: host={}, port={}",
        config.server.host, config.server.port
    );

    let components = lifecycle::bootstrap(&config).await?;
    lifecycle::run(&config, components).await
}
