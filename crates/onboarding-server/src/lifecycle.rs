//! Server lifecycle management helpers.
//!
//! This module encapsulates the heavy lifting that would otherwise live in
//! `main.rs`: bootstrapping the database and stores, wiring the HTTP server,
//! and providing an in-process runner for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::{dev, web, App, HttpServer};
use anyhow::Result;
use log::info;
use onboarding_core::{db, ConfigStore, UserStore};

use crate::config::ServerConfig;
use crate::middleware;
use crate::routes;

/// Aggregated application components shared across the HTTP server.
pub struct ApplicationComponents {
    pub config_store: Arc<ConfigStore>,
    pub user_store: Arc<UserStore>,
}

/// Initialize the SQLite database and the stores backed by it.
pub async fn bootstrap(config: &ServerConfig) -> Result<ApplicationComponents> {
    let db_path = std::path::Path::new(&config.storage.database_path);
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let pool = db::connect(&config.storage.database_path).await?;

    let config_store = Arc::new(ConfigStore::new(pool.clone()));
    let user_store = Arc::new(UserStore::new(pool));
    info!("Stores initialized");

    Ok(ApplicationComponents {
        config_store,
        user_store,
    })
}

/// Run the HTTP server until it is stopped.
pub async fn run(config: &ServerConfig, components: ApplicationComponents) -> Result<()> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting HTTP server on {}", bind_addr);
    info!("Endpoints: GET/POST /api/config, GET/POST /api/users");

    let (server, _addrs) = bind_http_server(config, &components, &bind_addr)?;
    server.await?;

    info!("Server shutdown complete");
    Ok(())
}

/// A running in-process server for integration tests.
pub struct RunningTestHttpServer {
    pub base_url: String,
    handle: dev::ServerHandle,
}

impl RunningTestHttpServer {
    pub async fn shutdown(self) {
        self.handle.stop(true).await;
    }
}

/// Start the server on whatever port the config names (0 picks a free one)
/// and return a handle plus the resolved base URL.
pub async fn run_for_tests(
    config: &ServerConfig,
    components: ApplicationComponents,
) -> Result<RunningTestHttpServer> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let (server, addrs) = bind_http_server(config, &components, &bind_addr)?;

    let addr = addrs
        .first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("Server bound no addresses"))?;
    let handle = server.handle();
    tokio::spawn(server);

    Ok(RunningTestHttpServer {
        base_url: format!("http://{}", addr),
        handle,
    })
}

fn bind_http_server(
    config: &ServerConfig,
    components: &ApplicationComponents,
    bind_addr: &str,
) -> Result<(dev::Server, Vec<SocketAddr>)> {
    let app_config = config.clone();
    let config_store = components.config_store.clone();
    let user_store = components.user_store.clone();

    let server = HttpServer::new(move || {
        // Configure CORS for web browser clients
        let cors = middleware::build_cors_from_config(&app_config);

        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(config_store.clone()))
            .app_data(web::Data::new(user_store.clone()))
            .configure(routes::configure)
    })
    .bind(bind_addr)?
    .workers(if config.server.workers == 0 {
        num_cpus::get()
    } else {
        config.server.workers
    });

    let addrs = server.addrs();
    Ok((server.run(), addrs))
}
