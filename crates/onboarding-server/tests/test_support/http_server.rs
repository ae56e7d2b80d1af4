use anyhow::Result;
use onboarding_server::config::ServerConfig;
use onboarding_server::lifecycle::{self, RunningTestHttpServer};

/// A near-production HTTP server instance for tests.
///
/// Uses the real `lifecycle::bootstrap()` and `run_for_tests()` wiring
/// against a throwaway SQLite database.
pub struct HttpTestServer {
    _temp_dir: tempfile::TempDir,
    pub base_url: String,
    pub config: ServerConfig,
    running: RunningTestHttpServer,
}

impl HttpTestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Path of the server's SQLite file, for tests that assert directly on
    /// stored rows.
    pub fn database_path(&self) -> &str {
        &self.config.storage.database_path
    }

    pub async fn shutdown(self) {
        self.running.shutdown().await;
    }
}

/// Start a near-production HTTP server on a random available port.
///
/// Intended for integration tests that drive `reqwest` against a real
/// server instance.
pub async fn start_http_test_server() -> Result<HttpTestServer> {
    let temp_dir = tempfile::TempDir::new()?;

    let mut config = ServerConfig::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;
    config.server.workers = 1;
    config.storage.database_path = temp_dir
        .path()
        .join("onboarding.db")
        .to_string_lossy()
        .into_owned();

    let components = lifecycle::bootstrap(&config).await?;
    let running = lifecycle::run_for_tests(&config, components).await?;

    let base_url = running.base_url.clone();

    Ok(HttpTestServer {
        _temp_dir: temp_dir,
        base_url,
        config,
        running,
    })
}
