// Configuration module

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
    #[serde(default)]
    pub cors: CorsSettings,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// Storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Path to the SQLite database file. Parent directories are created on
    /// startup if missing.
    pub database_path: String,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    pub file_path: String,
    #[serde(default = "default_true")]
    pub log_to_console: bool,
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// CORS settings for the web frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins; `"*"` (or an empty list) allows any origin.
    #[serde(default = "default_cors_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_cors_methods")]
    pub allowed_methods: Vec<String>,
    #[serde(default = "default_true")]
    pub allow_credentials: bool,
    #[serde(default = "default_cors_max_age")]
    pub max_age: usize,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_cors_origins(),
            allowed_methods: default_cors_methods(),
            allow_credentials: default_true(),
            max_age: default_cors_max_age(),
        }
    }
}

// Default value functions
fn default_workers() -> usize {
    0
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_cors_methods() -> Vec<String> {
    ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
        .iter()
        .map(|m| m.to_string())
        .collect()
}

fn default_cors_max_age() -> usize {
    3600
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        let mut config: ServerConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?;

        // Override with environment variables if present
        config.apply_env_overrides()?;

        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides for deployment-specific settings
    ///
    /// Supported environment variables:
    /// - ONBOARDING_DATABASE_PATH: Override storage.database_path
    /// - ONBOARDING_LOG_FILE_PATH: Override logging.file_path
    /// - ONBOARDING_HOST: Override server.host
    /// - ONBOARDING_PORT: Override server.port
    fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        use std::env;

        if let Ok(path) = env::var("ONBOARDING_DATABASE_PATH") {
            self.storage.database_path = path;
        }

        if let Ok(path) = env::var("ONBOARDING_LOG_FILE_PATH") {
            self.logging.file_path = path;
        }

        if let Ok(host) = env::var("ONBOARDING_HOST") {
            self.server.host = host;
        }

        if let Ok(port_str) = env::var("ONBOARDING_PORT") {
            self.server.port = port_str
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid ONBOARDING_PORT value: {}", port_str))?;
        }

        Ok(())
    }

    /// Validate configuration settings
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            return Err(anyhow::anyhow!("Server port cannot be 0"));
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            ));
        }

        let valid_formats = ["compact", "pretty", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_formats.join(", ")
            ));
        }

        if self.storage.database_path.is_empty() {
            return Err(anyhow::anyhow!("storage.database_path cannot be empty"));
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 8080,
                workers: 0,
            },
            storage: StorageSettings {
                database_path: "./data/onboarding.db".to_string(),
            },
            logging: LoggingSettings {
                level: "info".to_string(),
                file_path: "./logs/app.log".to_string(),
                log_to_console: true,
                format: "compact".to_string(),
            },
            cors: CorsSettings::default(),
        }
    }
}
