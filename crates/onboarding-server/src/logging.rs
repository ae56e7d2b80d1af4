// Logging module — powered by tracing-subscriber
//
// Uses tracing-subscriber for structured spans & events.
// A compatibility bridge (`tracing_log::LogTracer`) captures all existing
// `log::*` macro calls and routes them through the tracing subscriber.

use std::fs::{self, OpenOptions};
use std::path::Path;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingSettings;

/// Log format type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact text format: timestamp LEVEL target - message
    Compact,
    /// JSON Lines format for structured logging
    Json,
}

impl LogFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" | "jsonl" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Build the `EnvFilter` from the base level plus hardcoded noisy-crate
/// overrides.
fn build_env_filter(level: &str) -> anyhow::Result<EnvFilter> {
    let mut directives = vec![level.to_string()];

    // Suppress noisy third-party crates
    let noisy: &[(&str, &str)] = &[
        ("actix_server", "warn"),
        ("actix_web", "warn"),
        ("h2", "warn"),
        ("hyper", "warn"),
        ("reqwest", "warn"),
        ("sqlx", "warn"),
        ("tracing", "warn"),
    ];
    for (target, lvl) in noisy {
        directives.push(format!("{}={}", target, lvl));
    }

    let filter_str = directives.join(",");
    EnvFilter::try_new(&filter_str)
        .map_err(|e| anyhow::anyhow!("Invalid tracing filter '{}': {}", filter_str, e))
}

/// Initialize logging based on configuration.
///
/// Sets up `tracing-subscriber` with:
///  - Colored console layer (when `log_to_console` is true)
///  - File layer (compact text or JSON lines)
///  - `tracing_log::LogTracer` bridge so that all `log::*` calls are captured
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    let log_format = LogFormat::from_str(&settings.format);

    // Create logs directory if it doesn't exist
    if let Some(parent) = Path::new(&settings.file_path).parent() {
        fs::create_dir_all(parent)?;
    }

    // Open log file in append mode
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.file_path)?;

    // Bridge `log` crate → tracing (for all existing log::info!() etc. calls)
    tracing_log::LogTracer::init().ok(); // ok() in case already initialized

    // -- Console layer (optional) --
    let console_layer = if settings.log_to_console {
        Some(
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(build_env_filter(&settings.level)?),
        )
    } else {
        None
    };

    // -- File layer --
    let file_layer = if log_format == LogFormat::Json {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(log_file)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(build_env_filter(&settings.level)?);
        // Boxed because the json() layer has a different type
        layer.boxed()
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(log_file)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(build_env_filter(&settings.level)?);
        layer.boxed()
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::trace!(
        "Logging initialized: level={}, console={}, file={}",
        settings.level,
        settings.log_to_console,
        settings.file_path
    );

    Ok(())
}

#[allow(dead_code)]
/// Initialize simple logging for development (console only)
pub fn init_simple_logging() -> anyhow::Result<()> {
    tracing_log::LogTracer::init().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    Ok(())
}
