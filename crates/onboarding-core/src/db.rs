//! Database connection setup and schema bootstrap.
//!
//! The schema is created idempotently at startup; there is no migration
//! tooling. The singleton configuration row is enforced at the store level
//! with a fixed primary key plus a `CHECK (id = 1)` constraint, so a second
//! insert fails safely even when the process is horizontally scaled.

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error::Result;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS onboarding_config (
        id INTEGER PRIMARY KEY CHECK (id = 1)
    )",
    "CREATE TABLE IF NOT EXISTS config_page_components (
        config_id INTEGER NOT NULL REFERENCES onboarding_config(id) ON DELETE CASCADE,
        page      INTEGER NOT NULL,
        position  INTEGER NOT NULL,
        component TEXT    NOT NULL,
        PRIMARY KEY (config_id, page, position)
    )",
    "CREATE TABLE IF NOT EXISTS users (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        email     TEXT,
        password  TEXT,
        about_me  TEXT,
        street    TEXT,
        city      TEXT,
        state     TEXT,
        zip       TEXT,
        birthdate TEXT
    )",
];

/// Open (creating if missing) the SQLite database at `path` and ensure the
/// schema exists.
pub async fn connect(path: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(5))
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;
    info!("SQLite database ready at {}", path);

    Ok(pool)
}

/// Create all tables if they do not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
