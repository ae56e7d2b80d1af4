//! Singleton onboarding-configuration store.
//!
//! This module holds the one piece of real logic in the system: coercing the
//! flexible client input shapes for a page slot into a canonical ordered list
//! of component names, and persisting the result as a single fixed-identity
//! row with full-replace semantics.
//!
//! A page slot arrives from the client as one of:
//! - a JSON array of arbitrary values (each stringified, order kept),
//! - a single scalar holding comma-separated names, or
//! - null / absent.
//!
//! Any string is accepted verbatim; there is no whitelist of component names
//! and no case folding.

use std::collections::BTreeMap;

use log::info;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use sqlx::{Row, SqliteConnection, SqlitePool};

use crate::error::Result;
use crate::models::{OnboardingConfig, CONFIG_ROW_ID};

/// A page slot as submitted by a client: either an ordered sequence of
/// values or a single scalar. Absence is modelled as `Option::None` at the
/// field level, so `null` and a missing key behave identically.
///
/// The variants are tried in order, so a JSON array always binds to
/// `Sequence` and everything else falls through to `Scalar`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ComponentInput {
    Sequence(Vec<JsonValue>),
    Scalar(JsonValue),
}

/// Coerce one page slot into the canonical ordered list of component names.
///
/// - `None` -> empty list.
/// - Sequence -> every element stringified (strings verbatim, anything else
///   via its JSON text form), order preserved, duplicates kept.
/// - Scalar -> stringified, split on `,`, pieces trimmed, empty pieces
///   dropped, order preserved.
pub fn normalize_components(input: Option<&ComponentInput>) -> Vec<String> {
    match input {
        None => Vec::new(),
        Some(ComponentInput::Sequence(values)) => values.iter().map(stringify).collect(),
        Some(ComponentInput::Scalar(value)) => stringify(value)
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

fn stringify(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Store for the singleton [`OnboardingConfig`] row.
pub struct ConfigStore {
    pool: SqlitePool,
}

impl ConfigStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch the configuration, seeding the documented default layout if the
    /// store is empty.
    ///
    /// The common case is a plain read. When the row is absent, seeding runs
    /// in a transaction whose first statement is the `INSERT OR IGNORE` of
    /// the fixed-id row, so concurrent first reads serialize on the write
    /// lock and durably store exactly one row; a losing racer inserts
    /// nothing and reads back the winner's row.
    pub async fn fetch_or_seed(&self) -> Result<OnboardingConfig> {
        let exists = sqlx::query("SELECT id FROM onboarding_config WHERE id = ?1")
            .bind(CONFIG_ROW_ID)
            .fetch_optional(&self.pool)
            .await?
            .is_some();
        if exists {
            let mut conn = self.pool.acquire().await?;
            return load_pages(&mut conn).await;
        }

        let mut tx = self.pool.begin().await?;
        let inserted = sqlx::query("INSERT OR IGNORE INTO onboarding_config (id) VALUES (?1)")
            .bind(CONFIG_ROW_ID)
            .execute(&mut *tx)
            .await?;
        if inserted.rows_affected() > 0 {
            insert_pages(&mut tx, &OnboardingConfig::default_layout().pages).await?;
            info!("Seeded default onboarding configuration");
        }

        let config = load_pages(&mut tx).await?;
        tx.commit().await?;
        Ok(config)
    }

    /// Replace the singleton row's state with `pages` in one transaction and
    /// return the persisted canonical state.
    ///
    /// This is a full replace, never a merge: pages absent from `pages` (or
    /// normalized to empty) end up with no components.
    pub async fn replace(&self, pages: BTreeMap<u32, Vec<String>>) -> Result<OnboardingConfig> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT OR IGNORE INTO onboarding_config (id) VALUES (?1)")
            .bind(CONFIG_ROW_ID)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM config_page_components WHERE config_id = ?1")
            .bind(CONFIG_ROW_ID)
            .execute(&mut *tx)
            .await?;
        insert_pages(&mut tx, &pages).await?;

        let config = load_pages(&mut tx).await?;
        tx.commit().await?;
        Ok(config)
    }
}

async fn insert_pages(
    conn: &mut SqliteConnection,
    pages: &BTreeMap<u32, Vec<String>>,
) -> Result<()> {
    for (page, components) in pages {
        for (position, component) in components.iter().enumerate() {
            sqlx::query(
                "INSERT INTO config_page_components (config_id, page, position, component) \
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(CONFIG_ROW_ID)
            .bind(*page as i64)
            .bind(position as i64)
            .bind(component)
            .execute(&mut *conn)
            .await?;
        }
    }
    Ok(())
}

async fn load_pages(conn: &mut SqliteConnection) -> Result<OnboardingConfig> {
    let rows = sqlx::query(
        "SELECT page, component FROM config_page_components \
         WHERE config_id = ?1 ORDER BY page, position",
    )
    .bind(CONFIG_ROW_ID)
    .fetch_all(&mut *conn)
    .await?;

    let mut pages: BTreeMap<u32, Vec<String>> = BTreeMap::new();
    for row in rows {
        let page: i64 = row.get("page");
        let component: String = row.get("component");
        pages.entry(page as u32).or_default().push(component);
    }

    Ok(OnboardingConfig { pages })
}
