//! Flat CRUD store for onboarding applicants.
//!
//! Pure field storage: no validation beyond type coercion happens here, and
//! listing returns records in insertion order.

use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{NewUserRecord, UserRecord};

pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a record and return it with its generated id.
    pub async fn create(&self, record: NewUserRecord) -> Result<UserRecord> {
        let result = sqlx::query(
            "INSERT INTO users (email, password, about_me, street, city, state, zip, birthdate) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .bind(&record.email)
        .bind(&record.password)
        .bind(&record.about_me)
        .bind(&record.street)
        .bind(&record.city)
        .bind(&record.state)
        .bind(&record.zip)
        .bind(record.birthdate)
        .execute(&self.pool)
        .await?;

        Ok(UserRecord {
            id: result.last_insert_rowid(),
            email: record.email,
            password: record.password,
            about_me: record.about_me,
            street: record.street,
            city: record.city,
            state: record.state,
            zip: record.zip,
            birthdate: record.birthdate,
        })
    }

    /// All records, ordered by insertion (ascending id).
    pub async fn list_all(&self) -> Result<Vec<UserRecord>> {
        let users = sqlx::query_as::<_, UserRecord>(
            "SELECT id, email, password, about_me, street, city, state, zip, birthdate \
             FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }
}
