use thiserror::Error;

/// Errors that can occur in store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
