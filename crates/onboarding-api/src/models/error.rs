//! Error response body shared by all endpoints.

use serde::{Deserialize, Serialize};

/// Error details for a failed request
///
/// # Example
/// ```json
/// {
///   "error": {
///     "code": "STORE_ERROR",
///     "message": "Database error: ..."
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "STORE_ERROR")
    pub code: String,
    /// Human-readable error description
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: &str) -> Self {
        ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: message.to_string(),
            },
        }
    }
}
