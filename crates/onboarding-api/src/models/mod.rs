//! Request and response models for the onboarding REST API.

mod config;
mod error;
mod user;

pub use config::{ConfigRequest, ConfigResponse};
pub use error::{ErrorDetail, ErrorResponse};
pub use user::{CreateUserRequest, UserResponse};
