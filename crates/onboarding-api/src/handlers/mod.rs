//! HTTP handlers for the onboarding REST API.

pub mod config_handler;
pub mod user_handler;

pub use config_handler::{get_config, save_config};
pub use user_handler::{create_user, list_users, list_users_legacy};
