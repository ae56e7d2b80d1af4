// Onboarding Core Library
//
// This crate provides the storage layer for the onboarding backend:
// domain models, the singleton configuration store (normalization,
// default seeding, full-replace upsert), and the user record store.

pub mod config_store;
pub mod db;
pub mod error;
pub mod models;
pub mod user_store;

pub use config_store::{normalize_components, ComponentInput, ConfigStore};
pub use error::{Result, StoreError};
pub use models::{NewUserRecord, OnboardingConfig, UserRecord};
pub use user_store::UserStore;
