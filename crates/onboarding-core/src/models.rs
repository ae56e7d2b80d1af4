//! Domain models for the onboarding backend.
//!
//! `UserRecord` mirrors the `users` table one-to-one and carries all columns
//! including the write-only password; the HTTP layer owns the client-safe
//! projection that omits it. `OnboardingConfig` is the singleton page-layout
//! record, kept as an open page-number map rather than a fixed set of slots
//! so new onboarding pages do not require a schema change.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fixed identity of the singleton configuration row.
pub const CONFIG_ROW_ID: i64 = 1;

/// Onboarding page layout: page number -> ordered component names.
///
/// Exactly one of these exists system-wide (see [`CONFIG_ROW_ID`]). Pages with
/// no components are simply absent from the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingConfig {
    pub pages: BTreeMap<u32, Vec<String>>,
}

impl OnboardingConfig {
    /// The layout seeded on first read of an empty store:
    /// page 2 collects the about-me text and birthdate, page 3 the address.
    pub fn default_layout() -> Self {
        let mut pages = BTreeMap::new();
        pages.insert(2, vec!["aboutMe".to_string(), "birthdate".to_string()]);
        pages.insert(3, vec!["address".to_string()]);
        OnboardingConfig { pages }
    }

    /// Components for a page, empty if the page has none.
    pub fn components(&self, page: u32) -> &[String] {
        self.pages.get(&page).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Full user row from the `users` table.
///
/// `password` is stored but must never reach a client; it is skipped on
/// serialization and the API layer additionally projects records into a
/// response type without the field.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub about_me: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub birthdate: Option<NaiveDate>,
}

/// A user record as submitted by a client, before an id is generated.
#[derive(Debug, Clone, Default)]
pub struct NewUserRecord {
    pub email: Option<String>,
    pub password: Option<String>,
    pub about_me: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub birthdate: Option<NaiveDate>,
}

impl UserRecord {
    /// Derived display address, never stored.
    ///
    /// Canonical shape with every part present is
    /// `"{street}, {city}, {state} {zip}"`; missing parts drop out without
    /// leaving stray separators, so a city-only record renders as just the
    /// city name.
    pub fn display_address(&self) -> String {
        display_address(
            self.street.as_deref(),
            self.city.as_deref(),
            self.state.as_deref(),
            self.zip.as_deref(),
        )
    }
}

fn display_address(
    street: Option<&str>,
    city: Option<&str>,
    state: Option<&str>,
    zip: Option<&str>,
) -> String {
    let mut address = [street, city, state]
        .iter()
        .filter_map(|part| part.map(str::trim))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    if let Some(zip) = zip.map(str::trim).filter(|z| !z.is_empty()) {
        if address.is_empty() {
            address.push_str(zip);
        } else {
            address.push(' ');
            address.push_str(zip);
        }
    }

    address
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        street: Option<&str>,
        city: Option<&str>,
        state: Option<&str>,
        zip: Option<&str>,
    ) -> UserRecord {
        UserRecord {
            id: 1,
            email: None,
            password: None,
            about_me: None,
            street: street.map(str::to_string),
            city: city.map(str::to_string),
            state: state.map(str::to_string),
            zip: zip.map(str::to_string),
            birthdate: None,
        }
    }

    #[test]
    fn test_full_address() {
        let user = record(Some("1 Main St"), Some("Metropolis"), Some("NY"), Some("10001"));
        assert_eq!(user.display_address(), "1 Main St, Metropolis, NY 10001");
    }

    #[test]
    fn test_city_only_address_has_no_stray_separators() {
        let user = record(None, Some("Metropolis"), None, None);
        assert_eq!(user.display_address(), "Metropolis");
    }

    #[test]
    fn test_all_parts_missing() {
        let user = record(None, None, None, None);
        assert_eq!(user.display_address(), "");
    }

    #[test]
    fn test_zip_only() {
        let user = record(None, None, None, Some("10001"));
        assert_eq!(user.display_address(), "10001");
    }

    #[test]
    fn test_password_never_serialized() {
        let mut user = record(None, Some("Metropolis"), None, None);
        user.password = Some("hunter2".to_string());
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_default_layout() {
        let config = OnboardingConfig::default_layout();
        assert_eq!(config.components(2), ["aboutMe", "birthdate"]);
        assert_eq!(config.components(3), ["address"]);
        assert!(config.components(1).is_empty());
    }
}
