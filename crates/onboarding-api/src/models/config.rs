//! Configuration request/response models
//!
//! This module defines the payloads for the `/api/config` endpoints.

use std::collections::BTreeMap;

use onboarding_core::{normalize_components, ComponentInput, OnboardingConfig};
use serde::{Deserialize, Serialize};

/// Request payload for saving the onboarding page layout.
///
/// Each slot accepts an array of component names, a single comma-separated
/// string, or null. The caller supplies the complete desired state; an
/// omitted slot means "no components for that page", not "keep the old ones".
///
/// # Example (array form)
/// ```json
/// {
///   "page2Components": ["aboutMe", "birthdate"],
///   "page3Components": ["address"]
/// }
/// ```
///
/// # Example (comma-string form)
/// ```json
/// {
///   "page2Components": "aboutMe, birthdate",
///   "page3Components": ""
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigRequest {
    #[serde(default, rename = "page1Components")]
    pub page1_components: Option<ComponentInput>,

    #[serde(default, rename = "page2Components")]
    pub page2_components: Option<ComponentInput>,

    #[serde(default, rename = "page3Components")]
    pub page3_components: Option<ComponentInput>,
}

impl ConfigRequest {
    /// Normalize every slot into the canonical page map.
    pub fn normalized(&self) -> BTreeMap<u32, Vec<String>> {
        let mut pages = BTreeMap::new();
        pages.insert(1, normalize_components(self.page1_components.as_ref()));
        pages.insert(2, normalize_components(self.page2_components.as_ref()));
        pages.insert(3, normalize_components(self.page3_components.as_ref()));
        pages
    }
}

/// Canonical page layout as persisted.
///
/// `page1Components` is a later addition and is only emitted when non-empty,
/// keeping the classic two-slot response shape for the common case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigResponse {
    #[serde(
        default,
        rename = "page1Components",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub page1_components: Vec<String>,

    #[serde(default, rename = "page2Components")]
    pub page2_components: Vec<String>,

    #[serde(default, rename = "page3Components")]
    pub page3_components: Vec<String>,
}

impl From<OnboardingConfig> for ConfigResponse {
    fn from(config: OnboardingConfig) -> Self {
        ConfigResponse {
            page1_components: config.components(1).to_vec(),
            page2_components: config.components(2).to_vec(),
            page3_components: config.components(3).to_vec(),
        }
    }
}
