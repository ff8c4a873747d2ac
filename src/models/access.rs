//! Digital access entries
//!
//! Where to find credentials for email, devices, password managers, and
//! other digital services. The binder records locations and hints, never
//! the credentials themselves.

use serde::{Deserialize, Serialize};

use super::ids::AccessId;

/// A pointer to how a digital service can be accessed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessEntry {
    #[serde(default)]
    pub id: AccessId,

    /// What this entry covers (e.g. "Primary email", "Password manager")
    #[serde(default)]
    pub label: String,

    /// Username or account identifier
    #[serde(default)]
    pub username: String,

    /// Service URL
    #[serde(default)]
    pub url: String,

    /// Where the credentials live (e.g. "sealed envelope in the safe")
    #[serde(default)]
    pub credential_location: String,

    #[serde(default)]
    pub notes: String,
}

impl AccessEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: AccessId::new(),
            label: label.into(),
            username: String::new(),
            url: String::new(),
            credential_location: String::new(),
            notes: String::new(),
        }
    }
}
