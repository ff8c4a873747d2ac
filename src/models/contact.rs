//! Contact model
//!
//! People the binder's reader may need to reach: family, executors,
//! attorneys, physicians, and so on.

use serde::{Deserialize, Serialize};

use super::ids::ContactId;

/// A person worth reaching in an emergency or during estate settlement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique identifier
    #[serde(default)]
    pub id: ContactId,

    /// Full name
    #[serde(default)]
    pub name: String,

    /// Relationship to the binder owner (e.g. "spouse", "attorney")
    #[serde(default)]
    pub relationship: String,

    /// Phone number
    #[serde(default)]
    pub phone: String,

    /// Email address
    #[serde(default)]
    pub email: String,

    /// Mailing address
    #[serde(default)]
    pub address: String,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl Contact {
    /// Create a contact with just a name and relationship
    pub fn new(name: impl Into<String>, relationship: impl Into<String>) -> Self {
        Self {
            id: ContactId::new(),
            name: name.into(),
            relationship: relationship.into(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            notes: String::new(),
        }
    }
}
