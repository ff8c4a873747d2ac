//! Physical security and account-recovery entries

use serde::{Deserialize, Serialize};

use super::ids::{ItemId, RecoveryId};

/// A physically secured item: safe, lockbox, storage unit, spare keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalItem {
    #[serde(default)]
    pub id: ItemId,

    /// What it is (e.g. "Home safe", "Bank deposit box")
    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub location: String,

    /// How to open or access it, or where that knowledge lives
    #[serde(default)]
    pub access_notes: String,
}

impl PhysicalItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            label: label.into(),
            location: String::new(),
            access_notes: String::new(),
        }
    }
}

/// Where recovery codes or reset paths exist for a service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryEntry {
    #[serde(default)]
    pub id: RecoveryId,

    /// Service the recovery applies to
    #[serde(default)]
    pub service: String,

    /// Recovery mechanism (e.g. "printed backup codes", "recovery email")
    #[serde(default)]
    pub method: String,

    /// Where the recovery material is kept
    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub notes: String,
}

impl RecoveryEntry {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            id: RecoveryId::new(),
            service: service.into(),
            method: String::new(),
            location: String::new(),
            notes: String::new(),
        }
    }
}
