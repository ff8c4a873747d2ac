//! The Plan: the single root aggregate holding all binder data
//!
//! The plan is owned by the session while unlocked and serialized as a
//! whole on every save; sections are never persisted independently. Every
//! list section defaults to empty and every keyed section to a complete
//! default, so a normalized plan always has the full skeleton.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::access::AccessEntry;
use super::account::AccountRecord;
use super::contact::Contact;
use super::document::DocumentRecord;
use super::emergency::EmergencyInfo;
use super::estate::{FinancialInfo, WillInfo};
use super::ids::PlanId;
use super::note::Note;
use super::security::{PhysicalItem, RecoveryEntry};

/// Title used when a document carries none
pub const DEFAULT_TITLE: &str = "Untitled Binder";

/// User preferences stored inside the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPreferences {
    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether section views should show inline guidance
    #[serde(default = "default_true")]
    pub show_section_hints: bool,
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for PlanPreferences {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            show_section_hints: true,
        }
    }
}

/// The whole binder document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Unique identifier
    #[serde(default)]
    pub id: PlanId,

    /// Plan title shown to the user
    #[serde(default = "default_title")]
    pub title: String,

    /// When the plan was created
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// When the plan was last saved
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,

    /// Whether the plan is stored encrypted at rest
    #[serde(default)]
    pub is_encrypted: bool,

    /// User preferences
    #[serde(default)]
    pub preferences: PlanPreferences,

    /// People to reach
    #[serde(default)]
    pub contacts: Vec<Contact>,

    /// Digital access pointers
    #[serde(default)]
    pub access: Vec<AccessEntry>,

    /// Financial account references
    #[serde(default)]
    pub accounts: Vec<AccountRecord>,

    /// Document locations
    #[serde(default)]
    pub documents: Vec<DocumentRecord>,

    /// Safes, lockboxes, keys
    #[serde(default)]
    pub physical_security: Vec<PhysicalItem>,

    /// Emergency instructions
    #[serde(default)]
    pub emergency: EmergencyInfo,

    /// Account-recovery pointers
    #[serde(default)]
    pub security_recovery: Vec<RecoveryEntry>,

    /// Will and testament pointer
    #[serde(default)]
    pub will: WillInfo,

    /// Financial overview
    #[serde(default)]
    pub financial: FinancialInfo,

    /// Free-form notes
    #[serde(default)]
    pub notes: Vec<Note>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Plan {
    /// Create an empty plan with the given title
    pub fn new(title: impl Into<String>, is_encrypted: bool) -> Self {
        let now = Utc::now();
        Self {
            id: PlanId::new(),
            title: title.into(),
            created_at: now,
            updated_at: now,
            is_encrypted,
            preferences: PlanPreferences::default(),
            contacts: Vec::new(),
            access: Vec::new(),
            accounts: Vec::new(),
            documents: Vec::new(),
            physical_security: Vec::new(),
            emergency: EmergencyInfo::default(),
            security_recovery: Vec::new(),
            will: WillInfo::default(),
            financial: FinancialInfo::default(),
            notes: Vec::new(),
        }
    }

    /// Whether this plan was seeded by the demo generator.
    /// Presentation layers use the marker to offer a reset affordance.
    pub fn is_demo(&self) -> bool {
        self.title.contains("Demo")
    }
}
