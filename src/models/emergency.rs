//! Emergency information
//!
//! A keyed section rather than a list: one set of instructions for the
//! household.

use serde::{Deserialize, Serialize};

/// What to do first in an emergency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyInfo {
    /// Step-by-step instructions for the reader
    #[serde(default)]
    pub instructions: String,

    /// Agreed meeting point for the household
    #[serde(default)]
    pub meeting_point: String,

    /// Allergies, medications, conditions responders should know
    #[serde(default)]
    pub medical_notes: String,

    /// Utility shutoff locations (gas, water, mains)
    #[serde(default)]
    pub utility_shutoffs: String,
}
