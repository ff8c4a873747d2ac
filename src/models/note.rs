//! Free-form notes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::NoteId;

/// A free-form note attached to the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default)]
    pub id: NoteId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub body: String,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: NoteId::new(),
            title: title.into(),
            body: body.into(),
            created_at: Utc::now(),
        }
    }
}
