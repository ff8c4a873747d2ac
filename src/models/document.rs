//! Document references
//!
//! Where important papers physically live: deeds, titles, certificates,
//! identification, tax records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DocumentId;

/// Category of document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Identification,
    Deed,
    Title,
    Certificate,
    Insurance,
    Medical,
    Tax,
    #[default]
    Other,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identification => write!(f, "Identification"),
            Self::Deed => write!(f, "Deed"),
            Self::Title => write!(f, "Title"),
            Self::Certificate => write!(f, "Certificate"),
            Self::Insurance => write!(f, "Insurance"),
            Self::Medical => write!(f, "Medical"),
            Self::Tax => write!(f, "Tax"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A pointer to a physical or digital document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    #[serde(default)]
    pub id: DocumentId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub kind: DocumentKind,

    /// Where the document is kept
    #[serde(default)]
    pub location: String,

    /// Expiry date, if the document has one
    #[serde(default)]
    pub expires_on: Option<NaiveDate>,

    #[serde(default)]
    pub notes: String,
}

impl DocumentRecord {
    pub fn new(title: impl Into<String>, kind: DocumentKind) -> Self {
        Self {
            id: DocumentId::new(),
            title: title.into(),
            kind,
            location: String::new(),
            expires_on: None,
            notes: String::new(),
        }
    }
}
