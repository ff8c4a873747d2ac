//! Account model
//!
//! Financial accounts the binder's reader needs to know exist: banks,
//! brokerages, retirement plans, loans. Identifiers are hints (institution
//! and last digits), never full account numbers or credentials.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;

/// Type of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    #[default]
    Checking,
    Savings,
    Credit,
    Investment,
    Retirement,
    Loan,
    Other,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Savings => write!(f, "Savings"),
            Self::Credit => write!(f, "Credit Card"),
            Self::Investment => write!(f, "Investment"),
            Self::Retirement => write!(f, "Retirement"),
            Self::Loan => write!(f, "Loan"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A financial account reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    #[serde(default)]
    pub id: AccountId,

    /// Institution name (e.g. "First National Bank")
    #[serde(default)]
    pub institution: String,

    #[serde(default)]
    pub kind: AccountKind,

    /// Non-sensitive identifier hint, such as the last four digits
    #[serde(default)]
    pub identifier_hint: String,

    /// Institution contact (phone or branch)
    #[serde(default)]
    pub contact: String,

    #[serde(default)]
    pub notes: String,
}

impl AccountRecord {
    pub fn new(institution: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            id: AccountId::new(),
            institution: institution.into(),
            kind,
            identifier_hint: String::new(),
            contact: String::new(),
            notes: String::new(),
        }
    }
}
