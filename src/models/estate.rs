//! Estate data: will/testament and financial overview
//!
//! Both are keyed sections. `WillInfo` points to the will without holding
//! its text; `FinancialInfo` names advisors and carries the insurance
//! policy list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::PolicyId;

/// Pointer to the will and the people who handle it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WillInfo {
    /// Whether a will exists at all
    #[serde(default)]
    pub exists: bool,

    /// Where the signed original is kept
    #[serde(default)]
    pub location: String,

    /// Named executor
    #[serde(default)]
    pub executor: String,

    /// Attorney or firm holding a copy
    #[serde(default)]
    pub attorney: String,

    /// When it was last reviewed
    #[serde(default)]
    pub last_reviewed: Option<NaiveDate>,

    #[serde(default)]
    pub notes: String,
}

/// An insurance policy reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePolicy {
    #[serde(default)]
    pub id: PolicyId,

    #[serde(default)]
    pub provider: String,

    /// Kind of coverage (life, home, auto, ...)
    #[serde(default)]
    pub coverage: String,

    /// Non-sensitive policy number hint
    #[serde(default)]
    pub policy_hint: String,

    #[serde(default)]
    pub notes: String,
}

impl InsurancePolicy {
    pub fn new(provider: impl Into<String>, coverage: impl Into<String>) -> Self {
        Self {
            id: PolicyId::new(),
            provider: provider.into(),
            coverage: coverage.into(),
            policy_hint: String::new(),
            notes: String::new(),
        }
    }
}

/// Financial overview: who advises, what insures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInfo {
    /// Financial advisor contact
    #[serde(default)]
    pub advisor: String,

    /// Accountant or tax preparer contact
    #[serde(default)]
    pub accountant: String,

    #[serde(default)]
    pub insurance_policies: Vec<InsurancePolicy>,

    #[serde(default)]
    pub notes: String,
}
