//! Core data models for the binder
//!
//! This module contains the Plan aggregate and every section type it holds:
//! contacts, digital access, accounts, documents, physical security,
//! emergency information, recovery codes, estate data, and notes.

pub mod access;
pub mod account;
pub mod contact;
pub mod demo;
pub mod document;
pub mod emergency;
pub mod estate;
pub mod ids;
pub mod normalize;
pub mod note;
pub mod plan;
pub mod security;

pub use access::AccessEntry;
pub use account::{AccountKind, AccountRecord};
pub use contact::Contact;
pub use demo::demo_plan;
pub use document::{DocumentKind, DocumentRecord};
pub use emergency::EmergencyInfo;
pub use estate::{FinancialInfo, InsurancePolicy, WillInfo};
pub use ids::{
    AccessId, AccountId, ContactId, DocumentId, ItemId, NoteId, PlanId, PolicyId, RecoveryId,
};
pub use normalize::normalize;
pub use note::Note;
pub use plan::{Plan, PlanPreferences, DEFAULT_TITLE};
pub use security::{PhysicalItem, RecoveryEntry};
