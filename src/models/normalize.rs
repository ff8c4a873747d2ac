//! Document normalization
//!
//! Repairs a possibly older-shaped plan document into the full current
//! skeleton. Each known section is overlaid individually onto its typed
//! default: a section that is missing or unparseable falls back to its
//! default without disturbing its siblings. Idempotent by construction.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ids::PlanId;
use super::plan::{Plan, DEFAULT_TITLE};

/// Build a complete Plan from a raw document.
///
/// Adopts the document's title, encryption flag, id, and timestamps when
/// present; every section falls back to its default individually.
pub fn normalize(raw: &Value) -> Plan {
    let title = raw
        .get("title")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let is_encrypted = raw
        .get("isEncrypted")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let id: PlanId = field(raw, "id").unwrap_or_default();
    let created_at: DateTime<Utc> = field(raw, "createdAt").unwrap_or_else(Utc::now);
    let updated_at: DateTime<Utc> = field(raw, "updatedAt").unwrap_or_else(Utc::now);

    Plan {
        id,
        title,
        created_at,
        updated_at,
        is_encrypted,
        preferences: section(raw, "preferences"),
        contacts: section(raw, "contacts"),
        access: section(raw, "access"),
        accounts: section(raw, "accounts"),
        documents: section(raw, "documents"),
        physical_security: section(raw, "physicalSecurity"),
        emergency: section(raw, "emergency"),
        security_recovery: section(raw, "securityRecovery"),
        will: section(raw, "will"),
        financial: section(raw, "financial"),
        notes: section(raw, "notes"),
    }
}

/// Parse one field if present and well-formed
fn field<T: DeserializeOwned>(raw: &Value, key: &str) -> Option<T> {
    raw.get(key)
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
}

/// Parse one section, falling back to its typed default
fn section<T: DeserializeOwned + Default>(raw: &Value, key: &str) -> T {
    field(raw, key).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_document_gets_full_skeleton() {
        let plan = normalize(&json!({}));
        assert_eq!(plan.title, DEFAULT_TITLE);
        assert!(!plan.is_encrypted);
        assert!(plan.contacts.is_empty());
        assert!(plan.notes.is_empty());
        assert_eq!(plan.will, Default::default());
    }

    #[test]
    fn test_adopts_supplied_title_and_flag() {
        let plan = normalize(&json!({"title": "Estate 2026", "isEncrypted": true}));
        assert_eq!(plan.title, "Estate 2026");
        assert!(plan.is_encrypted);
    }

    #[test]
    fn test_blank_title_falls_back() {
        let plan = normalize(&json!({"title": "   "}));
        assert_eq!(plan.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_legacy_document_missing_sections_never_fails() {
        // A document shaped like an older schema: has contacts, lacks
        // everything introduced since.
        let raw = json!({
            "title": "Old Binder",
            "contacts": [{"name": "Ada Lovelace", "relationship": "executor"}]
        });
        let plan = normalize(&raw);
        assert_eq!(plan.contacts.len(), 1);
        assert_eq!(plan.contacts[0].name, "Ada Lovelace");
        assert!(plan.security_recovery.is_empty());
        assert_eq!(plan.financial, Default::default());
    }

    #[test]
    fn test_unparseable_section_falls_back_without_touching_siblings() {
        let raw = json!({
            "contacts": "not a list",
            "notes": [{"title": "kept", "body": "still here"}]
        });
        let plan = normalize(&raw);
        assert!(plan.contacts.is_empty());
        assert_eq!(plan.notes.len(), 1);
        assert_eq!(plan.notes[0].title, "kept");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = json!({
            "title": "Round Trip",
            "isEncrypted": true,
            "contacts": [{"name": "Ada"}],
            "will": {"exists": true, "executor": "Ada"}
        });
        let once = normalize(&raw);
        let twice = normalize(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_skeleton_sections_present_after_serialization() {
        let plan = normalize(&json!({}));
        let value = serde_json::to_value(&plan).unwrap();
        for key in [
            "contacts",
            "access",
            "accounts",
            "documents",
            "physicalSecurity",
            "emergency",
            "securityRecovery",
            "will",
            "financial",
            "notes",
        ] {
            assert!(value.get(key).is_some(), "missing section {key}");
        }
    }
}
