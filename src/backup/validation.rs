//! Structural validation of imported plan documents
//!
//! Runs on the decrypted payload before normalization: every required
//! top-level section must be present with the right container type. All
//! violations are collected so the user sees the full list at once.

use serde_json::Value;

use crate::error::{BinderError, BinderResult};

/// Sections that must be JSON arrays
const SEQUENCE_SECTIONS: &[&str] = &[
    "contacts",
    "access",
    "accounts",
    "documents",
    "physicalSecurity",
    "securityRecovery",
    "notes",
];

/// Sections that must be JSON objects
const OBJECT_SECTIONS: &[&str] = &["emergency", "will", "financial"];

/// Check an imported document against the expected plan shape
pub fn validate_plan_shape(raw: &Value) -> BinderResult<()> {
    let Some(obj) = raw.as_object() else {
        return Err(BinderError::SchemaValidation(vec![
            "document root is not an object".to_string(),
        ]));
    };

    let mut violations = Vec::new();

    for key in SEQUENCE_SECTIONS {
        match obj.get(*key) {
            None => violations.push(format!("missing required section: {}", key)),
            Some(v) if !v.is_array() => {
                violations.push(format!("section {}: expected a list", key))
            }
            _ => {}
        }
    }

    for key in OBJECT_SECTIONS {
        match obj.get(*key) {
            None => violations.push(format!("missing required section: {}", key)),
            Some(v) if !v.is_object() => {
                violations.push(format!("section {}: expected an object", key))
            }
            _ => {}
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(BinderError::SchemaValidation(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Plan;
    use serde_json::json;

    #[test]
    fn test_full_plan_validates() {
        let value = serde_json::to_value(Plan::new("My Binder", false)).unwrap();
        assert!(validate_plan_shape(&value).is_ok());
    }

    #[test]
    fn test_missing_section_is_named() {
        let mut value = serde_json::to_value(Plan::new("My Binder", false)).unwrap();
        value.as_object_mut().unwrap().remove("contacts");

        let err = validate_plan_shape(&value).unwrap_err();
        match err {
            BinderError::SchemaValidation(violations) => {
                assert_eq!(violations.len(), 1);
                assert!(violations[0].contains("contacts"));
            }
            other => panic!("expected SchemaValidation, got {:?}", other),
        }
    }

    #[test]
    fn test_all_violations_are_collected() {
        let mut value = serde_json::to_value(Plan::new("My Binder", false)).unwrap();
        {
            let obj = value.as_object_mut().unwrap();
            obj.remove("contacts");
            obj.insert("notes".to_string(), json!("not a list"));
            obj.insert("will".to_string(), json!([1, 2, 3]));
        }

        let err = validate_plan_shape(&value).unwrap_err();
        match err {
            BinderError::SchemaValidation(violations) => {
                assert_eq!(violations.len(), 3);
                assert!(violations.iter().any(|v| v.contains("contacts")));
                assert!(violations.iter().any(|v| v.contains("notes")));
                assert!(violations.iter().any(|v| v.contains("will")));
            }
            other => panic!("expected SchemaValidation, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_root_is_rejected() {
        assert!(validate_plan_shape(&json!([1, 2])).is_err());
        assert!(validate_plan_shape(&json!("plan")).is_err());
    }
}
