//! Encrypted backup export
//!
//! Wraps the encrypted plan in a self-describing, versioned envelope so
//! future format changes can be detected on import. The export passphrase
//! is independent of whether the live plan is itself encrypted.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::crypto::{encrypt, EncryptedBlob};
use crate::error::{BinderError, BinderResult};
use crate::models::Plan;
use crate::storage::file_io::write_json_atomic;

/// Current backup wrapper version. Importers recognize version 1
/// indefinitely.
pub const BACKUP_FORMAT_VERSION: u32 = 1;

/// The portable backup file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupFile {
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    pub data: EncryptedBlob,
}

/// Encrypt the full serialized plan under the given passphrase and wrap it
pub fn export_encrypted(plan: &Plan, passphrase: &str) -> BinderResult<BackupFile> {
    let bytes = serde_json::to_vec(plan)
        .map_err(|e| BinderError::Io(format!("Failed to serialize plan: {}", e)))?;
    let data = encrypt(&bytes, passphrase)?;

    Ok(BackupFile {
        version: BACKUP_FORMAT_VERSION,
        exported_at: Utc::now(),
        data,
    })
}

/// Default filename for an export made on the given date
pub fn suggested_filename(date: NaiveDate) -> String {
    format!("binder-encrypted-{}.json", date.format("%Y-%m-%d"))
}

/// Write a backup to a user-chosen path
pub fn write_backup_file<P: AsRef<Path>>(path: P, backup: &BackupFile) -> BinderResult<()> {
    write_json_atomic(path, backup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_wraps_version_and_timestamp() {
        let plan = Plan::new("My Binder", false);
        let backup = export_encrypted(&plan, "passphrase123").unwrap();
        assert_eq!(backup.version, BACKUP_FORMAT_VERSION);
    }

    #[test]
    fn test_export_serialized_field_names() {
        let plan = Plan::new("My Binder", false);
        let backup = export_encrypted(&plan, "passphrase123").unwrap();
        let value = serde_json::to_value(&backup).unwrap();
        assert!(value.get("version").is_some());
        assert!(value.get("exportedAt").is_some());
        assert!(value.get("data").and_then(|d| d.get("encrypted")).is_some());
        assert!(value.get("data").and_then(|d| d.get("iv")).is_some());
        assert!(value.get("data").and_then(|d| d.get("salt")).is_some());
    }

    #[test]
    fn test_two_exports_differ() {
        let plan = Plan::new("My Binder", false);
        let a = export_encrypted(&plan, "passphrase123").unwrap();
        let b = export_encrypted(&plan, "passphrase123").unwrap();
        assert_ne!(a.data, b.data);
    }

    #[test]
    fn test_suggested_filename() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        assert_eq!(suggested_filename(date), "binder-encrypted-2026-08-05.json");
    }

    #[test]
    fn test_write_backup_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("backup.json");

        let backup = export_encrypted(&Plan::new("My Binder", false), "passphrase123").unwrap();
        write_backup_file(&path, &backup).unwrap();

        assert!(path.exists());
    }
}
