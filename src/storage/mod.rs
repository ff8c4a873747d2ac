//! Storage layer: the single-record plan store
//!
//! One logical record under one fixed key, holding either the encrypted
//! blob or the plain plan. Created on first plan creation, overwritten in
//! place on every save, erased entirely on reset.

pub mod file_io;
pub mod record;

pub use record::{PlanData, StorageRecord, PLAN_RECORD_KEY, RECORD_VERSION};

use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::config::BinderPaths;
use crate::crypto::EncryptedBlob;
use crate::error::{BinderError, BinderResult};
use crate::models::Plan;

use file_io::{read_json_opt, write_json_atomic};
use record::RecordFile;

/// Startup answer: is there a record, and is it encrypted?
/// Computed without touching plan contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStatus {
    pub present: bool,
    pub is_encrypted: bool,
}

/// The single-record key-value store for the plan
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    /// Create a store rooted at the configured paths
    pub fn new(paths: &BinderPaths) -> BinderResult<Self> {
        paths.ensure_directories()?;
        Ok(Self {
            path: paths.plan_file(),
        })
    }

    /// Create a store over an explicit file (useful for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Upsert the record with an encrypted payload
    pub fn save_encrypted(&self, blob: &EncryptedBlob) -> BinderResult<()> {
        self.write(StorageRecord::new(PlanData::Encrypted(blob.clone())))
    }

    /// Upsert the record with a plaintext payload
    pub fn save_plain(&self, plan: &Plan) -> BinderResult<()> {
        self.write(StorageRecord::new(PlanData::Plain(plan.clone())))
    }

    /// Load the encrypted payload.
    ///
    /// `None` when no record exists, the record is plaintext, or retrieval
    /// fails. Never an error: first-run detection relies on this.
    pub fn load_encrypted(&self) -> Option<EncryptedBlob> {
        match self.read()?.data {
            PlanData::Encrypted(blob) => Some(blob),
            PlanData::Plain(_) => None,
        }
    }

    /// Load the plaintext plan, normalized to the full skeleton.
    ///
    /// `None` under the same conditions as [`load_encrypted`](Self::load_encrypted).
    pub fn load_plain(&self) -> Option<Plan> {
        match self.read()?.data {
            PlanData::Plain(plan) => Some(plan),
            PlanData::Encrypted(_) => None,
        }
    }

    /// Cheap startup probe without parsing plan contents
    pub fn exists(&self) -> StoreStatus {
        match read_json_opt(&self.path) {
            Some(value) => StoreStatus {
                present: true,
                is_encrypted: value
                    .get("isEncrypted")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
            },
            None => StoreStatus {
                present: false,
                is_encrypted: false,
            },
        }
    }

    /// Delete the record entirely. Irreversible.
    pub fn clear(&self) -> BinderResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(BinderError::Io(format!("Failed to delete record: {}", e))),
        }
    }

    fn read(&self) -> Option<StorageRecord> {
        let value = read_json_opt(&self.path)?;
        let file: RecordFile = serde_json::from_value(value).ok()?;
        StorageRecord::from_file(file)
    }

    fn write(&self, record: StorageRecord) -> BinderResult<()> {
        write_json_atomic(&self.path, &record.to_file()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::encrypt;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, PlanStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = PlanStore::with_path(temp_dir.path().join("plan.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_first_run_is_silent() {
        let (_dir, store) = test_store();
        assert!(store.load_plain().is_none());
        assert!(store.load_encrypted().is_none());
        let status = store.exists();
        assert!(!status.present);
        assert!(!status.is_encrypted);
    }

    #[test]
    fn test_save_and_load_plain() {
        let (_dir, store) = test_store();
        let plan = Plan::new("My Binder", false);

        store.save_plain(&plan).unwrap();

        let status = store.exists();
        assert!(status.present);
        assert!(!status.is_encrypted);
        assert_eq!(store.load_plain().unwrap(), plan);
        assert!(store.load_encrypted().is_none());
    }

    #[test]
    fn test_save_and_load_encrypted() {
        let (_dir, store) = test_store();
        let blob = encrypt(b"ciphertext source", "passphrase123").unwrap();

        store.save_encrypted(&blob).unwrap();

        let status = store.exists();
        assert!(status.present);
        assert!(status.is_encrypted);
        assert_eq!(store.load_encrypted().unwrap(), blob);
        assert!(store.load_plain().is_none());
    }

    #[test]
    fn test_save_overwrites_prior_variant() {
        let (_dir, store) = test_store();
        let plan = Plan::new("My Binder", false);

        store.save_plain(&plan).unwrap();
        let blob = encrypt(b"now encrypted", "passphrase123").unwrap();
        store.save_encrypted(&blob).unwrap();

        assert!(store.exists().is_encrypted);
        assert!(store.load_plain().is_none());
        assert_eq!(store.load_encrypted().unwrap(), blob);
    }

    #[test]
    fn test_clear_removes_record() {
        let (_dir, store) = test_store();
        store.save_plain(&Plan::new("My Binder", false)).unwrap();

        store.clear().unwrap();

        assert!(!store.exists().present);
        // Clearing an already-empty store is not an error
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_record_reads_as_absent_payload() {
        let (_dir, store) = test_store();
        std::fs::write(&store.path, "{\"key\": \"binder-plan\"").unwrap();
        assert!(store.load_plain().is_none());
        assert!(store.load_encrypted().is_none());
    }
}
