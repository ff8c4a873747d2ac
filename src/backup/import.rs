//! Encrypted backup import
//!
//! Import runs in strict stages: wrapper shape, payload decryption,
//! plaintext parse, structural validation, normalization. Each stage has
//! its own error so the caller can show distinct guidance, and nothing
//! touches the live plan until every stage has passed.

use std::path::Path;

use crate::crypto::decrypt;
use crate::error::{BinderError, BinderResult};
use crate::models::{normalize, Plan};

use super::export::{BackupFile, BACKUP_FORMAT_VERSION};
use super::validation::validate_plan_shape;

/// Read a backup file from disk
pub fn read_backup_file<P: AsRef<Path>>(path: P) -> BinderResult<String> {
    std::fs::read_to_string(path.as_ref())
        .map_err(|e| BinderError::Io(format!("Failed to read backup file: {}", e)))
}

/// Parse, decrypt, and validate a backup, returning the contained plan.
///
/// The returned plan has not replaced anything yet; handing it to the
/// session's save path (after explicit user confirmation) is the caller's
/// job.
pub fn import_encrypted(raw: &str, passphrase: &str) -> BinderResult<Plan> {
    let backup: BackupFile = serde_json::from_str(raw)
        .map_err(|e| BinderError::InvalidBackupFormat(e.to_string()))?;

    if backup.version != BACKUP_FORMAT_VERSION {
        return Err(BinderError::InvalidBackupFormat(format!(
            "unsupported backup version {}",
            backup.version
        )));
    }

    let bytes = decrypt(&backup.data, passphrase)?;

    let raw_plan: serde_json::Value = serde_json::from_slice(&bytes)
        .map_err(|e| BinderError::MalformedJson(e.to_string()))?;

    validate_plan_shape(&raw_plan)?;

    Ok(normalize(&raw_plan))
}
