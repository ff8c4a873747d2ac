//! The single persisted record
//!
//! In memory the payload is a tagged variant so "exactly one of encrypted
//! or plain is populated" holds structurally. On disk the record keeps the
//! two-optional-fields layout selected by `isEncrypted`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::crypto::EncryptedBlob;
use crate::error::{BinderError, BinderResult};
use crate::models::{normalize, Plan};

/// The fixed key the one record is stored under
pub const PLAN_RECORD_KEY: &str = "binder-plan";

/// Schema tag written into every record
pub const RECORD_VERSION: u32 = 1;

/// The record payload: either ciphertext-plus-metadata or the plain plan
#[derive(Debug, Clone, PartialEq)]
pub enum PlanData {
    Encrypted(EncryptedBlob),
    Plain(Plan),
}

impl PlanData {
    pub fn is_encrypted(&self) -> bool {
        matches!(self, Self::Encrypted(_))
    }
}

/// The one stored record
#[derive(Debug, Clone)]
pub struct StorageRecord {
    pub data: PlanData,
    pub updated_at: DateTime<Utc>,
    pub version: u32,
}

impl StorageRecord {
    /// Build a fresh record stamped with the current time
    pub fn new(data: PlanData) -> Self {
        Self {
            data,
            updated_at: Utc::now(),
            version: RECORD_VERSION,
        }
    }

    /// Convert to the on-disk layout
    pub(crate) fn to_file(&self) -> BinderResult<RecordFile> {
        let (encrypted_data, plain_data, is_encrypted) = match &self.data {
            PlanData::Encrypted(blob) => (Some(blob.clone()), None, true),
            PlanData::Plain(plan) => {
                let value = serde_json::to_value(plan)
                    .map_err(|e| BinderError::Io(format!("Failed to serialize plan: {}", e)))?;
                (None, Some(value), false)
            }
        };
        Ok(RecordFile {
            key: PLAN_RECORD_KEY.to_string(),
            encrypted_data,
            plain_data,
            is_encrypted,
            updated_at: self.updated_at,
            version: self.version,
        })
    }

    /// Parse the on-disk layout. `None` when the record does not uphold
    /// the exactly-one-payload invariant; load paths treat that the same
    /// as a missing record.
    pub(crate) fn from_file(file: RecordFile) -> Option<Self> {
        let data = if file.is_encrypted {
            PlanData::Encrypted(file.encrypted_data?)
        } else {
            PlanData::Plain(normalize(&file.plain_data?))
        };
        Some(Self {
            data,
            updated_at: file.updated_at,
            version: file.version,
        })
    }
}

/// On-disk layout of the record
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecordFile {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_data: Option<EncryptedBlob>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_data: Option<Value>,
    pub is_encrypted: bool,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "default_version")]
    pub version: u32,
}

fn default_version() -> u32 {
    RECORD_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::encrypt;

    #[test]
    fn test_plain_record_round_trip() {
        let plan = Plan::new("My Binder", false);
        let record = StorageRecord::new(PlanData::Plain(plan.clone()));

        let file = record.to_file().unwrap();
        assert!(!file.is_encrypted);
        assert!(file.plain_data.is_some());
        assert!(file.encrypted_data.is_none());
        assert_eq!(file.key, PLAN_RECORD_KEY);

        let back = StorageRecord::from_file(file).unwrap();
        assert_eq!(back.data, PlanData::Plain(plan));
    }

    #[test]
    fn test_encrypted_record_round_trip() {
        let blob = encrypt(b"payload", "passphrase123").unwrap();
        let record = StorageRecord::new(PlanData::Encrypted(blob.clone()));

        let file = record.to_file().unwrap();
        assert!(file.is_encrypted);
        assert!(file.plain_data.is_none());

        let back = StorageRecord::from_file(file).unwrap();
        assert_eq!(back.data, PlanData::Encrypted(blob));
    }

    #[test]
    fn test_mismatched_record_is_rejected() {
        let file = RecordFile {
            key: PLAN_RECORD_KEY.to_string(),
            encrypted_data: None,
            plain_data: None,
            is_encrypted: true,
            updated_at: Utc::now(),
            version: RECORD_VERSION,
        };
        assert!(StorageRecord::from_file(file).is_none());
    }

    #[test]
    fn test_file_layout_field_names() {
        let record = StorageRecord::new(PlanData::Plain(Plan::new("My Binder", false)));
        let value = serde_json::to_value(record.to_file().unwrap()).unwrap();
        assert!(value.get("key").is_some());
        assert!(value.get("plainData").is_some());
        assert!(value.get("isEncrypted").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("version").is_some());
        assert!(value.get("encryptedData").is_none());
    }
}
