//! Custom error types for the binder core
//!
//! This module defines the error taxonomy for the application using thiserror
//! for ergonomic error definitions. Cryptographic and storage failures stay
//! narrow so the session layer can branch on them; the session layer is
//! responsible for folding them into a single user-facing message.

use thiserror::Error;

/// Minimum passphrase length when creating or changing a passphrase.
pub const MIN_PASSPHRASE_LEN: usize = 8;

/// The main error type for binder operations
#[derive(Error, Debug)]
pub enum BinderError {
    /// Wrong passphrase or tampered/corrupted ciphertext. Deliberately a
    /// single signal: callers cannot tell which of the two occurred.
    #[error("could not decrypt: wrong passphrase or corrupted data")]
    Authentication,

    /// No plan record exists on this device
    #[error("no saved plan was found")]
    NoSavedPlan,

    /// The stored plan is encrypted and no passphrase was supplied
    #[error("a passphrase is required to unlock this plan")]
    PassphraseRequired,

    /// An encrypted plan needs saving but no passphrase is cached.
    /// Internal invariant violation, not a user-facing condition.
    #[error("no passphrase available for an encrypted plan")]
    NoPassphraseAvailable,

    /// `add_encryption` was called on an already-encrypted plan
    #[error("the plan is already encrypted")]
    AlreadyEncrypted,

    /// A re-key or encryption-removal was requested on a plaintext plan
    #[error("the plan is not encrypted")]
    NotEncrypted,

    /// A session operation that needs a current plan ran while locked
    #[error("no plan is currently loaded")]
    NoPlanLoaded,

    /// New passphrase rejected by the minimum-length check
    #[error("passphrase must be at least {MIN_PASSPHRASE_LEN} characters")]
    WeakPassphrase,

    /// The underlying device storage is full
    #[error("device storage is full")]
    QuotaExceeded,

    /// Any other I/O failure
    #[error("I/O error: {0}")]
    Io(String),

    /// An imported file does not have the expected backup wrapper shape
    #[error("invalid backup format: {0}")]
    InvalidBackupFormat(String),

    /// A decrypted import is structurally wrong. Carries every violated
    /// field, not just the first.
    #[error("backup failed validation: {}", .0.join("; "))]
    SchemaValidation(Vec<String>),

    /// Decrypted payload (or stored plaintext) is not valid JSON
    #[error("malformed JSON: {0}")]
    MalformedJson(String),
}

/// Convenience result type for binder operations
pub type BinderResult<T> = Result<T, BinderError>;

impl BinderError {
    /// The single generic message shown to the user for this error.
    ///
    /// Authentication failures intentionally get the same wording whether
    /// the passphrase was wrong or the data was corrupted.
    pub fn user_message(&self) -> String {
        match self {
            Self::Authentication => {
                "Could not unlock. Check your passphrase and try again.".to_string()
            }
            Self::NoSavedPlan => "No saved plan was found on this device.".to_string(),
            Self::PassphraseRequired => "This plan is encrypted. Enter your passphrase.".to_string(),
            Self::NoPassphraseAvailable | Self::NoPlanLoaded => {
                "The session is locked. Unlock it and try again.".to_string()
            }
            Self::AlreadyEncrypted => "This plan is already encrypted.".to_string(),
            Self::NotEncrypted => "This plan is not encrypted.".to_string(),
            Self::WeakPassphrase => {
                format!("Choose a passphrase of at least {MIN_PASSPHRASE_LEN} characters.")
            }
            Self::QuotaExceeded => {
                "Device storage is full. Export a backup and free some space.".to_string()
            }
            Self::Io(_) => "Could not read or write your data. Try again.".to_string(),
            Self::InvalidBackupFormat(_) => "That file is not a recognized backup.".to_string(),
            Self::SchemaValidation(fields) => {
                format!(
                    "The backup is missing or has invalid fields: {}.",
                    fields.join(", ")
                )
            }
            Self::MalformedJson(_) => "The data could not be parsed.".to_string(),
        }
    }

    /// Check if this is the indistinguishable decrypt failure
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication)
    }
}
