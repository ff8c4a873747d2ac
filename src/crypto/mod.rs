//! Cryptographic engine for the binder
//!
//! Provides AES-256-GCM authenticated encryption with PBKDF2-HMAC-SHA256
//! key derivation for at-rest protection of the whole plan, plus the
//! zeroize-on-drop passphrase wrapper and the advisory strength scorer.

pub mod encryption;
pub mod key_derivation;
pub mod secret;
pub mod strength;

pub use encryption::{decrypt, encrypt, EncryptedBlob};
pub use key_derivation::{derive_key, DerivedKey, PBKDF2_ITERATIONS, SALT_SIZE};
pub use secret::Passphrase;
pub use strength::{score_passphrase, validate_passphrase, StrengthReport};
