//! Key derivation using PBKDF2-HMAC-SHA256
//!
//! Stretches a user passphrase into an AES-256 key bound to a random salt.
//! The iteration count is fixed and deliberately high so offline brute force
//! stays expensive while a legitimate unlock remains sub-second.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroize;

/// PBKDF2 iteration count. Changing this breaks decryption of existing
/// blobs, so it is part of the on-disk format.
pub const PBKDF2_ITERATIONS: u32 = 600_000;

/// Size of the key-derivation salt in bytes (128 bits)
pub const SALT_SIZE: usize = 16;

/// Size of the derived key in bytes (AES-256)
pub const KEY_SIZE: usize = 32;

/// A derived encryption key, zeroed on drop
pub struct DerivedKey {
    key: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

/// Derive an encryption key from a passphrase and salt.
///
/// Deterministic: the same passphrase and salt always yield the same key.
pub fn derive_key(passphrase: &str, salt: &[u8]) -> DerivedKey {
    let mut key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    DerivedKey { key }
}
