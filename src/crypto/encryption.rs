//! AES-256-GCM encryption/decryption of the serialized plan
//!
//! Every encryption call draws a fresh random salt and nonce, so encrypting
//! the same plaintext twice never yields the same blob. Decryption reports a
//! single failure signal: a wrong passphrase and a tampered blob are
//! indistinguishable to callers.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::error::{BinderError, BinderResult};

use super::key_derivation::{derive_key, SALT_SIZE};

/// Size of the AES-GCM nonce in bytes (96 bits)
const NONCE_SIZE: usize = 12;

/// An encrypted plan with everything needed to decrypt it again
/// (given the passphrase): ciphertext, nonce, and key-derivation salt,
/// each base64 encoded for storage and transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedBlob {
    /// The ciphertext with authentication tag
    #[serde(rename = "encrypted")]
    pub ciphertext: String,
    /// The nonce used for this encryption
    pub iv: String,
    /// The key-derivation salt used for this encryption
    pub salt: String,
}

impl EncryptedBlob {
    fn new(ciphertext: &[u8], iv: &[u8], salt: &[u8]) -> Self {
        Self {
            ciphertext: STANDARD.encode(ciphertext),
            iv: STANDARD.encode(iv),
            salt: STANDARD.encode(salt),
        }
    }
}

/// Encrypt plaintext under a passphrase.
///
/// Generates a fresh random salt and nonce, derives the key, and performs
/// authenticated encryption.
pub fn encrypt(plaintext: &[u8], passphrase: &str) -> BinderResult<EncryptedBlob> {
    let mut salt = [0u8; SALT_SIZE];
    OsRng.fill_bytes(&mut salt);

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let key = derive_key(passphrase, &salt);
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| BinderError::Io(format!("Failed to create cipher: {}", e)))?;

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| BinderError::Io(format!("Encryption failed: {}", e)))?;

    Ok(EncryptedBlob::new(&ciphertext, &nonce_bytes, &salt))
}

/// Decrypt a blob under a passphrase.
///
/// # Errors
///
/// Always `BinderError::Authentication`, whether the passphrase is wrong,
/// the ciphertext was tampered with, or the blob encoding is corrupted.
/// Callers must not try to tell these apart.
pub fn decrypt(blob: &EncryptedBlob, passphrase: &str) -> BinderResult<Vec<u8>> {
    let salt = STANDARD
        .decode(&blob.salt)
        .map_err(|_| BinderError::Authentication)?;
    let nonce_bytes = STANDARD
        .decode(&blob.iv)
        .map_err(|_| BinderError::Authentication)?;
    let ciphertext = STANDARD
        .decode(&blob.ciphertext)
        .map_err(|_| BinderError::Authentication)?;

    if nonce_bytes.len() != NONCE_SIZE {
        return Err(BinderError::Authentication);
    }
    let nonce = Nonce::from_slice(&nonce_bytes);

    let key = derive_key(passphrase, &salt);
    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| BinderError::Authentication)?;

    cipher
        .decrypt(nonce, ciphertext.as_ref())
        .map_err(|_| BinderError::Authentication)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSPHRASE: &str = "correct horse battery staple";

    #[test]
    fn test_encrypt_decrypt_round_trip() {
        let plaintext = b"{\"title\":\"My Binder\"}";

        let blob = encrypt(plaintext, PASSPHRASE).unwrap();
        let decrypted = decrypt(&blob, PASSPHRASE).unwrap();

        assert_eq!(plaintext, decrypted.as_slice());
    }

    #[test]
    fn test_fresh_salt_and_nonce_every_call() {
        let plaintext = b"same plaintext";

        let blob1 = encrypt(plaintext, PASSPHRASE).unwrap();
        let blob2 = encrypt(plaintext, PASSPHRASE).unwrap();

        assert_ne!(blob1.salt, blob2.salt);
        assert_ne!(blob1.iv, blob2.iv);
        assert_ne!(blob1.ciphertext, blob2.ciphertext);
    }

    #[test]
    fn test_wrong_passphrase_fails_with_authentication() {
        let blob = encrypt(b"secret data", PASSPHRASE).unwrap();

        let result = decrypt(&blob, "not the passphrase");
        assert!(matches!(result, Err(BinderError::Authentication)));
    }

    #[test]
    fn test_tampered_ciphertext_fails() {
        let blob = encrypt(b"secret data", PASSPHRASE).unwrap();

        let mut bytes = STANDARD.decode(&blob.ciphertext).unwrap();
        bytes[0] ^= 0x01;
        let tampered = EncryptedBlob {
            ciphertext: STANDARD.encode(&bytes),
            ..blob
        };

        assert!(matches!(
            decrypt(&tampered, PASSPHRASE),
            Err(BinderError::Authentication)
        ));
    }

    #[test]
    fn test_tampered_iv_fails() {
        let blob = encrypt(b"secret data", PASSPHRASE).unwrap();

        let mut bytes = STANDARD.decode(&blob.iv).unwrap();
        bytes[0] ^= 0x01;
        let tampered = EncryptedBlob {
            iv: STANDARD.encode(&bytes),
            ..blob
        };

        assert!(matches!(
            decrypt(&tampered, PASSPHRASE),
            Err(BinderError::Authentication)
        ));
    }

    #[test]
    fn test_tampered_salt_fails() {
        let blob = encrypt(b"secret data", PASSPHRASE).unwrap();

        let mut bytes = STANDARD.decode(&blob.salt).unwrap();
        bytes[0] ^= 0x01;
        let tampered = EncryptedBlob {
            salt: STANDARD.encode(&bytes),
            ..blob
        };

        assert!(matches!(
            decrypt(&tampered, PASSPHRASE),
            Err(BinderError::Authentication)
        ));
    }

    #[test]
    fn test_corrupted_encoding_fails_with_authentication() {
        let blob = encrypt(b"secret data", PASSPHRASE).unwrap();
        let corrupted = EncryptedBlob {
            ciphertext: "not base64 !!!".to_string(),
            ..blob
        };

        assert!(matches!(
            decrypt(&corrupted, PASSPHRASE),
            Err(BinderError::Authentication)
        ));
    }

    #[test]
    fn test_empty_plaintext() {
        let blob = encrypt(b"", PASSPHRASE).unwrap();
        let decrypted = decrypt(&blob, PASSPHRASE).unwrap();
        assert!(decrypted.is_empty());
    }

    #[test]
    fn test_large_plaintext() {
        let plaintext: Vec<u8> = (0..50_000).map(|i| (i % 256) as u8).collect();
        let blob = encrypt(&plaintext, PASSPHRASE).unwrap();
        let decrypted = decrypt(&blob, PASSPHRASE).unwrap();
        assert_eq!(plaintext, decrypted);
    }

    #[test]
    fn test_blob_serialized_field_names() {
        let blob = encrypt(b"data", PASSPHRASE).unwrap();
        let value = serde_json::to_value(&blob).unwrap();
        assert!(value.get("encrypted").is_some());
        assert!(value.get("iv").is_some());
        assert!(value.get("salt").is_some());
    }
}
