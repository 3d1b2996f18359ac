//! AES-256-GCM sealing and opening.
//!
//! The 16-byte authentication tag is appended to the ciphertext. Opening
//! never returns plaintext unless the tag verifies.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use zeroize::Zeroizing;

use super::key::DerivedKey;
use crate::error::{Result, SealpadError};

/// Nonce length in bytes (96 bits).
pub const IV_LENGTH: usize = 12;

/// Authentication tag length in bytes.
pub const TAG_LENGTH: usize = 16;

fn cipher_for(key: &DerivedKey) -> Result<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| SealpadError::Crypto(format!("Failed to create cipher: {}", e)))
}

/// Encrypt `plaintext` under `key` with nonce `iv`.
///
/// The caller must never reuse an `iv` with the same key.
pub fn seal(key: &DerivedKey, iv: &[u8; IV_LENGTH], plaintext: &[u8]) -> Result<Vec<u8>> {
    cipher_for(key)?
        .encrypt(Nonce::from_slice(iv), plaintext)
        .map_err(|_| SealpadError::Crypto("Encryption failed".to_string()))
}

/// Decrypt and authenticate `ciphertext` (tag included).
///
/// # Errors
///
/// Returns `SealpadError::AuthFailure` when the tag does not verify, which
/// covers both a wrong key and corrupted data.
pub fn open(
    key: &DerivedKey,
    iv: &[u8; IV_LENGTH],
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    cipher_for(key)?
        .decrypt(Nonce::from_slice(iv), ciphertext)
        .map(Zeroizing::new)
        .map_err(|_| SealpadError::AuthFailure)
}
