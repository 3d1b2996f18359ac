//! Key derivation using PBKDF2-HMAC-SHA-256.
//!
//! Keys are stretched from the master password with a fixed, deliberately
//! high iteration count. The count is not stored in the envelope: both the
//! writer and the reader must agree on it out of band.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

use crate::error::{Result, SealpadError};

/// PBKDF2 iteration count used for every envelope.
pub const PBKDF2_ITERATIONS: u32 = 200_000;

/// Lowest iteration count accepted by [`derive_key`].
pub const MIN_PBKDF2_ITERATIONS: u32 = 100_000;

/// Length of a derived key in bytes (AES-256).
pub const KEY_LENGTH: usize = 32;

/// Length of the random salt stored in each envelope.
pub const SALT_LENGTH: usize = 16;

/// A symmetric key derived from a password.
///
/// Key material is zeroized when the value is dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    #[cfg(test)]
    pub(crate) fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an encryption key from a password using PBKDF2-HMAC-SHA-256.
///
/// # Arguments
///
/// * `password` - The master password (any string, including empty)
/// * `salt` - Random salt, at least [`SALT_LENGTH`] bytes
/// * `iterations` - Iteration count, at least [`MIN_PBKDF2_ITERATIONS`]
///
/// # Security
///
/// - Same password + salt + iterations always produces the same key
/// - Changing any input produces a different key
/// - Cost is paid once per unlock or save, never per keystroke
///
/// # Examples
///
/// ```
/// use sealpad_core::crypto::{derive_key, PBKDF2_ITERATIONS};
///
/// let salt = [7u8; 16];
/// let key = derive_key("my-password", &salt, PBKDF2_ITERATIONS).unwrap();
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(password: &str, salt: &[u8], iterations: u32) -> Result<DerivedKey> {
    if salt.len() < SALT_LENGTH {
        return Err(SealpadError::InvalidInput(format!(
            "Salt must be at least {} bytes",
            SALT_LENGTH
        )));
    }

    if iterations < MIN_PBKDF2_ITERATIONS {
        return Err(SealpadError::InvalidInput(format!(
            "Iteration count must be at least {} (got {})",
            MIN_PBKDF2_ITERATIONS, iterations
        )));
    }

    let mut derived = DerivedKey {
        key: [0u8; KEY_LENGTH],
    };
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut derived.key);

    Ok(derived)
}
