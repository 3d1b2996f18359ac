//! Envelope codec: {password, payload} ⇄ {salt, iv, ciphertext}.
//!
//! The codec knows nothing about sessions or files. Every `encrypt` draws a
//! fresh salt and nonce, so no nonce is ever reused under one key.

use crate::crypto::{self, derive_key, IV_LENGTH, PBKDF2_ITERATIONS, SALT_LENGTH};
use crate::envelope::Envelope;
use crate::error::{Result, SealpadError};
use crate::payload::VaultPayload;

/// Encrypts and decrypts vault payloads with a fixed KDF iteration count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeCodec {
    iterations: u32,
}

impl Default for EnvelopeCodec {
    fn default() -> Self {
        Self {
            iterations: PBKDF2_ITERATIONS,
        }
    }
}

impl EnvelopeCodec {
    /// Create a codec with a non-default iteration count.
    ///
    /// # Errors
    ///
    /// Returns `SealpadError::InvalidInput` below [`crypto::MIN_PBKDF2_ITERATIONS`].
    pub fn with_iterations(iterations: u32) -> Result<Self> {
        if iterations < crypto::MIN_PBKDF2_ITERATIONS {
            return Err(SealpadError::InvalidInput(format!(
                "Iteration count must be at least {} (got {})",
                crypto::MIN_PBKDF2_ITERATIONS,
                iterations
            )));
        }
        Ok(Self { iterations })
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Encrypt `payload` under `password` into a brand-new envelope.
    pub fn encrypt(&self, payload: &VaultPayload, password: &str) -> Result<Envelope> {
        let salt: [u8; SALT_LENGTH] = crypto::random_bytes()?;
        let iv: [u8; IV_LENGTH] = crypto::random_bytes()?;

        let key = derive_key(password, &salt, self.iterations)?;
        let plaintext = payload.to_bytes()?;
        let ciphertext = crypto::seal(&key, &iv, &plaintext)?;

        tracing::debug!(
            ciphertext_len = ciphertext.len(),
            iterations = self.iterations,
            "sealed vault payload"
        );
        Envelope::from_parts(salt, iv, ciphertext)
    }

    /// Decrypt `envelope` with `password`.
    ///
    /// # Errors
    ///
    /// Returns `SealpadError::AuthFailure` for a wrong password or corrupted
    /// ciphertext (indistinguishable by design), and `SealpadError::Format`
    /// if authenticated plaintext is not a valid payload.
    pub fn decrypt(&self, envelope: &Envelope, password: &str) -> Result<VaultPayload> {
        let key = derive_key(password, envelope.salt(), self.iterations)?;
        let plaintext = crypto::open(&key, envelope.iv(), envelope.ciphertext())?;
        VaultPayload::from_bytes(&plaintext)
    }
}

/// Encrypt with the default codec.
///
/// # Examples
///
/// ```
/// use sealpad_core::{decrypt, encrypt, VaultId, VaultPayload};
///
/// let payload = VaultPayload::new("hello", VaultId::new("v1"));
/// let envelope = encrypt(&payload, "p@ss").unwrap();
/// assert_eq!(decrypt(&envelope, "p@ss").unwrap(), payload);
/// assert!(decrypt(&envelope, "wrong").is_err());
/// ```
pub fn encrypt(payload: &VaultPayload, password: &str) -> Result<Envelope> {
    EnvelopeCodec::default().encrypt(payload, password)
}

/// Decrypt with the default codec.
pub fn decrypt(envelope: &Envelope, password: &str) -> Result<VaultPayload> {
    EnvelopeCodec::default().decrypt(envelope, password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::VaultId;

    #[test]
    fn test_round_trip() {
        let payload = VaultPayload::new("hello", VaultId::new("v1"));
        let envelope = encrypt(&payload, "p@ss").unwrap();
        let decrypted = decrypt(&envelope, "p@ss").unwrap();

        assert_eq!(decrypted.content(), "hello");
        assert_eq!(decrypted.vault_id().as_str(), "v1");
    }

    #[test]
    fn test_wrong_password_rejected() {
        let payload = VaultPayload::new("hello", VaultId::new("v1"));
        let envelope = encrypt(&payload, "p@ss").unwrap();

        assert!(matches!(
            decrypt(&envelope, "wrong"),
            Err(SealpadError::AuthFailure)
        ));
    }

    #[test]
    fn test_fresh_salt_and_iv_per_encryption() {
        let payload = VaultPayload::new("same", VaultId::new("v1"));
        let first = encrypt(&payload, "p@ss").unwrap();
        let second = encrypt(&payload, "p@ss").unwrap();

        assert_ne!(first.salt(), second.salt());
        assert_ne!(first.iv(), second.iv());
        assert_ne!(first.ciphertext(), second.ciphertext());
    }

    #[test]
    fn test_tampered_salt_rejected() {
        let payload = VaultPayload::new("hello", VaultId::new("v1"));
        let envelope = encrypt(&payload, "p@ss").unwrap();

        let mut salt = *envelope.salt();
        salt[0] ^= 0xFF;
        let tampered =
            Envelope::from_parts(salt, *envelope.iv(), envelope.ciphertext().to_vec()).unwrap();

        assert!(matches!(
            decrypt(&tampered, "p@ss"),
            Err(SealpadError::AuthFailure)
        ));
    }

    #[test]
    fn test_iteration_mismatch_rejected() {
        let payload = VaultPayload::new("hello", VaultId::new("v1"));
        let envelope = encrypt(&payload, "p@ss").unwrap();
        let other = EnvelopeCodec::with_iterations(crypto::MIN_PBKDF2_ITERATIONS).unwrap();

        assert!(matches!(
            other.decrypt(&envelope, "p@ss"),
            Err(SealpadError::AuthFailure)
        ));
    }

    #[test]
    fn test_low_iterations_rejected() {
        assert!(EnvelopeCodec::with_iterations(10).is_err());
        assert_eq!(EnvelopeCodec::default().iterations(), PBKDF2_ITERATIONS);
    }

    #[test]
    fn test_ciphertext_does_not_contain_plaintext() {
        let payload = VaultPayload::new("PLAINTEXT_MARKER_123", VaultId::new("v1"));
        let json = encrypt(&payload, "p@ss").unwrap().to_json().unwrap();
        assert!(!json.contains("PLAINTEXT_MARKER_123"));
    }
}
