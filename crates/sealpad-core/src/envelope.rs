//! The envelope: the only durable form of a vault's secret data.
//!
//! An envelope is immutable once produced. Every save builds a new one with
//! a fresh salt and nonce.
//!
//! Wire form (standard base64 with padding):
//!
//! ```json
//! { "salt": "<16 bytes>", "iv": "<12 bytes>", "data": "<ciphertext + tag>" }
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::crypto::{IV_LENGTH, SALT_LENGTH, TAG_LENGTH};
use crate::error::{Result, SealpadError};

/// Salt, nonce and authenticated ciphertext of one saved vault version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    salt: [u8; SALT_LENGTH],
    iv: [u8; IV_LENGTH],
    ciphertext: Vec<u8>,
}

#[derive(Serialize, Deserialize)]
struct EnvelopeWire {
    salt: String,
    iv: String,
    data: String,
}

impl Envelope {
    /// Assemble an envelope from raw parts.
    ///
    /// # Errors
    ///
    /// Returns `SealpadError::Format` if the ciphertext cannot even hold an
    /// authentication tag.
    pub fn from_parts(
        salt: [u8; SALT_LENGTH],
        iv: [u8; IV_LENGTH],
        ciphertext: Vec<u8>,
    ) -> Result<Self> {
        if ciphertext.len() < TAG_LENGTH {
            return Err(SealpadError::Format(format!(
                "Ciphertext too short ({} bytes, tag alone is {})",
                ciphertext.len(),
                TAG_LENGTH
            )));
        }
        Ok(Self {
            salt,
            iv,
            ciphertext,
        })
    }

    pub fn salt(&self) -> &[u8; SALT_LENGTH] {
        &self.salt
    }

    pub fn iv(&self) -> &[u8; IV_LENGTH] {
        &self.iv
    }

    /// Ciphertext with the authentication tag appended.
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Serialize to the JSON wire form.
    pub fn to_json(&self) -> Result<String> {
        let wire = EnvelopeWire {
            salt: STANDARD.encode(self.salt),
            iv: STANDARD.encode(self.iv),
            data: STANDARD.encode(&self.ciphertext),
        };
        Ok(serde_json::to_string(&wire)?)
    }

    /// Parse the JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns `SealpadError::Format` for invalid JSON, missing fields,
    /// invalid base64, or wrong salt/iv lengths.
    pub fn from_json(json: &str) -> Result<Self> {
        let wire: EnvelopeWire = serde_json::from_str(json.trim())
            .map_err(|e| SealpadError::Format(format!("Invalid envelope JSON: {}", e)))?;

        let salt = decode_fixed::<SALT_LENGTH>("salt", &wire.salt)?;
        let iv = decode_fixed::<IV_LENGTH>("iv", &wire.iv)?;
        let ciphertext = STANDARD
            .decode(wire.data.as_bytes())
            .map_err(|e| SealpadError::Format(format!("Invalid base64 in data: {}", e)))?;

        Self::from_parts(salt, iv, ciphertext)
    }
}

fn decode_fixed<const N: usize>(field: &str, encoded: &str) -> Result<[u8; N]> {
    let bytes = STANDARD
        .decode(encoded.as_bytes())
        .map_err(|e| SealpadError::Format(format!("Invalid base64 in {}: {}", field, e)))?;
    bytes.as_slice().try_into().map_err(|_| {
        SealpadError::Format(format!(
            "{} must be {} bytes (got {})",
            field,
            N,
            bytes.len()
        ))
    })
}
