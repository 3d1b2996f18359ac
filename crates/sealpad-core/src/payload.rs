//! The decrypted vault payload.
//!
//! A `VaultPayload` only ever lives in memory. Its serialized form is the
//! plaintext fed to the cipher:
//!
//! ```json
//! { "content": "...", "vaultId": "..." }
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Result, SealpadError};

/// Opaque identifier assigned once at vault creation.
///
/// Preserved across every save and rekey; proves continuity of a vault.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Zeroize)]
#[serde(transparent)]
pub struct VaultId(String);

impl VaultId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VaultId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Plaintext structure protected by an envelope.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct VaultPayload {
    content: String,
    #[serde(rename = "vaultId")]
    vault_id: VaultId,
}

impl VaultPayload {
    pub fn new(content: impl Into<String>, vault_id: VaultId) -> Self {
        Self {
            content: content.into(),
            vault_id,
        }
    }

    /// An empty payload for a brand-new vault.
    pub fn fresh() -> Self {
        Self::new(String::new(), VaultId::generate())
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn vault_id(&self) -> &VaultId {
        &self.vault_id
    }

    /// Replace the document body, wiping the previous one.
    pub fn set_content(&mut self, content: String) {
        self.content.zeroize();
        self.content = content;
    }

    pub(crate) fn to_bytes(&self) -> Result<Zeroizing<Vec<u8>>> {
        Ok(Zeroizing::new(serde_json::to_vec(self)?))
    }

    pub(crate) fn from_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| SealpadError::Format(format!("Invalid vault payload: {}", e)))
    }
}

impl std::fmt::Debug for VaultPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultPayload")
            .field("content", &format_args!("[{} bytes]", self.content.len()))
            .field("vault_id", &self.vault_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let payload = VaultPayload::new("hello", VaultId::new("v1"));
        let bytes = payload.to_bytes().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["content"], "hello");
        assert_eq!(value["vaultId"], "v1");
    }

    #[test]
    fn test_accepts_either_key_order() {
        let payload =
            VaultPayload::from_bytes(br#"{"vaultId":"v1","content":"hello"}"#).unwrap();
        assert_eq!(payload.content(), "hello");
        assert_eq!(payload.vault_id().as_str(), "v1");
    }

    #[test]
    fn test_missing_field_rejected() {
        let result = VaultPayload::from_bytes(br#"{"content":"hello"}"#);
        assert!(matches!(result, Err(SealpadError::Format(_))));

        let result = VaultPayload::from_bytes(br#"{"vaultId":"v1"}"#);
        assert!(matches!(result, Err(SealpadError::Format(_))));
    }

    #[test]
    fn test_fresh_payload_is_empty_with_unique_id() {
        let a = VaultPayload::fresh();
        let b = VaultPayload::fresh();

        assert!(a.content().is_empty());
        assert_ne!(a.vault_id(), b.vault_id());
    }

    #[test]
    fn test_set_content_keeps_id() {
        let mut payload = VaultPayload::new("before", VaultId::new("v1"));
        payload.set_content("after".to_string());

        assert_eq!(payload.content(), "after");
        assert_eq!(payload.vault_id().as_str(), "v1");
    }

    #[test]
    fn test_debug_hides_content() {
        let payload = VaultPayload::new("top secret words", VaultId::new("v1"));
        let debug = format!("{:?}", payload);
        assert!(!debug.contains("top secret"));
        assert!(debug.contains("16 bytes"));
    }
}
