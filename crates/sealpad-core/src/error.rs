//! Error types for Sealpad core operations.
//!
//! Every variant is local and recoverable: a session that returned any of
//! these errors is still usable. The CLI layer maps them to exit codes and
//! user-facing messages.

use thiserror::Error;

/// Result type alias for Sealpad operations.
pub type Result<T> = std::result::Result<T, SealpadError>;

/// Core error type for Sealpad operations.
#[derive(Debug, Error)]
pub enum SealpadError {
    /// Authentication tag did not verify: wrong password or tampered artifact.
    ///
    /// The two causes cannot be told apart without weakening the AEAD
    /// guarantee, so they share one variant.
    #[error("Invalid password")]
    AuthFailure,

    /// New password rejected (empty or confirmation mismatch).
    #[error("{0}")]
    Validation(String),

    /// The document store could not write the artifact
    #[error("Persistence failure: {0}")]
    Persistence(String),

    /// Operation not permitted in the current lifecycle state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A pending task was overtaken by a newer task, a lock, or another session
    #[error("Operation superseded by a newer request")]
    Superseded,

    /// Encryption or key derivation error
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Malformed envelope, payload, or host document
    #[error("Format error: {0}")]
    Format(String),

    /// Invalid caller input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SealpadError {
    /// Whether this error came from a failed password check.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, SealpadError::AuthFailure)
    }
}

impl From<std::io::Error> for SealpadError {
    fn from(err: std::io::Error) -> Self {
        SealpadError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for SealpadError {
    fn from(err: serde_json::Error) -> Self {
        SealpadError::Format(err.to_string())
    }
}
