//! # Sealpad Core
//!
//! Core library for Sealpad - a single-document, password-protected notepad
//! whose vault file carries its own encrypted payload.
//!
//! ## Architecture
//!
//! - **crypto**: PBKDF2 key derivation, AES-256-GCM, new-password validation
//! - **envelope** / **codec**: the durable `{salt, iv, data}` artifact and
//!   the password ⇄ payload conversion
//! - **session**: the Pristine / Locked / Unlocked state machine
//! - **store**: document I/O adapters (memory, JSON file, HTML document)
//! - **document**: a store paired with its active session

pub mod codec;
pub mod crypto;
pub mod document;
pub mod envelope;
pub mod error;
pub mod fs;
pub mod payload;
pub mod session;
pub mod store;

pub use codec::{decrypt, encrypt, EnvelopeCodec};
pub use crypto::NewPassword;
pub use document::VaultDocument;
pub use envelope::Envelope;
pub use error::{Result, SealpadError};
pub use payload::{VaultId, VaultPayload};
pub use session::{LifecycleState, VaultSession, WriteKind};
pub use store::{DocumentFormat, DocumentStore, FileStore, MemoryStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
