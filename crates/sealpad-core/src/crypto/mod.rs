//! Cryptographic primitives for Sealpad.
//!
//! - **PBKDF2-HMAC-SHA-256**: password stretching, fixed iteration count
//! - **AES-256-GCM**: authenticated encryption of the vault payload
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft or tampering of the vault file
//! - Offline brute-force attacks on the master password
//!
//! We do NOT defend against:
//! - Compromised host / keylogger
//! - Access to an unlocked session's memory

pub mod cipher;
pub mod key;
pub mod password;
mod random;

pub use cipher::{open, seal, IV_LENGTH, TAG_LENGTH};
pub use key::{
    derive_key, DerivedKey, KEY_LENGTH, MIN_PBKDF2_ITERATIONS, PBKDF2_ITERATIONS, SALT_LENGTH,
};
pub use password::{validate_new_password, NewPassword, EMPTY_PASSWORD_MESSAGE, MISMATCH_MESSAGE};
pub(crate) use random::random_bytes;
