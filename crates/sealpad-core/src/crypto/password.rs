//! New-password capture and validation.
//!
//! Used before the first save of a new vault and before rekeying. Unlocking
//! never validates: any string is tried against the envelope.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{Result, SealpadError};

/// Message shown when the new password is empty.
pub const EMPTY_PASSWORD_MESSAGE: &str = "Password cannot be empty.";

/// Message shown when the confirmation differs from the new password.
pub const MISMATCH_MESSAGE: &str = "Passwords do not match.";

/// A new master password together with its confirmation entry.
#[derive(Debug)]
pub struct NewPassword {
    password: SecretString,
    confirmation: SecretString,
}

impl NewPassword {
    pub fn new(password: impl Into<String>, confirmation: impl Into<String>) -> Self {
        Self {
            password: SecretString::from(password.into()),
            confirmation: SecretString::from(confirmation.into()),
        }
    }

    /// Check the pair and hand back the accepted password.
    ///
    /// # Errors
    ///
    /// Returns `SealpadError::Validation` with [`EMPTY_PASSWORD_MESSAGE`] or
    /// [`MISMATCH_MESSAGE`]. Emptiness is checked first.
    ///
    /// # Examples
    ///
    /// ```
    /// use sealpad_core::crypto::NewPassword;
    ///
    /// assert!(NewPassword::new("hunter2", "hunter2").validate().is_ok());
    /// assert!(NewPassword::new("hunter2", "hunter3").validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<SecretString> {
        validate_new_password(
            self.password.expose_secret(),
            self.confirmation.expose_secret(),
        )?;
        Ok(duplicate_secret(&self.password))
    }
}

/// Validate a new password against its confirmation.
pub fn validate_new_password(password: &str, confirmation: &str) -> Result<()> {
    if password.is_empty() {
        return Err(SealpadError::Validation(EMPTY_PASSWORD_MESSAGE.to_string()));
    }

    if password != confirmation {
        return Err(SealpadError::Validation(MISMATCH_MESSAGE.to_string()));
    }

    Ok(())
}

pub(crate) fn duplicate_secret(secret: &SecretString) -> SecretString {
    SecretString::from(secret.expose_secret().to_owned())
}
