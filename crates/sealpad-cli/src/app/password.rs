//! Password prompting and vault unlocking with retry.

use dialoguer::Password;
use sealpad_core::{DocumentStore, NewPassword, SealpadError, VaultDocument};
use secrecy::{ExposeSecret, SecretString};

use crate::constants::env_vars;
use crate::errors::CliError;
use crate::ui::print_error;
use crate::ui::progress::Spinner;

use super::context::AppContext;

const UNLOCK_HINT: &str =
    "Hint: Check your password. Set SEALPAD_PASSWORD for non-interactive use.";

fn env_secret(name: &str) -> Option<SecretString> {
    std::env::var(name).ok().map(SecretString::from)
}

fn prompt_secret(prompt: &str) -> anyhow::Result<SecretString> {
    Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map(SecretString::from)
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Unlock `document`, re-prompting on a wrong password.
///
/// With SEALPAD_PASSWORD set or without a terminal there is one attempt.
/// Interactive prompting repeats until the password is right or the user
/// aborts the prompt.
pub fn unlock_with_retry<S: DocumentStore>(
    ctx: &AppContext<'_>,
    document: &mut VaultDocument<S>,
) -> anyhow::Result<()> {
    let from_env = env_secret(env_vars::PASSWORD).filter(|v| !v.expose_secret().is_empty());
    let interactive = from_env.is_none() && ctx.interactive();
    if from_env.is_none() && !interactive {
        return Err(CliError::invalid_input(
            "No password provided and no TTY available. Set SEALPAD_PASSWORD.",
        )
        .into());
    }

    let mut attempts: u32 = 0;
    loop {
        attempts += 1;
        let password = match from_env.as_ref() {
            Some(secret) => secret.expose_secret().to_owned(),
            None => prompt_secret("Password")?.expose_secret().to_owned(),
        };

        let task = document.session_mut().begin_unlock(password)?;
        let outcome = Spinner::run(ctx.ui(), "Unlocking", || task.run());

        match document.session_mut().complete_unlock(outcome) {
            Ok(()) => {
                tracing::debug!(attempts, "unlocked");
                return Ok(());
            }
            Err(SealpadError::AuthFailure) if interactive => {
                print_error(ctx.ui(), &SealpadError::AuthFailure.to_string(), None);
                continue;
            }
            Err(SealpadError::AuthFailure) => {
                return Err(CliError::auth_failed_with_hint(
                    SealpadError::AuthFailure.to_string(),
                    UNLOCK_HINT,
                )
                .into());
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Collect a new password and its confirmation.
///
/// Reads SEALPAD_NEW_PASSWORD (confirmation from
/// SEALPAD_NEW_PASSWORD_CONFIRM, defaulting to the same value), otherwise
/// prompts twice. Validation is left to the core so the user sees its
/// messages.
pub fn read_new_password(ctx: &AppContext<'_>) -> anyhow::Result<NewPassword> {
    if let Some(password) = env_secret(env_vars::NEW_PASSWORD) {
        let confirmation = env_secret(env_vars::NEW_PASSWORD_CONFIRM);
        let confirmation = confirmation.as_ref().unwrap_or(&password);
        return Ok(NewPassword::new(
            password.expose_secret(),
            confirmation.expose_secret(),
        ));
    }
    if !ctx.interactive() {
        return Err(CliError::invalid_input(
            "No new password provided and no TTY available. Set SEALPAD_NEW_PASSWORD.",
        )
        .into());
    }
    let password = prompt_secret("New password")?;
    let confirmation = prompt_secret("Confirm password")?;
    Ok(NewPassword::new(
        password.expose_secret(),
        confirmation.expose_secret(),
    ))
}
