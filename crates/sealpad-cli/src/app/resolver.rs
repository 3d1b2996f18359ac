//! Path resolution for config and vault files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, read_config};
use crate::constants::env_vars;
use crate::errors::CliError;

/// Resolve the config file path, checking SEALPAD_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(env_vars::CONFIG) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the vault path from `--vault` / SEALPAD_PATH, then the config.
pub fn resolve_vault_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.vault.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let config_path = resolve_config_path()?;
    if !config_path.exists() {
        return Err(CliError::not_found(
            missing_config_message(&config_path),
            "Hint: Run `sealpad init` or pass --vault <PATH>.",
        )
        .into());
    }

    let config = read_config(&config_path)?;
    Ok(PathBuf::from(config.vault.path))
}

/// Error message when no vault exists at the resolved path.
pub fn missing_vault_message(path: &Path) -> String {
    format!("Vault not found: {}", path.display())
}

/// Error message when the config file is missing.
pub fn missing_config_message(config_path: &Path) -> String {
    format!("Config file not found: {}", config_path.display())
}
