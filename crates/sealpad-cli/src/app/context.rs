//! Application context for the Sealpad CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file and the
//! terminal UI context.

use std::io::IsTerminal;
use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use sealpad_core::{FileStore, LifecycleState, VaultDocument};

use crate::cli::Cli;
use crate::config::{read_config, SealpadConfig};
use crate::errors::CliError;
use crate::ui::UiContext;

use super::password::unlock_with_retry;
use super::resolver::{missing_vault_message, resolve_config_path, resolve_vault_path};

pub struct AppContext<'a> {
    cli: &'a Cli,
    ui: UiContext,
    config: OnceCell<Option<SealpadConfig>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            ui: UiContext::from_env(cli.quiet),
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Prompts are allowed only with a terminal on stdin and no `--no-input`.
    pub fn interactive(&self) -> bool {
        std::io::stdin().is_terminal() && !self.cli.no_input
    }

    /// The config file, if one exists. Loaded once.
    pub fn config(&self) -> anyhow::Result<Option<&SealpadConfig>> {
        let config = self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if !path.exists() {
                return Ok::<_, anyhow::Error>(None);
            }
            read_config(&path).map(Some)
        })?;
        Ok(config.as_ref())
    }

    /// Configured log directive; config errors are reported later by the
    /// command that needs the config.
    pub fn log_level(&self) -> Option<String> {
        self.config()
            .ok()
            .flatten()
            .and_then(|c| c.log.level.clone())
    }

    pub fn vault_path(&self) -> anyhow::Result<PathBuf> {
        resolve_vault_path(self.cli)
    }

    /// Load the configured vault. It must already exist.
    pub fn open_vault(&self) -> anyhow::Result<VaultDocument<FileStore>> {
        let path = self.vault_path()?;
        let document = VaultDocument::open(FileStore::new(&path))?;
        if document.state() == LifecycleState::Pristine {
            return Err(CliError::not_found(
                missing_vault_message(&path),
                "Hint: Run `sealpad init` to create it.",
            )
            .into());
        }
        tracing::debug!(format = document.store().format().name(), "vault loaded");
        Ok(document)
    }

    /// Load and unlock the configured vault.
    pub fn open_unlocked(&self) -> anyhow::Result<VaultDocument<FileStore>> {
        let mut document = self.open_vault()?;
        unlock_with_retry(self, &mut document)?;
        Ok(document)
    }
}
