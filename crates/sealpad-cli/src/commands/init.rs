use std::path::PathBuf;

use sealpad_core::{FileStore, LifecycleState, VaultDocument};

use crate::app::{read_new_password, resolve_config_path, AppContext};
use crate::config::{default_vault_path, write_config, SealpadConfig};
use crate::errors::CliError;
use crate::ui::{badge, hint, kv, Badge};

fn target_path(ctx: &AppContext<'_>, explicit: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit.or(ctx.cli().vault.as_deref()) {
        return Ok(PathBuf::from(path));
    }
    default_vault_path()
}

/// Create a vault: first save of a pristine document under a new password.
pub fn handle_init(ctx: &AppContext<'_>, args: &crate::cli::InitArgs) -> anyhow::Result<()> {
    let path = target_path(ctx, args.path.as_deref())?;
    let mut document = VaultDocument::open(FileStore::new(&path))?;
    if document.state() != LifecycleState::Pristine {
        return Err(CliError::invalid_input(format!(
            "Vault already exists: {}\nHint: Use `sealpad passwd` to change its password.",
            path.display()
        ))
        .into());
    }

    if let Some(content) = args.content.as_deref() {
        document.edit(content)?;
    }

    let new_password = read_new_password(ctx)?;
    let task = document.session_mut().begin_save(Some(&new_password))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!("Failed to create directory {}: {}", parent.display(), e)
        })?;
    }
    super::run_write(ctx, &mut document, task)?;
    document.lock();

    let config_path = resolve_config_path()?;
    let wrote_config = if args.no_config || config_path.exists() {
        false
    } else {
        write_config(&config_path, &SealpadConfig::new(absolute(&path)))?;
        true
    };

    if !ctx.quiet() {
        let ui = ctx.ui();
        println!("{}", badge(ui, Badge::Ok, "Vault created"));
        println!("  {}", kv(ui, "Path", &path.display().to_string()));
        println!("  {}", kv(ui, "Format", document.store().format().name()));
        if wrote_config {
            println!("  {}", kv(ui, "Config", &config_path.display().to_string()));
        }
        println!("{}", hint(ui, "There is no password recovery. Keep it safe."));
    }
    Ok(())
}

fn absolute(path: &std::path::Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
