use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SealpadConfig {
    pub vault: VaultSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VaultSection {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LogSection {
    /// `tracing` filter directive, e.g. "info" or "sealpad_core=debug"
    pub level: Option<String>,
}

impl SealpadConfig {
    pub fn new(vault_path: PathBuf) -> Self {
        Self {
            vault: VaultSection {
                path: vault_path.to_string_lossy().to_string(),
            },
            log: LogSection::default(),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_vault_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("vault.json"))
}

pub fn read_config(path: &Path) -> anyhow::Result<SealpadConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &SealpadConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("sealpad"));
        }
    }
    Ok(home_dir()?.join(".config").join("sealpad"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("sealpad"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("sealpad"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");
        let mut config = SealpadConfig::new(PathBuf::from("/vaults/notes.html"));
        config.log.level = Some("debug".to_string());

        write_config(&path, &config).expect("write");
        let loaded = read_config(&path).expect("read");

        assert_eq!(loaded.vault.path, "/vaults/notes.html");
        assert_eq!(loaded.log.level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_log_section_is_optional() {
        let config: SealpadConfig =
            toml::from_str("[vault]\npath = \"/tmp/v.json\"\n").expect("parse");
        assert_eq!(config.vault.path, "/tmp/v.json");
        assert!(config.log.level.is_none());
    }

    #[test]
    fn test_read_config_reports_path_on_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").expect("write");

        let err = read_config(&path).expect_err("should fail");
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
