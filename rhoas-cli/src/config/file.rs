use super::CliConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Get the configuration directory path
pub fn get_config_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
    Ok(home_dir.join(".rhoas"))
}

/// Get the configuration file path
pub fn get_config_file_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yml"))
}

/// Resolve the config file to use, preferring an explicit path
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => get_config_file_path(),
    }
}

/// Load configuration from a specific path.
///
/// A missing file is not an error: the defaults are returned and nothing is
/// written, so read-only commands never touch the filesystem.
pub async fn load_config_from_path(config_path: &Path) -> Result<CliConfig> {
    if !config_path.exists() {
        tracing::debug!("config file {:?} not found, using defaults", config_path);
        return Ok(CliConfig::default());
    }

    let content = fs::read_to_string(config_path)
        .await
        .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

    let config: CliConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

    Ok(config)
}

/// Save configuration to a specific path
pub async fn save_config_to_path(config: &CliConfig, config_path: &Path) -> Result<()> {
    if let Some(config_dir) = config_path.parent() {
        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await.with_context(|| {
                format!("Failed to create config directory: {:?}", config_dir)
            })?;
        }
    }

    let content = serde_yaml::to_string(config)
        .with_context(|| "Failed to serialize configuration")?;

    fs::write(config_path, content)
        .await
        .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

    Ok(())
}
