use std::path::{Path, PathBuf};
use tokio::fs as async_fs;
use tracing::debug;

use crate::common::error::RepoTabsError;
use crate::common::result::{RepoTabsResult, ResultExt};
use crate::domain::entities::app_config::AppConfig;

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "repotabs.yaml";

/// Loads and stores `repotabs.yaml`
#[derive(Debug, Clone, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// `~/.config/repotabs/repotabs.yaml`, if a home directory is known
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("repotabs").join(CONFIG_FILE_NAME))
    }

    /// Load configuration.
    ///
    /// An explicitly given path must exist. Without one, the default location
    /// is read when present and built-in defaults are used otherwise.
    pub async fn load(&self, explicit_path: Option<&Path>) -> RepoTabsResult<AppConfig> {
        match explicit_path {
            Some(path) => {
                if !path.exists() {
                    return Err(RepoTabsError::config_error(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                self.read_config(path).await
            }
            None => match Self::default_config_path() {
                Some(path) if path.is_file() => self.read_config(&path).await,
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(AppConfig::default())
                }
            },
        }
    }

    /// Read and parse a YAML config file
    pub async fn read_config(&self, path: &Path) -> RepoTabsResult<AppConfig> {
        debug!("Loading config from {}", path.display());
        let content = async_fs::read_to_string(path)
            .await
            .with_filesystem_error("Failed to read config file", Some(path.to_path_buf()))?;

        // An empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        serde_yaml::from_str(&content)
            .with_config_error(format!("Failed to parse config file {}", path.display()))
    }

    /// Write text to `path`, creating parent directories as needed
    pub async fn write_raw(&self, path: &Path, content: &str) -> RepoTabsResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent)
                    .await
                    .with_filesystem_error(
                        "Failed to create config directory",
                        Some(parent.to_path_buf()),
                    )?;
            }
        }
        async_fs::write(path, content)
            .await
            .with_filesystem_error("Failed to write config file", Some(path.to_path_buf()))
    }
}
