//! Application configuration file handling.
//!
//! TOML file under the platform config dir. Absent file means defaults;
//! a malformed file is an error the shell reports at startup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::fs::collections_dir;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Overrides the platform data directory for persisted collections.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Default tracing filter when RUST_LOG is not set (e.g. `tripnest=info`).
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Platform-default location of the config file.
    ///
    /// - macOS: ~/Library/Application Support/TripNest/config.toml
    /// - Windows: %APPDATA%\TripNest\config.toml
    /// - Linux: ~/.config/TripNest/config.toml
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Failed to get platform config directory")?;
        Ok(base.join("TripNest").join("config.toml"))
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("read config failed: {}", path.display()))
            }
        };

        toml::from_str(&content)
            .with_context(|| format!("parse config failed: {}", path.display()))
    }

    /// Where persisted selection collections live, honoring the override.
    pub fn collections_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.join("collections")),
            None => collections_dir(),
        }
    }
}
