use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the TripNest application data root directory.
///
/// # Platform-specific Paths
/// - macOS: ~/Library/Application Support/TripNest
/// - Windows: %APPDATA%\TripNest
/// - Linux: $XDG_DATA_HOME/TripNest or ~/.local/share/TripNest
///
/// This function does not create directories; the caller decides when to.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir =
        get_platform_data_dir().context("Failed to get platform-specific data directory")?;

    Ok(base_dir.join("TripNest"))
}

/// Directory holding the persisted selection collections
/// (comparison tray, favorites).
pub fn collections_dir() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("collections"))
}

fn get_platform_data_dir() -> Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        // Prefer XDG_DATA_HOME, fall back to ~/.local/share
        if let Some(xdg_data_home) = std::env::var_os("XDG_DATA_HOME") {
            Ok(PathBuf::from(xdg_data_home))
        } else {
            dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to get Linux data directory"))
        }
    }

    #[cfg(not(target_os = "linux"))]
    {
        dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to get platform data directory"))
    }
}
