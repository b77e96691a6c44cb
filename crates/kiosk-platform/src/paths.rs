use std::fs;
use std::path::PathBuf;

use kiosk_common::PlatformError;

const APP_NAME: &str = "kiosk";

/// Returns the platform-specific configuration directory.
///
/// - Linux: `$XDG_CONFIG_HOME/kiosk` (defaults to `~/.config/kiosk`)
/// - macOS: `~/Library/Application Support/kiosk`
/// - Windows: `%APPDATA%\kiosk`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))
}

/// Returns the platform-specific data directory.
///
/// - Linux: `$XDG_DATA_HOME/kiosk` (defaults to `~/.local/share/kiosk`)
/// - macOS: `~/Library/Application Support/kiosk`
/// - Windows: `%APPDATA%\kiosk`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    dirs::data_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))
}

/// Storage for the shared browsing profile (cookies, local storage, cache).
pub fn profile_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("profile"))
}

/// Returns the path to the log directory, `data_dir()/logs`.
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// Returns the path to the crash report directory, `log_dir()/crash-reports`.
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}

/// Creates all kiosk directories if they do not already exist.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    let dirs = [config_dir()?, data_dir()?, profile_dir()?, crash_report_dir()?];
    for dir in &dirs {
        fs::create_dir_all(dir).map_err(|e| {
            PlatformError::PathError(format!("failed to create {}: {e}", dir.display()))
        })?;
    }
    Ok(())
}
