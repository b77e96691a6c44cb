//! System configuration types: browsing profile and logging.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Shared browsing profile used by every view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Storage directory override. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,
    /// Enable web inspector (always on in debug builds).
    pub devtools: bool,
    pub user_agent: Option<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            devtools: cfg!(debug_assertions),
            user_agent: None,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive string understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_lowercase() {
        let l: LoggingConfig = toml::from_str(r#"level = "debug""#).unwrap();
        assert_eq!(l.level, LogLevel::Debug);
        assert_eq!(l.level.as_directive(), "debug");
    }

    #[test]
    fn log_level_rejects_unknown() {
        assert!(toml::from_str::<LoggingConfig>(r#"level = "loud""#).is_err());
    }

    #[test]
    fn profile_data_dir_override() {
        let p: ProfileConfig = toml::from_str(r#"data_dir = "/var/lib/kiosk""#).unwrap();
        assert_eq!(p.data_dir, Some(PathBuf::from("/var/lib/kiosk")));
    }
}
