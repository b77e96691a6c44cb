use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("window error: {0}")]
    WindowError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum KioskError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("main_view.width = 0".into());
        assert_eq!(err.to_string(), "config validation error: main_view.width = 0");
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::WindowError("no display".into());
        assert_eq!(err.to_string(), "window error: no display");

        let err = PlatformError::NotSupported("wayland child webviews".into());
        assert_eq!(err.to_string(), "not supported: wayland child webviews");
    }

    #[test]
    fn kiosk_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: KioskError = config_err.into();
        assert!(matches!(err, KioskError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn kiosk_error_from_platform() {
        let err: KioskError = PlatformError::PathError("no home".into()).into();
        assert!(matches!(err, KioskError::Platform(_)));
        assert!(err.to_string().contains("no home"));
    }

    #[test]
    fn kiosk_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: KioskError = io_err.into();
        assert!(matches!(err, KioskError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn kiosk_error_other_variants() {
        let err = KioskError::WebView("build failed".into());
        assert_eq!(err.to_string(), "webview error: build failed");

        let err = KioskError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
