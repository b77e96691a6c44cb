//! Error type for webview operations.

#[derive(Debug, thiserror::Error)]
pub enum WebViewError {
    #[error(transparent)]
    Engine(#[from] wry::Error),

    #[error("invalid IPC message: {0}")]
    InvalidMessage(String),

    #[error("unknown IPC kind: {0}")]
    UnknownKind(String),
}

impl From<WebViewError> for kiosk_common::KioskError {
    fn from(e: WebViewError) -> Self {
        kiosk_common::KioskError::WebView(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = WebViewError::InvalidMessage("missing field `handle`".into());
        assert_eq!(err.to_string(), "invalid IPC message: missing field `handle`");

        let err = WebViewError::UnknownKind("eval".into());
        assert_eq!(err.to_string(), "unknown IPC kind: eval");
    }

    #[test]
    fn converts_into_kiosk_error() {
        let err: kiosk_common::KioskError = WebViewError::UnknownKind("eval".into()).into();
        assert!(matches!(err, kiosk_common::KioskError::WebView(_)));
    }
}
