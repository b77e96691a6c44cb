//! Bundled assets served through the `kiosk://` custom protocol.
//!
//! `kiosk://localhost/keyboard/index.html` resolves to
//! `{base_dir}/keyboard/index.html`, so start pages and the keyboard panel
//! load without a local HTTP server.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tracing::warn;
use wry::http::Response;

/// Scheme name registered on every view.
pub const SCHEME: &str = "kiosk";

/// Serves files from a base directory.
pub struct ContentProvider {
    base_dir: PathBuf,
}

impl ContentProvider {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve a request path to its MIME type and bytes.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.split(['?', '#']).next().unwrap_or("").trim_start_matches('/');

        let file_path = self.base_dir.join(clean);

        // Canonicalize both sides so `..` and symlinks cannot escape the base.
        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) || !canonical_file.is_file() {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Borrowed(mime), Cow::Owned(data)))
    }

    /// Build the protocol response for a full `kiosk://` URI.
    pub fn respond(&self, uri: &str) -> Response<Cow<'static, [u8]>> {
        let path = path_from_uri(uri);
        let (status, mime, body) = match self.resolve(path) {
            Some((mime, data)) => (200, mime.into_owned(), data.into_owned()),
            None => {
                warn!(path, "custom protocol: asset not found");
                (404, "text/plain".to_string(), b"Not Found".to_vec())
            }
        };
        Response::builder()
            .status(status)
            .header("Content-Type", mime)
            .header("Access-Control-Allow-Origin", "*")
            .body(Cow::Owned(body))
            .unwrap_or_else(|_| Response::new(Cow::Borrowed(&b""[..])))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Strip the scheme and host from a `kiosk://` URI.
pub fn path_from_uri(uri: &str) -> &str {
    let prefix = format!("{SCHEME}://");
    let Some(rest) = uri.strip_prefix(prefix.as_str()) else {
        return uri;
    };
    match rest.find('/') {
        Some(idx) => &rest[idx + 1..],
        None => "",
    }
}

fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("wasm") => "application/wasm",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("webp") => "image/webp",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
