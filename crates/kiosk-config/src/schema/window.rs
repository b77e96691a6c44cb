//! Window and main view configuration types.

use serde::{Deserialize, Serialize};

/// Top-level shell window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title shown until the main view reports a document title.
    pub title: String,
    /// Translucent window background, so transparent views show through.
    pub transparent: bool,
    /// Initial inner width in logical pixels (valid range: 200-7680).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 200-4320).
    pub height: u32,
    pub decorations: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Kiosk".into(),
            transparent: true,
            width: 1280,
            height: 800,
            decorations: true,
        }
    }
}

/// The first view, created at startup with handle 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MainViewConfig {
    pub start_url: String,
    /// Initial view width in logical pixels (valid range: 1-7680).
    pub width: u32,
    /// Initial view height in logical pixels (valid range: 1-4320).
    pub height: u32,
}

impl Default for MainViewConfig {
    fn default() -> Self {
        Self {
            start_url: "kiosk://localhost/index.html".into(),
            width: 1280,
            height: 800,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
