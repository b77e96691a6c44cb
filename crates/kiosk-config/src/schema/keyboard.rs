//! Virtual keyboard overlay configuration.

use serde::{Deserialize, Serialize};

/// The on-screen keyboard panel docked at the bottom of the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    pub enabled: bool,
    /// UI description loaded into the panel view.
    pub panel_url: String,
    /// Height used until the panel reports its own (valid range: 0-2000).
    pub initial_height: u32,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            panel_url: "kiosk://localhost/keyboard/index.html".into(),
            initial_height: 280,
        }
    }
}
