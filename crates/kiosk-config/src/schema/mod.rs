//! Configuration schema types for the kiosk shell.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching stock behavior.

mod keyboard;
mod permissions;
mod system;
mod window;

pub use keyboard::*;
pub use permissions::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the kiosk shell.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KioskConfig {
    pub window: WindowConfig,
    pub main_view: MainViewConfig,
    pub keyboard: KeyboardConfig,
    pub permissions: PermissionsConfig,
    pub profile: ProfileConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
