pub mod errors;
pub mod types;

pub use errors::{ConfigError, KioskError, PlatformError};
pub use types::{Color, Geometry};

pub type Result<T> = std::result::Result<T, KioskError>;
