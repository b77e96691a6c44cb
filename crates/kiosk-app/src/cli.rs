use std::path::PathBuf;

use clap::Parser;

use kiosk_config::KioskConfig;

/// Kiosk: a window of embedded web views driven from the page itself.
#[derive(Parser, Debug, Default)]
#[command(name = "kiosk", version, about)]
pub struct Args {
    /// Start URL for the main view.
    #[arg(long)]
    pub url: Option<String>,

    /// Initial width of the main view, in logical pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial height of the main view, in logical pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Apply `--url`, `--width` and `--height` on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut KioskConfig) {
        if let Some(url) = &self.url {
            config.main_view.start_url = url.clone();
        }
        if let Some(width) = self.width {
            config.main_view.width = width;
        }
        if let Some(height) = self.height {
            config.main_view.height = height;
        }
    }

    /// EnvFilter directive: the flag, then the config level, then `kiosk=info`.
    pub fn log_directive(&self, config: Option<&KioskConfig>) -> String {
        match (&self.log_level, config) {
            (Some(level), _) if level.contains('=') => level.clone(),
            (Some(level), _) => format!("kiosk={level}"),
            (None, Some(config)) => format!("kiosk={}", config.logging.level.as_directive()),
            (None, None) => "kiosk=info".to_string(),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
