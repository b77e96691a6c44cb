//! Full configuration validation.
//!
//! Each check pushes a message into a shared list; the orchestrator folds
//! them into a single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::KioskConfig;
use kiosk_common::ConfigError;

use helpers::validate_range;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &KioskConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_window(&mut errors, config);
    validate_main_view(&mut errors, config);
    validate_keyboard(&mut errors, config);
    validate_permissions(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_window(errors: &mut Vec<String>, config: &KioskConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 7680);
    validate_range(errors, "window.height", config.window.height, 200, 4320);
}

fn validate_main_view(errors: &mut Vec<String>, config: &KioskConfig) {
    validate_range(errors, "main_view.width", config.main_view.width, 1, 7680);
    validate_range(errors, "main_view.height", config.main_view.height, 1, 4320);
    if config.main_view.start_url.trim().is_empty() {
        errors.push("main_view.start_url must not be empty".into());
    }
}

fn validate_keyboard(errors: &mut Vec<String>, config: &KioskConfig) {
    validate_range(
        errors,
        "keyboard.initial_height",
        config.keyboard.initial_height,
        0,
        2000,
    );
    if config.keyboard.enabled && config.keyboard.panel_url.trim().is_empty() {
        errors.push("keyboard.panel_url must not be empty when the keyboard is enabled".into());
    }
}

fn validate_permissions(errors: &mut Vec<String>, config: &KioskConfig) {
    for host in &config.permissions.allowed_hosts {
        if host.is_empty() || host.contains('/') || host.contains(char::is_whitespace) {
            errors.push(format!("permissions.allowed_hosts entry {host:?} is not a bare host"));
        }
    }
}
