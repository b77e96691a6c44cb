//! Tests for config validation.

use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate(&KioskConfig::default()).is_ok());
}

#[test]
fn zero_main_view_width_is_rejected() {
    let mut config = KioskConfig::default();
    config.main_view.width = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("main_view.width = 0"), "{err}");
}

#[test]
fn tiny_window_is_rejected() {
    let mut config = KioskConfig::default();
    config.window.height = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.height"), "{err}");
}

#[test]
fn empty_start_url_is_rejected() {
    let mut config = KioskConfig::default();
    config.main_view.start_url = "   ".into();
    assert!(validate(&config).is_err());
}

#[test]
fn empty_panel_url_only_matters_when_enabled() {
    let mut config = KioskConfig::default();
    config.keyboard.panel_url.clear();
    assert!(validate(&config).is_err());

    config.keyboard.enabled = false;
    assert!(validate(&config).is_ok());
}

#[test]
fn allowed_hosts_must_be_bare_hosts() {
    let mut config = KioskConfig::default();
    config.permissions.allowed_hosts = vec!["http://localhost/".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("not a bare host"), "{err}");

    config.permissions.allowed_hosts = vec!["localhost".into(), "kiosk.local".into()];
    assert!(validate(&config).is_ok());
}

#[test]
fn multiple_errors_are_joined() {
    let mut config = KioskConfig::default();
    config.main_view.width = 0;
    config.main_view.height = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("main_view.width"));
    assert!(err.contains("main_view.height"));
    assert!(err.contains("; "));
}
