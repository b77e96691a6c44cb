//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Kiosk Shell Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Kiosk"
# transparent = true
# width = 1280           # 200-7680
# height = 800           # 200-4320
# decorations = true

[main_view]
# start_url = "kiosk://localhost/index.html"
# width = 1280           # 1-7680
# height = 800           # 1-4320

[keyboard]
# enabled = true
# panel_url = "kiosk://localhost/keyboard/index.html"
# initial_height = 280   # 0-2000

[permissions]
# Hosts whose camera/microphone/geolocation requests are granted.
# allowed_hosts = ["localhost"]

[profile]
# data_dir = "/var/lib/kiosk/profile"
# devtools = false
# user_agent = "Kiosk/0.1"

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
