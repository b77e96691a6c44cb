//! Feature permission configuration.

use serde::{Deserialize, Serialize};

/// Hosts whose permission requests (microphone, geolocation, ...) are
/// granted without prompting. Everything else is denied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionsConfig {
    pub allowed_hosts: Vec<String>,
}

impl Default for PermissionsConfig {
    fn default() -> Self {
        Self {
            allowed_hosts: vec!["localhost".into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_empty_list_denies_everything() {
        let p: PermissionsConfig = toml::from_str("allowed_hosts = []").unwrap();
        assert!(p.allowed_hosts.is_empty());
    }

    #[test]
    fn custom_hosts_replace_default() {
        let p: PermissionsConfig =
            toml::from_str(r#"allowed_hosts = ["kiosk.local", "127.0.0.1"]"#).unwrap();
        assert_eq!(p.allowed_hosts, vec!["kiosk.local", "127.0.0.1"]);
    }
}
