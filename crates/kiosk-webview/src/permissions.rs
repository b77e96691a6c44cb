//! Origin-based feature permission policy.
//!
//! Any feature request (microphone, camera, geolocation, notifications) is
//! decided from the requesting origin alone: hosts on the allow-list are
//! granted, everything else is denied. Nothing is prompted or remembered.

use tracing::info;
use wry::http::Uri;

/// Outcome of a permission decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionVerdict {
    Granted,
    Denied,
}

impl PermissionVerdict {
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Allow-list of origin hosts that get every feature they ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionPolicy {
    allowed_hosts: Vec<String>,
}

impl PermissionPolicy {
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed_hosts: hosts
                .into_iter()
                .map(|h| h.as_ref().trim().to_ascii_lowercase())
                .filter(|h| !h.is_empty())
                .collect(),
        }
    }

    pub fn localhost_only() -> Self {
        Self::new(["localhost"])
    }

    pub fn allowed_hosts(&self) -> &[String] {
        &self.allowed_hosts
    }

    /// Decide a request raised by a page at `origin` (e.g. `http://localhost:1234`).
    pub fn decide(&self, origin: &str) -> PermissionVerdict {
        let verdict = match origin_host(origin) {
            Some(host) if self.allowed_hosts.iter().any(|h| *h == host) => {
                PermissionVerdict::Granted
            }
            _ => PermissionVerdict::Denied,
        };
        info!(origin, ?verdict, "feature permission decided");
        verdict
    }
}

impl Default for PermissionPolicy {
    fn default() -> Self {
        Self::localhost_only()
    }
}

/// Lowercased host of an origin or URL, if it has one.
pub fn origin_host(origin: &str) -> Option<String> {
    let uri: Uri = origin.trim().parse().ok()?;
    uri.host().map(|h| h.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localhost_origin_is_granted() {
        let policy = PermissionPolicy::default();
        assert_eq!(policy.decide("http://localhost:1234"), PermissionVerdict::Granted);
        assert_eq!(policy.decide("https://LOCALHOST/app"), PermissionVerdict::Granted);
    }

    #[test]
    fn other_origins_are_denied() {
        let policy = PermissionPolicy::default();
        assert_eq!(policy.decide("http://example.com"), PermissionVerdict::Denied);
        assert_eq!(policy.decide("http://localhost.evil.com"), PermissionVerdict::Denied);
        assert_eq!(policy.decide("http://127.0.0.1:8080"), PermissionVerdict::Denied);
    }

    #[test]
    fn unparseable_origins_are_denied() {
        let policy = PermissionPolicy::default();
        assert_eq!(policy.decide(""), PermissionVerdict::Denied);
        assert_eq!(policy.decide("not a url"), PermissionVerdict::Denied);
    }

    #[test]
    fn custom_allow_list() {
        let policy = PermissionPolicy::new(["Kiosk.Local", " ", "localhost"]);
        assert_eq!(policy.allowed_hosts(), ["kiosk.local", "localhost"]);
        assert!(policy.decide("https://kiosk.local").is_granted());
        assert!(policy.decide("http://localhost:3000").is_granted());
        assert!(!policy.decide("https://example.com").is_granted());
    }

    #[test]
    fn empty_allow_list_denies_everything() {
        let policy = PermissionPolicy::new(Vec::<String>::new());
        assert!(!policy.decide("http://localhost").is_granted());
    }

    #[test]
    fn origin_host_extraction() {
        assert_eq!(origin_host("http://localhost:1234").as_deref(), Some("localhost"));
        assert_eq!(origin_host("kiosk://localhost/index.html").as_deref(), Some("localhost"));
        assert_eq!(origin_host(""), None);
    }
}
