//! Main-view title propagation to the window.

use std::sync::{Arc, Mutex};

use kiosk_webview::{ViewHandle, ViewObserver};

use super::core::KioskShell;

/// Latest page title of the main view, waiting to be applied.
#[derive(Debug, Clone, Default)]
pub(super) struct TitleSlot(Arc<Mutex<Option<String>>>);

impl TitleSlot {
    pub(super) fn set(&self, title: &str) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(title.to_string());
        }
    }

    pub(super) fn take(&self) -> Option<String> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}

/// Observer for the main view: its title becomes the window title.
/// Its other page events are not published on the control channel.
pub(super) struct TitleForwarder {
    slot: TitleSlot,
}

impl TitleForwarder {
    pub(super) fn new(slot: TitleSlot) -> Self {
        Self { slot }
    }
}

impl ViewObserver for TitleForwarder {
    fn on_url_changed(&self, handle: ViewHandle, url: &str) {
        tracing::debug!(%handle, url, "main view navigated");
    }

    fn on_title_changed(&self, _handle: ViewHandle, title: &str) {
        self.slot.set(title);
    }

    fn on_load_progress(&self, _handle: ViewHandle, _percent: u8) {}
}

/// Window title for a page title; blank pages fall back to the configured one.
pub(super) fn window_title(page_title: &str, fallback: &str) -> String {
    let trimmed = page_title.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

impl KioskShell {
    /// Reflect the main view's page title in the window title.
    pub(super) fn update_window_title(&self, page_title: &str) {
        let Some(ref window) = self.window else {
            return;
        };
        window.set_title(&window_title(page_title, &self.config.window.title));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_config::KioskConfig;

    #[test]
    fn forwarder_keeps_latest_title() {
        let slot = TitleSlot::default();
        let fwd = TitleForwarder::new(slot.clone());
        fwd.on_title_changed(ViewHandle(0), "Loading");
        fwd.on_title_changed(ViewHandle(0), "Home");
        fwd.on_load_progress(ViewHandle(0), 100);
        assert_eq!(slot.take().as_deref(), Some("Home"));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn update_title_without_window_does_not_panic() {
        let shell = KioskShell::new(KioskConfig::default());
        shell.update_window_title("Home");
    }

    #[test]
    fn blank_titles_fall_back() {
        assert_eq!(window_title("  ", "Kiosk"), "Kiosk");
        assert_eq!(window_title(" Home ", "Kiosk"), "Home");
    }
}
