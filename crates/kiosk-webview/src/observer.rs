//! Observer interface for per-view page events.

use crate::handle::ViewHandle;

/// Receives page events from one view.
///
/// Attached by the registry when the view is created. Backends call it
/// from engine callbacks, so implementations must only record the event
/// and never reach back into the registry.
pub trait ViewObserver: Send + Sync {
    fn on_url_changed(&self, handle: ViewHandle, url: &str);
    fn on_title_changed(&self, handle: ViewHandle, title: &str);
    fn on_load_progress(&self, handle: ViewHandle, percent: u8);
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl ViewObserver for NullObserver {
    fn on_url_changed(&self, _handle: ViewHandle, _url: &str) {}
    fn on_title_changed(&self, _handle: ViewHandle, _title: &str) {}
    fn on_load_progress(&self, _handle: ViewHandle, _percent: u8) {}
}
