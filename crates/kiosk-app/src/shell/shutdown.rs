//! Graceful shutdown: destroy views, release the panel, drop the window.

use super::core::KioskShell;

impl KioskShell {
    /// Perform graceful shutdown.
    ///
    /// Every registry view is released before the keyboard panel, and both
    /// before the window they are children of.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(mut state) = self.state.take() {
            let live = state.bridge().registry().len();
            if let Some(panel) = state.teardown() {
                drop(panel);
                tracing::debug!("Keyboard panel released");
            }
            tracing::debug!(live, "Views released");
        }

        // Events queued by views that no longer exist.
        let _ = self.sink.drain();
        self.window = None;
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}
