//! Adaptive polling of web view events.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::{KioskShell, POLL_INTERVAL};

impl KioskShell {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            pump_platform_events();
            self.poll_webview_events();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Route drained events and apply the main view's latest title.
    pub(super) fn poll_webview_events(&mut self) {
        let events = self.sink.drain();
        let Some(state) = self.state.as_mut() else {
            return;
        };

        let delivered = state.process(events);
        if delivered > 0 {
            tracing::debug!(delivered, "notifications delivered");
        }

        if let Some(title) = state.take_title() {
            self.update_window_title(&title);
        }
    }
}

/// WebKitGTK runs on the GTK main loop, which winit does not drive.
#[cfg(target_os = "linux")]
fn pump_platform_events() {
    while gtk::events_pending() {
        gtk::main_iteration_do(false);
    }
}

#[cfg(not(target_os = "linux"))]
fn pump_platform_events() {}
