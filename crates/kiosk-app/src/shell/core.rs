//! KioskShell struct definition and constructor.

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::window::Window;

use kiosk_config::KioskConfig;
use kiosk_webview::{EventSink, WryPanel, WryViewFactory};

use super::state::ShellState;

/// How often web view events are drained.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

pub(super) type WryShellState = ShellState<WryViewFactory<Window>, WryPanel>;

/// Top-level application state.
pub struct KioskShell {
    pub(super) config: KioskConfig,

    // Declared before `window` so every child view is dropped first.
    pub(super) state: Option<WryShellState>,
    pub(super) window: Option<Arc<Window>>,

    /// Filled by web view callbacks, drained on each poll.
    pub(super) sink: EventSink,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl KioskShell {
    pub fn new(config: KioskConfig) -> Self {
        Self {
            config,
            state: None,
            window: None,
            sink: EventSink::new(),
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
