//! Events pushed by engine callbacks for the event loop to consume.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::handle::ViewHandle;

/// Which widget an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventOrigin {
    /// A registry-managed view.
    View(ViewHandle),
    /// The keyboard overlay panel.
    Panel,
}

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    /// An IPC message was received from JavaScript.
    IpcMessage { origin: EventOrigin, body: String },
    /// Page load state changed. Only the overlay panel reports these here;
    /// views report them through their observer.
    PageLoad {
        origin: EventOrigin,
        state: PageLoadState,
        url: String,
    },
}

/// Shared event queue filled by engine callbacks and drained once per tick.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: WebViewEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }

    /// Drain all pending events.
    pub fn drain(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }
}
