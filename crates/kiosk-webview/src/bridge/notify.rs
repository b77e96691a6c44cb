//! Outbound notifications queued by view observers.

use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::handle::ViewHandle;
use crate::observer::ViewObserver;

/// A notification delivered to hosted content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    UrlChanged { handle: ViewHandle, url: String },
    TitleChanged { handle: ViewHandle, title: String },
    LoadProgressChanged { handle: ViewHandle, percent: u8 },
}

impl Notification {
    /// The view the notification is about.
    pub fn handle(&self) -> ViewHandle {
        match self {
            Self::UrlChanged { handle, .. }
            | Self::TitleChanged { handle, .. }
            | Self::LoadProgressChanged { handle, .. } => *handle,
        }
    }

    /// Listener name on the JS side.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UrlChanged { .. } => "url_changed",
            Self::TitleChanged { .. } => "title_changed",
            Self::LoadProgressChanged { .. } => "load_progress_changed",
        }
    }

    pub fn payload(&self) -> serde_json::Value {
        match self {
            Self::UrlChanged { handle, url } => json!({ "handle": handle, "url": url }),
            Self::TitleChanged { handle, title } => json!({ "handle": handle, "title": title }),
            Self::LoadProgressChanged { handle, percent } => {
                json!({ "handle": handle, "percent": percent })
            }
        }
    }
}

/// Observer that queues notifications until the event loop flushes them.
///
/// Engine callbacks fire while the registry may be borrowed, so delivery
/// is deferred to the next tick.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    pending: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, notification: Notification) {
        if let Ok(mut pending) = self.pending.lock() {
            pending.push(notification);
        }
    }

    /// Take every pending notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.pending.lock().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ViewObserver for NotificationQueue {
    fn on_url_changed(&self, handle: ViewHandle, url: &str) {
        self.push(Notification::UrlChanged {
            handle,
            url: url.to_string(),
        });
    }

    fn on_title_changed(&self, handle: ViewHandle, title: &str) {
        self.push(Notification::TitleChanged {
            handle,
            title: title.to_string(),
        });
    }

    fn on_load_progress(&self, handle: ViewHandle, percent: u8) {
        self.push(Notification::LoadProgressChanged {
            handle,
            percent: percent.min(100),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_preserves_order_and_drains() {
        let queue = NotificationQueue::new();
        queue.on_url_changed(ViewHandle(1), "http://localhost/a");
        queue.on_load_progress(ViewHandle(1), 0);
        queue.on_title_changed(ViewHandle(1), "A");
        assert_eq!(queue.len(), 3);

        let drained = queue.drain();
        assert_eq!(drained[0].kind(), "url_changed");
        assert_eq!(drained[1].kind(), "load_progress_changed");
        assert_eq!(drained[2].kind(), "title_changed");
        assert!(queue.is_empty());
    }

    #[test]
    fn clones_share_the_queue() {
        let queue = NotificationQueue::new();
        let observer = queue.clone();
        observer.on_title_changed(ViewHandle(4), "Docs");
        assert_eq!(
            queue.drain(),
            vec![Notification::TitleChanged {
                handle: ViewHandle(4),
                title: "Docs".into(),
            }]
        );
    }

    #[test]
    fn progress_is_clamped() {
        let queue = NotificationQueue::new();
        queue.on_load_progress(ViewHandle(0), 250);
        assert_eq!(
            queue.drain()[0].payload(),
            serde_json::json!({"handle": 0, "percent": 100})
        );
    }

    #[test]
    fn payload_shapes() {
        let n = Notification::UrlChanged {
            handle: ViewHandle(2),
            url: "kiosk://localhost/x.html".into(),
        };
        assert_eq!(n.handle(), ViewHandle(2));
        assert_eq!(
            n.payload(),
            serde_json::json!({"handle": 2, "url": "kiosk://localhost/x.html"})
        );
    }
}
