//! Embedded web views and the control channel that drives them.
//!
//! Hosted content talks to the shell through a single named channel
//! (`window.main`) and can create, move, resize, restyle and restack
//! other views in the same window.
//!
//! - [`registry`]: handle-keyed ownership of view widgets
//! - [`bridge`]: the control channel (requests in, notifications out)
//! - [`overlay`]: show/hide and layout of the on-screen keyboard panel
//! - [`permissions`]: origin-based feature permission policy
//! - [`backend`]: the `wry` implementation of the widget traits

pub mod backend;
pub mod bridge;
pub mod content;
pub mod error;
pub mod events;
pub mod handle;
pub mod ipc;
pub mod observer;
pub mod overlay;
pub mod permissions;
pub mod registry;
pub mod widget;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{BrowsingProfile, WryPanel, WryView, WryViewFactory};
pub use bridge::{ControlBridge, ControlRequest, Notification, NotificationQueue, CHANNEL_NAME};
pub use content::ContentProvider;
pub use error::WebViewError;
pub use events::{EventOrigin, EventSink, PageLoadState, WebViewEvent};
pub use handle::ViewHandle;
pub use ipc::{IpcMessage, INPUT_FOCUS_KIND, INPUT_KEY_KIND, PANEL_KEY_KIND};
pub use observer::ViewObserver;
pub use overlay::{
    input_focus_from_ipc, OverlayController, OverlayState, PanelKey, PanelSignal, PanelSurface,
};
pub use permissions::{PermissionPolicy, PermissionVerdict};
pub use registry::ViewRegistry;
pub use widget::{ViewFactory, ViewWidget};
