//! The control channel: remote calls from hosted content in, page
//! notifications out.
//!
//! Every request is a pass-through to the registry or to one looked-up
//! view. Requests naming a handle that does not resolve are dropped
//! without a reply or an error.

mod notify;
mod request;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use kiosk_common::{Color, Geometry};
use serde_json::json;
use tracing::{debug, warn};

use crate::handle::ViewHandle;
use crate::ipc::IpcMessage;
use crate::registry::ViewRegistry;
use crate::widget::{ViewFactory, ViewWidget};

pub use notify::{Notification, NotificationQueue};
pub use request::{is_control_kind, ControlCall, ControlRequest, CONTROL_KINDS};

/// Name the channel is published under in every hosted page (`window.main`).
pub const CHANNEL_NAME: &str = "main";

/// Page background used when a view is switched back to opaque.
pub const DEFAULT_PAGE_BACKGROUND: Color = Color::WHITE;

/// Owns the registry and services control-channel calls against it.
pub struct ControlBridge<F: ViewFactory> {
    registry: ViewRegistry<F>,
    notifications: NotificationQueue,
}

impl<F: ViewFactory> ControlBridge<F> {
    pub fn new(factory: F) -> Self {
        Self {
            registry: ViewRegistry::new(factory),
            notifications: NotificationQueue::new(),
        }
    }

    pub fn registry(&self) -> &ViewRegistry<F> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ViewRegistry<F> {
        &mut self.registry
    }

    /// Handle one raw IPC body posted by the view `caller`.
    pub fn handle_ipc(&mut self, caller: ViewHandle, body: &str) {
        let Some(msg) = IpcMessage::from_json(body) else {
            warn!(%caller, body_len = body.len(), "control call rejected: failed to parse");
            return;
        };
        self.handle_message(caller, msg);
    }

    /// Handle an already parsed message posted by `caller`.
    pub fn handle_message(&mut self, caller: ViewHandle, msg: IpcMessage) {
        if !is_control_kind(&msg.kind) {
            warn!(%caller, kind = %msg.kind, "control call rejected: unknown kind");
            return;
        }

        let call = match ControlCall::from_ipc(&msg) {
            Ok(call) => call,
            Err(e) => {
                warn!(%caller, kind = %msg.kind, error = %e, "control call rejected");
                return;
            }
        };

        debug!(%caller, kind = %msg.kind, "control call dispatched");
        let created = self.dispatch(call.request.clone());

        if let (ControlRequest::CreateView, Some(call_id)) = (&call.request, call.call_id) {
            self.reply(caller, call_id, created);
        }
    }

    /// Apply one request. Returns the new handle for `CreateView`.
    pub fn dispatch(&mut self, request: ControlRequest) -> Option<ViewHandle> {
        match request {
            ControlRequest::CreateView => return self.create_view(),
            ControlRequest::DestroyView { handle } => self.destroy_view(handle),
            ControlRequest::Navigate { handle, url } => self.navigate(handle, &url),
            ControlRequest::SetGeometry { handle, geometry } => self.set_geometry(handle, geometry),
            ControlRequest::SetVisible { handle, visible } => self.set_visible(handle, visible),
            ControlRequest::SetTransparentBackground {
                handle,
                transparent,
            } => self.set_transparent_background(handle, transparent),
            ControlRequest::StackUnder { top, under } => self.stack_under(top, under),
            ControlRequest::RaiseToTop { handle } => self.raise_to_top(handle),
        }
        None
    }

    /// Create a view whose page events are reported on the channel.
    pub fn create_view(&mut self) -> Option<ViewHandle> {
        let observer = Arc::new(self.notifications.clone());
        match self.registry.create(observer) {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::error!(error = %e, "failed to create view");
                None
            }
        }
    }

    pub fn destroy_view(&mut self, handle: ViewHandle) {
        self.registry.destroy(handle);
    }

    pub fn navigate(&mut self, handle: ViewHandle, url: &str) {
        self.with_view(handle, "navigate", |view| view.set_url(url));
    }

    pub fn set_geometry(&mut self, handle: ViewHandle, geometry: Geometry) {
        self.with_view(handle, "set_geometry", |view| view.set_geometry(geometry));
    }

    pub fn set_visible(&mut self, handle: ViewHandle, visible: bool) {
        self.with_view(handle, "set_visible", |view| view.set_visible(visible));
    }

    /// Transparent: no opaque fill and a fully transparent page.
    /// Opaque: fill on and the default page background.
    pub fn set_transparent_background(&mut self, handle: ViewHandle, transparent: bool) {
        self.with_view(handle, "set_transparent_background", |view| {
            if transparent {
                view.set_opaque_fill(false)?;
                view.set_page_background(Color::TRANSPARENT)
            } else {
                view.set_opaque_fill(true)?;
                view.set_page_background(DEFAULT_PAGE_BACKGROUND)
            }
        });
    }

    pub fn stack_under(&mut self, top: ViewHandle, under: ViewHandle) {
        if !self.registry.stack_under(top, under) {
            debug!(%top, %under, "stack_under ignored: unresolved handle");
        }
    }

    pub fn raise_to_top(&mut self, handle: ViewHandle) {
        if !self.registry.raise_to_top(handle) {
            debug!(%handle, "raise_to_top ignored: unresolved handle");
        }
    }

    /// Deliver queued notifications to every live view.
    ///
    /// Events raised before their view was destroyed are still delivered.
    /// Returns how many notifications went out.
    pub fn flush_notifications(&mut self) -> usize {
        let mut delivered = 0;
        for notification in self.notifications.drain() {
            let payload = notification.payload();
            for (handle, view) in self.registry.iter() {
                if let Err(e) = view.post_message(notification.kind(), &payload) {
                    warn!(
                        %handle,
                        source = %notification.handle(),
                        kind = notification.kind(),
                        error = %e,
                        "failed to deliver notification"
                    );
                }
            }
            delivered += 1;
        }
        delivered
    }

    fn reply(&self, caller: ViewHandle, call_id: u64, handle: Option<ViewHandle>) {
        let Some(view) = self.registry.lookup(caller) else {
            debug!(%caller, call_id, "reply dropped: caller is gone");
            return;
        };
        let payload = json!({ "call_id": call_id, "handle": handle });
        if let Err(e) = view.post_message("reply", &payload) {
            warn!(%caller, call_id, error = %e, "failed to deliver reply");
        }
    }

    /// Run `op` on a resolved view; unresolved handles are ignored.
    fn with_view(
        &mut self,
        handle: ViewHandle,
        op: &'static str,
        f: impl FnOnce(&mut F::View) -> Result<(), crate::WebViewError>,
    ) {
        let Some(view) = self.registry.lookup_mut(handle) else {
            debug!(%handle, op, "ignored: unresolved handle");
            return;
        };
        if let Err(e) = f(view) {
            warn!(%handle, op, error = %e, "view operation failed");
        }
    }
}
