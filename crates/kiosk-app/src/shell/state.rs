//! Wiring between the event sink, the control bridge and the overlay.
//!
//! Kept free of winit so the routing can be tested with in-memory widgets.

use std::sync::Arc;

use kiosk_common::Geometry;
use kiosk_webview::{
    input_focus_from_ipc, ControlBridge, EventOrigin, IpcMessage, OverlayController,
    PageLoadState, PanelKey, PanelSignal, PanelSurface, ViewFactory, ViewHandle, ViewWidget,
    WebViewError, WebViewEvent, INPUT_KEY_KIND,
};
use tracing::{debug, info, warn};

use super::title::{TitleForwarder, TitleSlot};

pub(super) struct ShellState<F: ViewFactory, P: PanelSurface> {
    bridge: ControlBridge<F>,
    overlay: Option<OverlayController<P>>,
    main_view: Option<ViewHandle>,
    /// View whose editable element last reported focus; panel keys go here.
    focused_view: Option<ViewHandle>,
    title: TitleSlot,
}

impl<F: ViewFactory, P: PanelSurface> ShellState<F, P> {
    pub(super) fn new(factory: F, overlay: Option<OverlayController<P>>) -> Self {
        Self {
            bridge: ControlBridge::new(factory),
            overlay,
            main_view: None,
            focused_view: None,
            title: TitleSlot::default(),
        }
    }

    /// Install the overlay once its panel exists.
    pub(super) fn attach_overlay(&mut self, overlay: OverlayController<P>) {
        self.overlay = Some(overlay);
    }

    pub(super) fn factory_mut(&mut self) -> &mut F {
        self.bridge.registry_mut().factory_mut()
    }

    /// Create the first view: full window area, no opaque fill, visible.
    pub(super) fn open_main_view(
        &mut self,
        url: &str,
        width: u32,
        height: u32,
    ) -> Result<ViewHandle, WebViewError> {
        let observer = Arc::new(TitleForwarder::new(self.title.clone()));
        let registry = self.bridge.registry_mut();
        let handle = registry.create(observer)?;
        if let Some(view) = registry.lookup_mut(handle) {
            view.set_url(url)?;
            view.set_geometry(Geometry::new(0, 0, to_i32(width), to_i32(height)))?;
            view.set_opaque_fill(false)?;
            view.set_visible(true)?;
        }
        self.main_view = Some(handle);
        info!(%handle, url, width, height, "main view opened");
        Ok(handle)
    }

    /// Route drained events, then broadcast queued notifications.
    /// Returns how many notifications went out.
    pub(super) fn process(&mut self, events: Vec<WebViewEvent>) -> usize {
        for event in events {
            match event {
                WebViewEvent::IpcMessage {
                    origin: EventOrigin::View(handle),
                    body,
                } => self.handle_view_ipc(handle, &body),
                WebViewEvent::IpcMessage {
                    origin: EventOrigin::Panel,
                    body,
                } => self.handle_panel_ipc(&body),
                WebViewEvent::PageLoad {
                    origin: EventOrigin::Panel,
                    state: PageLoadState::Finished,
                    ..
                } => {
                    if let Some(overlay) = self.overlay.as_mut() {
                        overlay.panel_loaded();
                    }
                }
                WebViewEvent::PageLoad { origin, state, url } => {
                    debug!(?origin, ?state, url = %url, "page load event ignored");
                }
            }
        }
        self.bridge.flush_notifications()
    }

    /// Focus hints are the shell's own; everything else is a control call.
    fn handle_view_ipc(&mut self, caller: ViewHandle, body: &str) {
        let Some(msg) = IpcMessage::from_json(body) else {
            self.bridge.handle_ipc(caller, body);
            return;
        };
        match input_focus_from_ipc(&msg) {
            Some(focused) => self.input_focus_changed(caller, focused),
            None => self.bridge.handle_message(caller, msg),
        }
    }

    fn input_focus_changed(&mut self, caller: ViewHandle, focused: bool) {
        if focused {
            self.focused_view = Some(caller);
        } else if self.focused_view == Some(caller) {
            self.focused_view = None;
        } else {
            debug!(%caller, "stale blur ignored");
            return;
        }
        debug!(%caller, focused, "input focus changed");
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.input_focus_changed(focused);
        }
    }

    fn handle_panel_ipc(&mut self, body: &str) {
        let Some(msg) = IpcMessage::from_json(body) else {
            warn!(body_len = body.len(), "panel message rejected");
            return;
        };
        if let Some(key) = PanelKey::from_ipc(&msg) {
            self.type_key(&key);
            return;
        }
        let Some(overlay) = self.overlay.as_mut() else {
            return;
        };
        match PanelSignal::from_ipc(&msg) {
            Some(signal) => overlay.handle_signal(signal),
            None => warn!(kind = %msg.kind, "panel message rejected"),
        }
    }

    /// Send a panel key to the focused view. A view that went away since it
    /// reported focus takes the focus with it.
    fn type_key(&mut self, key: &PanelKey) {
        let Some(target) = self.focused_view else {
            debug!(?key, "panel key dropped: no focused input");
            return;
        };
        match self.bridge.registry().lookup(target) {
            Some(view) => {
                if let Err(e) = view.post_message(INPUT_KEY_KIND, &key.payload()) {
                    warn!(%target, error = %e, "failed to type panel key");
                }
            }
            None => {
                debug!(%target, "focused view is gone");
                self.focused_view = None;
                if let Some(overlay) = self.overlay.as_mut() {
                    overlay.input_focus_changed(false);
                }
            }
        }
    }

    /// Only the overlay follows the window; views keep the geometry they were given.
    pub(super) fn window_resized(&mut self, width: u32, height: u32) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.window_resized(width, height);
        }
    }

    pub(super) fn take_title(&self) -> Option<String> {
        self.title.take()
    }

    pub(super) fn main_view(&self) -> Option<ViewHandle> {
        self.main_view
    }

    pub(super) fn bridge(&self) -> &ControlBridge<F> {
        &self.bridge
    }

    pub(super) fn overlay(&self) -> Option<&OverlayController<P>> {
        self.overlay.as_ref()
    }

    /// Release every view, then hand back the panel for the window to drop.
    pub(super) fn teardown(&mut self) -> Option<P> {
        self.bridge.registry_mut().destroy_all();
        self.main_view = None;
        self.focused_view = None;
        self.overlay.take().map(OverlayController::into_panel)
    }
}

fn to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
