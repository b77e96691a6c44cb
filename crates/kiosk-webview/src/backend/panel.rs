//! Child web view hosting the keyboard panel UI.

use std::sync::Arc;

use kiosk_common::{Color, Geometry};
use serde_json::json;
use tracing::{debug, info};
use wry::raw_window_handle::HasWindowHandle;

use crate::content::ContentProvider;
use crate::error::WebViewError;
use crate::events::{EventOrigin, EventSink, PageLoadState, WebViewEvent};
use crate::ipc::{js_dispatch_message, INPUT_FOCUS_KIND, PANEL_INIT_SCRIPT};
use crate::overlay::PanelSurface;

use super::handlers::{with_content, with_ipc_to_sink};
use super::{geometry_to_wry, BrowsingProfile};

pub struct WryPanel {
    webview: wry::WebView,
}

impl WryPanel {
    /// Build the panel hidden; the overlay controller shows it.
    pub fn new<W: HasWindowHandle>(
        window: &W,
        profile: &mut BrowsingProfile,
        url: &str,
        sink: &EventSink,
        content: Option<&Arc<ContentProvider>>,
    ) -> Result<Self, WebViewError> {
        let mut builder = profile
            .builder()
            .with_url(url)
            .with_bounds(geometry_to_wry(Geometry::default()))
            .with_transparent(true)
            .with_visible(false)
            .with_background_color(Color::TRANSPARENT.to_tuple())
            .with_initialization_script(PANEL_INIT_SCRIPT);

        builder = with_ipc_to_sink(builder, sink, EventOrigin::Panel);
        builder = with_content(builder, content);

        let load_sink = sink.clone();
        builder = builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "panel page load");
            load_sink.push(WebViewEvent::PageLoad {
                origin: EventOrigin::Panel,
                state,
                url,
            });
        });

        let webview = builder.build_as_child(window)?;
        info!(url, "keyboard panel created");
        Ok(Self { webview })
    }
}

impl PanelSurface for WryPanel {
    fn set_visible(&mut self, visible: bool) -> Result<(), WebViewError> {
        self.webview.set_visible(visible)?;
        Ok(())
    }

    fn set_rect(&mut self, rect: Geometry) -> Result<(), WebViewError> {
        self.webview.set_bounds(geometry_to_wry(rect))?;
        Ok(())
    }

    fn set_width_property(&mut self, width: u32) -> Result<(), WebViewError> {
        let script = js_dispatch_message("panel", "set_width", &json!({ "width": width }));
        self.webview.evaluate_script(&script)?;
        Ok(())
    }

    fn set_input_focus(&mut self, focused: bool) -> Result<(), WebViewError> {
        let script = js_dispatch_message("panel", INPUT_FOCUS_KIND, &json!({ "focused": focused }));
        self.webview.evaluate_script(&script)?;
        Ok(())
    }
}
