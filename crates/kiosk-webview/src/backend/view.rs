//! A registry-managed child web view.

use kiosk_common::{Color, Geometry};

use crate::bridge::CHANNEL_NAME;
use crate::error::WebViewError;
use crate::ipc::js_dispatch_message;
use crate::widget::ViewWidget;

use super::geometry_to_wry;

pub struct WryView {
    webview: wry::WebView,
    visible: bool,
}

impl WryView {
    pub(super) fn new(webview: wry::WebView) -> Self {
        Self {
            webview,
            visible: false,
        }
    }
}

impl ViewWidget for WryView {
    fn set_url(&mut self, url: &str) -> Result<(), WebViewError> {
        self.webview.load_url(url)?;
        Ok(())
    }

    fn set_geometry(&mut self, geometry: Geometry) -> Result<(), WebViewError> {
        self.webview.set_bounds(geometry_to_wry(geometry))?;
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), WebViewError> {
        self.webview.set_visible(visible)?;
        self.visible = visible;
        Ok(())
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    /// wry paints no fill layer of its own; what shows through is decided
    /// by the page background alone.
    fn set_opaque_fill(&mut self, _opaque: bool) -> Result<(), WebViewError> {
        Ok(())
    }

    fn set_page_background(&mut self, color: Color) -> Result<(), WebViewError> {
        self.webview.set_background_color(color.to_tuple())?;
        Ok(())
    }

    /// There is no z-order API; re-showing a child puts it back on top on
    /// the platforms we ship. Hidden views are left alone.
    fn bring_to_front(&mut self) -> Result<(), WebViewError> {
        if self.visible {
            self.webview.set_visible(false)?;
            self.webview.set_visible(true)?;
        }
        Ok(())
    }

    fn post_message(&self, kind: &str, payload: &serde_json::Value) -> Result<(), WebViewError> {
        let script = js_dispatch_message(CHANNEL_NAME, kind, payload);
        self.webview.evaluate_script(&script)?;
        Ok(())
    }
}
