//! Traits separating view management from the browser engine.

use std::sync::Arc;

use kiosk_common::{Color, Geometry};

use crate::error::WebViewError;
use crate::handle::ViewHandle;
use crate::observer::ViewObserver;

/// Mutators on one embedded web view.
pub trait ViewWidget {
    /// Navigate to `url`.
    fn set_url(&mut self, url: &str) -> Result<(), WebViewError>;

    /// Position and size within the window, in logical pixels.
    fn set_geometry(&mut self, geometry: Geometry) -> Result<(), WebViewError>;

    fn set_visible(&mut self, visible: bool) -> Result<(), WebViewError>;

    fn is_visible(&self) -> bool;

    /// Whether the widget paints an opaque fill behind the page.
    fn set_opaque_fill(&mut self, opaque: bool) -> Result<(), WebViewError>;

    /// Background colour of the page itself.
    fn set_page_background(&mut self, color: Color) -> Result<(), WebViewError>;

    /// Move the widget above all of its siblings.
    fn bring_to_front(&mut self) -> Result<(), WebViewError>;

    /// Deliver a control-channel message to the hosted content.
    fn post_message(&self, kind: &str, payload: &serde_json::Value) -> Result<(), WebViewError>;
}

/// Builds widgets bound to a shared browsing profile.
pub trait ViewFactory {
    type View: ViewWidget;

    /// Construct a new view for `handle`, reporting page events to `observer`.
    fn create_view(
        &mut self,
        handle: ViewHandle,
        observer: Arc<dyn ViewObserver>,
    ) -> Result<Self::View, WebViewError>;
}
