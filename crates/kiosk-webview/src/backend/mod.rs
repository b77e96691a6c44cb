//! `wry` implementation of the widget traits.
//!
//! Every view and the keyboard panel is a child web view of the shell
//! window, built from one shared [`BrowsingProfile`].

mod factory;
mod handlers;
mod panel;
mod view;

use std::path::PathBuf;

use kiosk_common::Geometry;
use wry::{WebContext, WebViewBuilder};

pub use factory::WryViewFactory;
pub use panel::WryPanel;
pub use view::WryView;

/// Storage and settings shared by every web view in the window.
pub struct BrowsingProfile {
    context: WebContext,
    devtools: bool,
    user_agent: Option<String>,
}

impl BrowsingProfile {
    /// `data_dir` holds cookies, local storage and caches; `None` keeps the
    /// engine default.
    pub fn new(data_dir: Option<PathBuf>, devtools: bool, user_agent: Option<String>) -> Self {
        Self {
            context: WebContext::new(data_dir),
            devtools,
            user_agent,
        }
    }

    /// Start a builder bound to this profile.
    pub(crate) fn builder(&mut self) -> WebViewBuilder<'_> {
        let mut builder = WebViewBuilder::with_web_context(&mut self.context)
            .with_devtools(self.devtools)
            .with_focused(false);
        if let Some(ua) = &self.user_agent {
            builder = builder.with_user_agent(ua);
        }
        builder
    }
}

/// Convert window-relative geometry to a logical `wry::Rect`.
pub fn geometry_to_wry(geometry: Geometry) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(
            f64::from(geometry.x),
            f64::from(geometry.y),
        )),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(
            f64::from(geometry.clamped_width()),
            f64::from(geometry.clamped_height()),
        )),
    }
}
