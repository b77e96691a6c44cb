//! Builds registry views as children of the shell window.

use std::sync::Arc;

use kiosk_common::Color;
use tracing::{debug, info};
use wry::raw_window_handle::HasWindowHandle;

use crate::content::ContentProvider;
use crate::error::WebViewError;
use crate::events::{EventOrigin, EventSink, PageLoadState};
use crate::handle::ViewHandle;
use crate::ipc::CHANNEL_INIT_SCRIPT;
use crate::observer::ViewObserver;
use crate::permissions::PermissionPolicy;
use crate::widget::ViewFactory;

use super::handlers::{install_permission_hook, with_content, with_ipc_to_sink, PERMISSION_HOOK_SUPPORTED};
use super::view::WryView;
use super::{geometry_to_wry, BrowsingProfile};

pub struct WryViewFactory<W: HasWindowHandle> {
    window: Arc<W>,
    profile: BrowsingProfile,
    sink: EventSink,
    content: Option<Arc<ContentProvider>>,
    permissions: Arc<PermissionPolicy>,
}

impl<W: HasWindowHandle> WryViewFactory<W> {
    pub fn new(
        window: Arc<W>,
        profile: BrowsingProfile,
        sink: EventSink,
        permissions: PermissionPolicy,
    ) -> Self {
        if PERMISSION_HOOK_SUPPORTED {
            info!(hosts = ?permissions.allowed_hosts(), "feature permission policy installed");
        } else {
            info!("feature permission hook unavailable on this platform, engine defaults apply");
        }
        Self {
            window,
            profile,
            sink,
            content: None,
            permissions: Arc::new(permissions),
        }
    }

    /// Serve bundled assets over `kiosk://` in views created from now on.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content = Some(Arc::new(provider));
    }

    pub fn content_provider(&self) -> Option<&Arc<ContentProvider>> {
        self.content.as_ref()
    }

    pub fn profile_mut(&mut self) -> &mut BrowsingProfile {
        &mut self.profile
    }
}

impl<W: HasWindowHandle> ViewFactory for WryViewFactory<W> {
    type View = WryView;

    /// New views start hidden, with zero size and an opaque white page.
    fn create_view(
        &mut self,
        handle: ViewHandle,
        observer: Arc<dyn ViewObserver>,
    ) -> Result<WryView, WebViewError> {
        let mut builder = self
            .profile
            .builder()
            .with_bounds(geometry_to_wry(Default::default()))
            .with_transparent(true)
            .with_visible(false)
            .with_background_color(Color::WHITE.to_tuple())
            .with_initialization_script(CHANNEL_INIT_SCRIPT);

        builder = with_ipc_to_sink(builder, &self.sink, EventOrigin::View(handle));
        builder = with_content(builder, self.content.as_ref());

        let load_observer = Arc::clone(&observer);
        builder = builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(%handle, ?state, url = %url, "page load");
            match state {
                PageLoadState::Started => {
                    load_observer.on_url_changed(handle, &url);
                    load_observer.on_load_progress(handle, 0);
                }
                PageLoadState::Finished => load_observer.on_load_progress(handle, 100),
            }
        });

        let title_observer = observer;
        builder = builder.with_document_title_changed_handler(move |title| {
            debug!(%handle, title = %title, "title changed");
            title_observer.on_title_changed(handle, &title);
        });

        let webview = builder.build_as_child(&*self.window)?;
        install_permission_hook(&webview, Arc::clone(&self.permissions));

        Ok(WryView::new(webview))
    }
}
