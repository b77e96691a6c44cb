//! Engine callbacks shared by views and the panel.

use std::sync::Arc;

use tracing::debug;
use wry::http::Request;
use wry::WebViewBuilder;

use crate::content::{ContentProvider, SCHEME};
use crate::events::{EventOrigin, EventSink, WebViewEvent};
use crate::permissions::PermissionPolicy;

/// Forward raw IPC bodies into the sink, tagged with their origin.
pub(super) fn with_ipc_to_sink<'a>(
    builder: WebViewBuilder<'a>,
    sink: &EventSink,
    origin: EventOrigin,
) -> WebViewBuilder<'a> {
    let sink = sink.clone();
    builder.with_ipc_handler(move |request: Request<String>| {
        let body = request.into_body();
        debug!(?origin, body_len = body.len(), "IPC message from JS");
        sink.push(WebViewEvent::IpcMessage { origin, body });
    })
}

/// Serve `kiosk://` from the content provider, if one is configured.
pub(super) fn with_content<'a>(
    builder: WebViewBuilder<'a>,
    content: Option<&Arc<ContentProvider>>,
) -> WebViewBuilder<'a> {
    let Some(provider) = content else {
        return builder;
    };
    let provider = Arc::clone(provider);
    builder.with_custom_protocol(SCHEME.to_string(), move |_id, request| {
        provider.respond(&request.uri().to_string())
    })
}

/// Route the engine's feature permission requests through `policy`.
#[cfg(target_os = "linux")]
pub(super) fn install_permission_hook(webview: &wry::WebView, policy: Arc<PermissionPolicy>) {
    use webkit2gtk::{PermissionRequestExt, WebViewExt};
    use wry::WebViewExtUnix;

    webview
        .webview()
        .connect_permission_request(move |wv, request| {
            let origin = wv.uri().map(|u| u.to_string()).unwrap_or_default();
            if policy.decide(&origin).is_granted() {
                request.allow();
            } else {
                request.deny();
            }
            true
        });
}

#[cfg(not(target_os = "linux"))]
pub(super) fn install_permission_hook(_webview: &wry::WebView, _policy: Arc<PermissionPolicy>) {}

/// Whether [`install_permission_hook`] does anything on this platform.
pub(super) const PERMISSION_HOOK_SUPPORTED: bool = cfg!(target_os = "linux");
