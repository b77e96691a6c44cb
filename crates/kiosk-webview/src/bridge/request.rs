//! Typed control-channel requests decoded from IPC envelopes.

use kiosk_common::Geometry;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::WebViewError;
use crate::handle::ViewHandle;
use crate::ipc::IpcMessage;

/// IPC kinds the control channel accepts. Anything else is rejected.
pub const CONTROL_KINDS: &[&str] = &[
    "create_view",
    "destroy_view",
    "navigate",
    "set_geometry",
    "set_visible",
    "set_transparent_background",
    "stack_under",
    "raise_to_top",
];

/// Check whether an IPC kind belongs to the control channel.
pub fn is_control_kind(kind: &str) -> bool {
    CONTROL_KINDS.contains(&kind)
}

/// One remote call from hosted content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlRequest {
    CreateView,
    DestroyView { handle: ViewHandle },
    Navigate { handle: ViewHandle, url: String },
    SetGeometry { handle: ViewHandle, geometry: Geometry },
    SetVisible { handle: ViewHandle, visible: bool },
    SetTransparentBackground { handle: ViewHandle, transparent: bool },
    StackUnder { top: ViewHandle, under: ViewHandle },
    RaiseToTop { handle: ViewHandle },
}

/// A decoded request plus the caller's correlation id, if it wants a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlCall {
    pub call_id: Option<u64>,
    pub request: ControlRequest,
}

#[derive(Deserialize)]
struct HandleArgs {
    handle: ViewHandle,
}

#[derive(Deserialize)]
struct NavigateArgs {
    handle: ViewHandle,
    url: String,
}

#[derive(Deserialize)]
struct GeometryArgs {
    handle: ViewHandle,
    #[serde(flatten)]
    geometry: Geometry,
}

#[derive(Deserialize)]
struct VisibleArgs {
    handle: ViewHandle,
    visible: bool,
}

#[derive(Deserialize)]
struct TransparentArgs {
    handle: ViewHandle,
    transparent: bool,
}

#[derive(Deserialize)]
struct StackArgs {
    top: ViewHandle,
    under: ViewHandle,
}

fn args<T: DeserializeOwned>(msg: &IpcMessage) -> Result<T, WebViewError> {
    serde_json::from_value(msg.payload.clone())
        .map_err(|e| WebViewError::InvalidMessage(format!("{}: {e}", msg.kind)))
}

impl ControlCall {
    /// Decode an IPC envelope into a control call.
    pub fn from_ipc(msg: &IpcMessage) -> Result<Self, WebViewError> {
        let request = match msg.kind.as_str() {
            "create_view" => ControlRequest::CreateView,
            "destroy_view" => {
                let a: HandleArgs = args(msg)?;
                ControlRequest::DestroyView { handle: a.handle }
            }
            "navigate" => {
                let a: NavigateArgs = args(msg)?;
                ControlRequest::Navigate {
                    handle: a.handle,
                    url: a.url,
                }
            }
            "set_geometry" => {
                let a: GeometryArgs = args(msg)?;
                ControlRequest::SetGeometry {
                    handle: a.handle,
                    geometry: a.geometry,
                }
            }
            "set_visible" => {
                let a: VisibleArgs = args(msg)?;
                ControlRequest::SetVisible {
                    handle: a.handle,
                    visible: a.visible,
                }
            }
            "set_transparent_background" => {
                let a: TransparentArgs = args(msg)?;
                ControlRequest::SetTransparentBackground {
                    handle: a.handle,
                    transparent: a.transparent,
                }
            }
            "stack_under" => {
                let a: StackArgs = args(msg)?;
                ControlRequest::StackUnder {
                    top: a.top,
                    under: a.under,
                }
            }
            "raise_to_top" => {
                let a: HandleArgs = args(msg)?;
                ControlRequest::RaiseToTop { handle: a.handle }
            }
            other => return Err(WebViewError::UnknownKind(other.to_string())),
        };

        let call_id = msg.payload.get("call_id").and_then(|v| v.as_u64());
        Ok(Self { call_id, request })
    }
}

// =============================================================================
// TESTS
// =============================================================================
