//! On-screen keyboard overlay.
//!
//! The panel is a separate widget anchored to the bottom edge of the window
//! at full width. Its own UI decides when it is shown (`activated`) and how
//! tall it wants to be (`heightChanged`); the shell reports window
//! resizes and forwards editable focus hints from the hosted views.

use kiosk_common::Geometry;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::error::WebViewError;
use crate::ipc::{IpcMessage, INPUT_FOCUS_KIND, PANEL_KEY_KIND};

/// The widget hosting the panel UI.
pub trait PanelSurface {
    fn set_visible(&mut self, visible: bool) -> Result<(), WebViewError>;

    /// Allocation within the window, in logical pixels.
    fn set_rect(&mut self, rect: Geometry) -> Result<(), WebViewError>;

    /// Push the panel's declared `width` property.
    fn set_width_property(&mut self, width: u32) -> Result<(), WebViewError>;

    /// Tell the panel UI whether an editable element has focus.
    fn set_input_focus(&mut self, focused: bool) -> Result<(), WebViewError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Hidden,
    Visible,
}

/// Signals raised by the panel UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSignal {
    Activated(bool),
    HeightChanged(i32),
}

#[derive(Deserialize)]
struct ActivatedArgs {
    active: bool,
}

#[derive(Deserialize)]
struct HeightArgs {
    height: i32,
}

impl PanelSignal {
    /// Decode a panel IPC message; anything else yields `None`.
    pub fn from_ipc(msg: &IpcMessage) -> Option<Self> {
        match msg.kind.as_str() {
            "panel_activated" => serde_json::from_value::<ActivatedArgs>(msg.payload.clone())
                .ok()
                .map(|a| Self::Activated(a.active)),
            "panel_height_changed" => serde_json::from_value::<HeightArgs>(msg.payload.clone())
                .ok()
                .map(|a| Self::HeightChanged(a.height)),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct FocusArgs {
    focused: bool,
}

/// Decode an `input_focus` hint from a hosted view.
pub fn input_focus_from_ipc(msg: &IpcMessage) -> Option<bool> {
    if msg.kind != INPUT_FOCUS_KIND {
        return None;
    }
    serde_json::from_value::<FocusArgs>(msg.payload.clone())
        .ok()
        .map(|a| a.focused)
}

/// A key pressed on the panel, to be typed into the focused view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelKey {
    Text(String),
    Backspace,
    Enter,
}

#[derive(Deserialize)]
struct KeyArgs {
    text: Option<String>,
    key: Option<String>,
}

impl PanelKey {
    pub fn from_ipc(msg: &IpcMessage) -> Option<Self> {
        if msg.kind != PANEL_KEY_KIND {
            return None;
        }
        let args = serde_json::from_value::<KeyArgs>(msg.payload.clone()).ok()?;
        match (args.text, args.key.as_deref()) {
            (Some(text), _) if !text.is_empty() => Some(Self::Text(text)),
            (_, Some("Backspace")) => Some(Self::Backspace),
            (_, Some("Enter")) => Some(Self::Enter),
            _ => None,
        }
    }

    /// Payload of the `input_key` message sent to the focused view.
    pub fn payload(&self) -> serde_json::Value {
        match self {
            Self::Text(text) => json!({ "text": text }),
            Self::Backspace => json!({ "key": "Backspace" }),
            Self::Enter => json!({ "key": "Enter" }),
        }
    }
}

/// Show/hide state and layout of the keyboard panel.
pub struct OverlayController<P: PanelSurface> {
    panel: P,
    state: OverlayState,
    height: i32,
    window_width: u32,
    window_height: u32,
}

impl<P: PanelSurface> OverlayController<P> {
    pub fn new(panel: P, initial_height: i32, window_width: u32, window_height: u32) -> Self {
        Self {
            panel,
            state: OverlayState::Hidden,
            height: initial_height.max(0),
            window_width,
            window_height,
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == OverlayState::Visible
    }

    /// Last height requested by the panel, whether or not it is shown.
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn handle_signal(&mut self, signal: PanelSignal) {
        match signal {
            PanelSignal::Activated(active) => self.activated(active),
            PanelSignal::HeightChanged(height) => self.height_changed(height),
        }
    }

    pub fn activated(&mut self, active: bool) {
        let next = if active {
            OverlayState::Visible
        } else {
            OverlayState::Hidden
        };
        if next != self.state {
            debug!(from = ?self.state, to = ?next, "overlay state changed");
        }
        self.state = next;
        if active {
            self.relayout();
        }
        if let Err(e) = self.panel.set_visible(active) {
            warn!(error = %e, "failed to toggle overlay panel");
        }
    }

    pub fn height_changed(&mut self, height: i32) {
        self.height = height.max(0);
        if self.is_visible() {
            self.relayout();
        }
    }

    pub fn window_resized(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
        self.push_width();
        if self.is_visible() {
            self.relayout();
        }
    }

    /// An editable element in some view gained or lost focus. The panel UI
    /// decides whether that shows it.
    pub fn input_focus_changed(&mut self, focused: bool) {
        debug!(focused, "forwarding input focus to overlay");
        if let Err(e) = self.panel.set_input_focus(focused) {
            warn!(focused, error = %e, "failed to forward input focus");
        }
    }

    /// The panel page finished loading; re-send its width property.
    pub fn panel_loaded(&mut self) {
        self.push_width();
    }

    /// Bottom-anchored full-width allocation, `None` while hidden.
    pub fn panel_rect(&self) -> Option<Geometry> {
        if !self.is_visible() {
            return None;
        }
        let window_height = i32::try_from(self.window_height).unwrap_or(i32::MAX);
        let width = i32::try_from(self.window_width).unwrap_or(i32::MAX);
        let height = self.height.min(window_height);
        Some(Geometry::new(0, window_height - height, width, height))
    }

    /// Hand the panel back for teardown.
    pub fn into_panel(self) -> P {
        self.panel
    }

    fn push_width(&mut self) {
        if let Err(e) = self.panel.set_width_property(self.window_width) {
            warn!(width = self.window_width, error = %e, "failed to push overlay width");
        }
    }

    fn relayout(&mut self) {
        if let Some(rect) = self.panel_rect() {
            if let Err(e) = self.panel.set_rect(rect) {
                warn!(error = %e, "failed to lay out overlay panel");
            }
        }
    }
}
