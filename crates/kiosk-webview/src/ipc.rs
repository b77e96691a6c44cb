//! IPC envelope and scripts shared by every hosted page.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: `window.ipc.postMessage(JSON.stringify({kind, payload}))`,
//!   received by the `ipc_handler` registered on the view.
//! - **Rust -> JS**: `evaluate_script("window.<target>._dispatch(kind, payload)")`.

use serde::{Deserialize, Serialize};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// Arguments as JSON. Missing payloads decode as `null`.
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    pub fn new(kind: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Raised by a hosted view when an editable element gains or loses focus.
/// Payload: `{focused: bool}`. Also forwarded to the keyboard panel as-is.
pub const INPUT_FOCUS_KIND: &str = "input_focus";

/// Sent to the focused view to type one key from the keyboard panel.
/// Payload: `{text: string}` or `{key: "Backspace" | "Enter"}`.
pub const INPUT_KEY_KIND: &str = "input_key";

/// Raised by the panel UI for each key press; same payload as [`INPUT_KEY_KIND`].
pub const PANEL_KEY_KIND: &str = "panel_key";

/// Installs `window.main`, the control channel, in every hosted view.
///
/// Calls that return a value (`createWebView`) resolve a promise when the
/// matching `reply` arrives; the rest are fire-and-forget. The script also
/// reports focus on editable elements and types keys sent back by the shell.
pub const CHANNEL_INIT_SCRIPT: &str = r#"
(function() {
    if (window.main) { return; }
    var pending = {};
    var nextCallId = 1;
    var listeners = {};

    function send(kind, payload) {
        window.ipc.postMessage(JSON.stringify({ kind: kind, payload: payload || {} }));
    }

    var editableTypes = ['text', 'search', 'email', 'url', 'tel', 'password', 'number'];
    function isEditable(el) {
        if (!el) { return false; }
        if (el.isContentEditable) { return true; }
        var tag = (el.tagName || '').toLowerCase();
        if (tag === 'textarea') { return !el.readOnly && !el.disabled; }
        if (tag === 'input') {
            var type = (el.getAttribute('type') || 'text').toLowerCase();
            return editableTypes.indexOf(type) >= 0 && !el.readOnly && !el.disabled;
        }
        return false;
    }

    var inputFocused = false;
    function reportFocus(focused) {
        if (!focused && !inputFocused) { return; }
        inputFocused = focused;
        send('input_focus', { focused: focused });
    }

    document.addEventListener('focusin', function(e) {
        if (isEditable(e.target)) { reportFocus(true); }
    }, true);
    // Focus moving to the keyboard panel leaves this document without focus;
    // only a blur inside the page hides the keyboard.
    document.addEventListener('focusout', function() {
        setTimeout(function() {
            if (document.hasFocus() && !isEditable(document.activeElement)) {
                reportFocus(false);
            }
        }, 0);
    }, true);

    function insertText(el, text) {
        if (typeof el.setRangeText === 'function' && typeof el.selectionStart === 'number') {
            el.setRangeText(text, el.selectionStart, el.selectionEnd, 'end');
            el.dispatchEvent(new InputEvent('input', { bubbles: true, data: text, inputType: 'insertText' }));
        } else {
            document.execCommand('insertText', false, text);
        }
    }

    function deleteBackward(el) {
        if (typeof el.setRangeText === 'function' && typeof el.selectionStart === 'number') {
            var start = el.selectionStart, end = el.selectionEnd;
            if (start === end && start > 0) { start -= 1; }
            el.setRangeText('', start, end, 'end');
            el.dispatchEvent(new InputEvent('input', { bubbles: true, inputType: 'deleteContentBackward' }));
        } else {
            document.execCommand('delete', false);
        }
    }

    function typeKey(payload) {
        var el = document.activeElement;
        if (!isEditable(el)) { return; }
        if (typeof payload.text === 'string') {
            insertText(el, payload.text);
        } else if (payload.key === 'Backspace') {
            deleteBackward(el);
        } else if (payload.key === 'Enter') {
            if ((el.tagName || '').toLowerCase() === 'input') {
                if (el.form && typeof el.form.requestSubmit === 'function') { el.form.requestSubmit(); }
            } else {
                insertText(el, '\n');
            }
        }
    }

    function call(kind, payload) {
        return new Promise(function(resolve) {
            var id = nextCallId++;
            pending[id] = resolve;
            payload = payload || {};
            payload.call_id = id;
            send(kind, payload);
        });
    }

    window.main = {
        createWebView: function() {
            return call('create_view');
        },
        destroyWebView: function(handle) {
            send('destroy_view', { handle: handle });
        },
        setWebViewUrl: function(handle, url) {
            send('navigate', { handle: handle, url: String(url) });
        },
        setWebViewGeometry: function(handle, x, y, width, height) {
            send('set_geometry', { handle: handle, x: x | 0, y: y | 0, width: width | 0, height: height | 0 });
        },
        setWebViewVisible: function(handle, visible) {
            send('set_visible', { handle: handle, visible: !!visible });
        },
        setWebViewTransparentBackground: function(handle, transparent) {
            send('set_transparent_background', { handle: handle, transparent: !!transparent });
        },
        stackWebViewUnder: function(top, under) {
            send('stack_under', { top: top, under: under });
        },
        raiseWebView: function(handle) {
            send('raise_to_top', { handle: handle });
        },
        // url_changed, title_changed, load_progress_changed
        on: function(name, callback) {
            (listeners[name] = listeners[name] || []).push(callback);
        },
        _dispatch: function(kind, payload) {
            if (kind === 'reply') {
                var resolve = pending[payload.call_id];
                if (resolve) {
                    delete pending[payload.call_id];
                    resolve(payload.handle);
                }
                return;
            }
            if (kind === 'input_key') {
                typeKey(payload || {});
                return;
            }
            (listeners[kind] || []).forEach(function(cb) { cb(payload); });
        }
    };
})();
"#;

/// Installs `window.panel` in the keyboard overlay view.
///
/// The panel UI reports `activated(bool)`, `heightChanged(int)` and key
/// presses (`key(text)`, `specialKey(name)`); the shell pushes the `width`
/// property and editable focus hints back. Without an `onInputFocus`
/// handler a focus hint shows or hides the panel directly.
pub const PANEL_INIT_SCRIPT: &str = r#"
(function() {
    if (window.panel) { return; }
    function send(kind, payload) {
        window.ipc.postMessage(JSON.stringify({ kind: kind, payload: payload }));
    }
    window.panel = {
        width: 0,
        onWidthChanged: null,
        onInputFocus: null,
        activated: function(active) {
            send('panel_activated', { active: !!active });
        },
        heightChanged: function(height) {
            send('panel_height_changed', { height: height | 0 });
        },
        key: function(text) {
            send('panel_key', { text: String(text) });
        },
        specialKey: function(name) {
            send('panel_key', { key: String(name) });
        },
        _dispatch: function(kind, payload) {
            if (kind === 'set_width') {
                this.width = payload.width;
                if (typeof this.onWidthChanged === 'function') {
                    this.onWidthChanged(payload.width);
                }
            } else if (kind === 'input_focus') {
                if (typeof this.onInputFocus === 'function') {
                    this.onInputFocus(payload.focused);
                } else {
                    this.activated(payload.focused);
                }
            }
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to `window.<target>`.
pub fn js_dispatch_message(target: &str, kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    let kind_json = serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string());
    format!("window.{target} && window.{target}._dispatch({kind_json}, {payload_json});")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_envelope() {
        let msg = IpcMessage::from_json(r#"{"kind":"raise_to_top","payload":{"handle":3}}"#).unwrap();
        assert_eq!(msg.kind, "raise_to_top");
        assert_eq!(msg.payload, json!({"handle": 3}));
    }

    #[test]
    fn missing_payload_is_null() {
        let msg = IpcMessage::from_json(r#"{"kind":"create_view"}"#).unwrap();
        assert!(msg.payload.is_null());
    }

    #[test]
    fn rejects_garbage() {
        assert!(IpcMessage::from_json("").is_none());
        assert!(IpcMessage::from_json("[1,2]").is_none());
        assert!(IpcMessage::from_json(r#"{"payload":1}"#).is_none());
    }

    #[test]
    fn dispatch_snippet_escapes_strings() {
        let js = js_dispatch_message("main", "title_changed", &json!({"title": "a\"b</script>"}));
        assert!(js.starts_with("window.main && window.main._dispatch(\"title_changed\", "));
        assert!(js.contains(r#"a\"b</script>"#));
        assert!(js.ends_with(");"));
    }

    #[test]
    fn channel_script_exposes_every_control_kind() {
        for kind in crate::bridge::CONTROL_KINDS {
            assert!(
                CHANNEL_INIT_SCRIPT.contains(&format!("'{kind}'")),
                "init script does not send {kind}"
            );
        }
        assert!(CHANNEL_INIT_SCRIPT.contains("window.main"));
    }

    #[test]
    fn panel_script_matches_panel_contract() {
        assert!(PANEL_INIT_SCRIPT.contains("'panel_activated'"));
        assert!(PANEL_INIT_SCRIPT.contains("'panel_height_changed'"));
        assert!(PANEL_INIT_SCRIPT.contains("'set_width'"));
    }

    #[test]
    fn scripts_carry_the_keyboard_path() {
        assert!(CHANNEL_INIT_SCRIPT.contains(&format!("'{INPUT_FOCUS_KIND}'")));
        assert!(CHANNEL_INIT_SCRIPT.contains(&format!("'{INPUT_KEY_KIND}'")));
        assert!(CHANNEL_INIT_SCRIPT.contains("focusin"));
        assert!(PANEL_INIT_SCRIPT.contains(&format!("'{PANEL_KEY_KIND}'")));
        assert!(PANEL_INIT_SCRIPT.contains(&format!("'{INPUT_FOCUS_KIND}'")));
    }
}
