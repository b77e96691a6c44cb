//! Tests for control-channel dispatch and notification delivery.

use serde_json::json;

use super::*;
use crate::observer::NullObserver;
use crate::testing::MockFactory;

fn bridge() -> ControlBridge<MockFactory> {
    ControlBridge::new(MockFactory::default())
}

fn body(kind: &str, payload: serde_json::Value) -> String {
    json!({ "kind": kind, "payload": payload }).to_string()
}

/// A bridge with a caller view (handle 0) created the way the shell does.
fn bridge_with_caller() -> (ControlBridge<MockFactory>, ViewHandle) {
    let mut b = bridge();
    let caller = b.registry_mut().create(Arc::new(NullObserver)).unwrap();
    (b, caller)
}

fn messages(b: &ControlBridge<MockFactory>, h: ViewHandle) -> Vec<(String, serde_json::Value)> {
    b.registry().factory().state(h).messages
}

// -- Create / reply --

#[test]
fn create_view_replies_with_new_handle() {
    let (mut b, caller) = bridge_with_caller();
    b.handle_ipc(caller, &body("create_view", json!({"call_id": 7})));

    assert_eq!(b.registry().len(), 2);
    assert_eq!(
        messages(&b, caller),
        vec![("reply".to_string(), json!({"call_id": 7, "handle": 1}))]
    );
}

#[test]
fn create_view_without_call_id_sends_no_reply() {
    let (mut b, caller) = bridge_with_caller();
    b.handle_ipc(caller, &body("create_view", json!({})));
    assert_eq!(b.registry().len(), 2);
    assert!(messages(&b, caller).is_empty());
}

#[test]
fn failed_create_replies_with_null() {
    let (mut b, caller) = bridge_with_caller();
    b.registry_mut().factory_mut().fail_next = true;
    b.handle_ipc(caller, &body("create_view", json!({"call_id": 1})));

    assert_eq!(b.registry().len(), 1);
    assert_eq!(
        messages(&b, caller),
        vec![("reply".to_string(), json!({"call_id": 1, "handle": null}))]
    );
}

#[test]
fn created_handles_never_repeat() {
    let mut b = bridge();
    let a = b.create_view().unwrap();
    b.destroy_view(a);
    let c = b.create_view().unwrap();
    assert!(c > a);
}

// -- Pass-through operations --

#[test]
fn navigate_geometry_visibility_pass_through() {
    let (mut b, caller) = bridge_with_caller();
    let h = b.create_view().unwrap();

    b.handle_ipc(caller, &body("navigate", json!({"handle": h, "url": "http://localhost:1234/"})));
    b.handle_ipc(
        caller,
        &body("set_geometry", json!({"handle": h, "x": 0, "y": 40, "width": 800, "height": 560})),
    );
    b.handle_ipc(caller, &body("set_visible", json!({"handle": h, "visible": true})));

    let state = b.registry().factory().state(h);
    assert_eq!(state.url.as_deref(), Some("http://localhost:1234/"));
    assert_eq!(state.geometry, Some(Geometry::new(0, 40, 800, 560)));
    assert!(state.visible);
    assert_eq!(b.registry().lookup_first_visible(), Some(h));
}

#[test]
fn destroy_via_channel_then_lookup_fails() {
    let (mut b, caller) = bridge_with_caller();
    let h = b.create_view().unwrap();
    b.handle_ipc(caller, &body("destroy_view", json!({"handle": h})));
    b.handle_ipc(caller, &body("destroy_view", json!({"handle": h})));

    assert!(b.registry().lookup(h).is_none());
    assert_eq!(b.registry().factory().released(), vec![h]);
}

#[test]
fn transparent_background_toggle_restores_opaque_fill() {
    let mut b = bridge();
    let h = b.create_view().unwrap();

    b.set_transparent_background(h, true);
    let state = b.registry().factory().state(h);
    assert!(!state.opaque_fill);
    assert_eq!(state.background, Color::TRANSPARENT);

    b.set_transparent_background(h, false);
    let state = b.registry().factory().state(h);
    assert!(state.opaque_fill);
    assert_eq!(state.background, DEFAULT_PAGE_BACKGROUND);
}

#[test]
fn stack_under_then_raise_makes_view_topmost() {
    let (mut b, caller) = bridge_with_caller();
    let x = b.create_view().unwrap();
    let y = b.create_view().unwrap();

    b.handle_ipc(caller, &body("stack_under", json!({"top": y, "under": caller})));
    assert_eq!(b.registry().paint_order(), &[y, caller, x]);

    b.handle_ipc(caller, &body("raise_to_top", json!({"handle": y})));
    assert_eq!(b.registry().paint_order().last(), Some(&y));
    assert_eq!(b.registry().factory().screen().last(), Some(&y));
}

// -- Unknown handles --

#[test]
fn unknown_handles_have_no_effect() {
    let (mut b, caller) = bridge_with_caller();
    let h = b.create_view().unwrap();
    let before = b.registry().factory().state(h);
    let ghost = 99;

    for (kind, payload) in [
        ("destroy_view", json!({"handle": ghost})),
        ("navigate", json!({"handle": ghost, "url": "http://example.com"})),
        ("set_geometry", json!({"handle": ghost, "x": 1, "y": 2, "width": 3, "height": 4})),
        ("set_visible", json!({"handle": ghost, "visible": true})),
        ("set_transparent_background", json!({"handle": ghost, "transparent": true})),
        ("stack_under", json!({"top": ghost, "under": h})),
        ("stack_under", json!({"top": h, "under": ghost})),
        ("raise_to_top", json!({"handle": ghost})),
    ] {
        b.handle_ipc(caller, &body(kind, payload));
    }

    assert_eq!(b.registry().len(), 2);
    assert_eq!(b.registry().paint_order(), &[caller, h]);
    assert_eq!(b.registry().factory().state(h), before);
    assert!(messages(&b, caller).is_empty());
}

#[test]
fn destroyed_handles_have_no_effect() {
    let (mut b, caller) = bridge_with_caller();
    let h = b.create_view().unwrap();
    b.destroy_view(h);

    b.navigate(h, "http://localhost/");
    b.set_visible(h, true);
    b.raise_to_top(h);
    assert_eq!(b.registry().paint_order(), &[caller]);
}

// -- Malformed input --

#[test]
fn malformed_and_unknown_messages_are_dropped() {
    let (mut b, caller) = bridge_with_caller();
    b.handle_ipc(caller, "not json");
    b.handle_ipc(caller, &body("eval", json!({"code": "alert(1)"})));
    b.handle_ipc(caller, &body("set_visible", json!({"handle": "zero"})));
    b.handle_ipc(caller, r#"{"payload": {}}"#);

    assert_eq!(b.registry().len(), 1);
    assert!(messages(&b, caller).is_empty());
}

// -- Notifications --

#[test]
fn notifications_broadcast_to_all_views() {
    let (mut b, caller) = bridge_with_caller();
    let h = b.create_view().unwrap();

    let observer = b.registry().factory().observer(h);
    observer.on_url_changed(h, "http://localhost/page");
    observer.on_load_progress(h, 100);
    observer.on_title_changed(h, "Page");

    assert_eq!(b.flush_notifications(), 3);

    let expected = vec![
        ("url_changed".to_string(), json!({"handle": 1, "url": "http://localhost/page"})),
        ("load_progress_changed".to_string(), json!({"handle": 1, "percent": 100})),
        ("title_changed".to_string(), json!({"handle": 1, "title": "Page"})),
    ];
    assert_eq!(messages(&b, caller), expected);
    assert_eq!(messages(&b, h), expected);

    assert_eq!(b.flush_notifications(), 0);
}

#[test]
fn notifications_outlive_views_destroyed_in_the_same_tick() {
    let (mut b, caller) = bridge_with_caller();
    let h = b.create_view().unwrap();
    let observer = b.registry().factory().observer(h);
    observer.on_url_changed(h, "http://localhost/next");
    observer.on_load_progress(h, 0);
    b.destroy_view(h);

    assert_eq!(b.flush_notifications(), 2);
    assert_eq!(
        messages(&b, caller),
        vec![
            ("url_changed".to_string(), json!({"handle": 1, "url": "http://localhost/next"})),
            ("load_progress_changed".to_string(), json!({"handle": 1, "percent": 0})),
        ]
    );
}

#[test]
fn views_created_outside_the_channel_do_not_notify() {
    let (mut b, caller) = bridge_with_caller();
    b.registry().factory().observer(caller).on_title_changed(caller, "Main");
    assert_eq!(b.flush_notifications(), 0);
}
