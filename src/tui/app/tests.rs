//! Tests for the TUI application module

use chrono::Utc;

use super::*;
use crate::list::ListKnobs;
use crate::models::CameraEvent;

fn test_app() -> App {
    // Unroutable port: the initial entity fetch fails harmlessly and is
    // never polled by these tests.
    let gateway = Gateway::new("http://127.0.0.1:1");
    App::new(gateway, &LookoutConfig::default())
}

fn make_events(n: usize) -> Vec<CameraEvent> {
    (0..n)
        .map(|i| CameraEvent {
            id: format!("evt-{i}"),
            camera: "porch".to_string(),
            label: "person".to_string(),
            timestamp: Utc::now(),
            snippet: format!("event number {i}"),
            thumbnail: None,
            score: Some(0.9),
        })
        .collect()
}

fn open_test_session(app: &mut App, n: usize) {
    let knobs = ListKnobs {
        row_height: 80,
        ..ListKnobs::default()
    };
    let mut session = ListSession::open("events:test#1", make_events(n), n, knobs);
    session.set_viewport_height(600);
    app.events = Some(session);
    app.current_entity = Some(Entity {
        id: "test".to_string(),
        name: "Test".to_string(),
        kind: None,
        event_count: n,
    });
    app.focus = Pane::Events;
}

// ==================== Filter Parsing Tests ====================

#[test]
fn test_parse_filters_empty() {
    assert!(parse_filters("").is_empty());
    assert!(parse_filters("   ").is_empty());
}

#[test]
fn test_parse_filters_keyed_tokens() {
    let filters = parse_filters("camera=porch label=person");
    assert_eq!(filters.camera.as_deref(), Some("porch"));
    assert_eq!(filters.label.as_deref(), Some("person"));
}

#[test]
fn test_parse_filters_bare_token_is_label() {
    let filters = parse_filters("person");
    assert!(filters.camera.is_none());
    assert_eq!(filters.label.as_deref(), Some("person"));
}

#[test]
fn test_parse_filters_empty_value_cleared() {
    let filters = parse_filters("camera= label=person");
    assert!(filters.camera.is_none());
    assert_eq!(filters.label.as_deref(), Some("person"));
}

#[test]
fn test_apply_filter_without_open_list() {
    let mut app = test_app();
    app.enter_filter();
    for c in "label=car".chars() {
        app.filter_push(c);
    }
    app.apply_filter();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.filters.label.as_deref(), Some("car"));
}

// ==================== Nested View Tests ====================

#[test]
fn test_open_child_requires_selection() {
    let mut app = test_app();
    app.open_child();
    assert!(app.children.is_empty());
    assert!(app.nav.is_empty());
}

#[test]
fn test_open_child_pushes_nav_frame() {
    let mut app = test_app();
    open_test_session(&mut app, 200);
    app.events.as_mut().unwrap().scroll_to(400);

    app.open_child();
    assert_eq!(app.children.len(), 1);
    assert_eq!(app.nav.depth(), 1);
    assert!(matches!(
        app.children.last(),
        Some(ChildView::EventDetail { .. })
    ));
}

#[test]
fn test_nested_close_restores_scroll_offset() {
    // List at 400; detail opens, metadata opens on top; closing both in
    // reverse order lands the list back at exactly 400.
    let mut app = test_app();
    open_test_session(&mut app, 200);
    app.events.as_mut().unwrap().scroll_to(400);

    app.open_child(); // detail
    app.open_child(); // nested metadata
    assert_eq!(app.children.len(), 2);
    // Only the list-parented child records a frame.
    assert_eq!(app.nav.depth(), 1);

    // The surface moved while the overlays were open.
    app.events.as_mut().unwrap().scroll_to(0);

    assert!(app.close_child()); // metadata
    assert!(app.close_child()); // detail -> restoration scheduled
    assert!(app.children.is_empty());
    assert!(app.nav.is_empty());

    let session = app.events.as_mut().unwrap();
    session.begin_frame();
    assert_eq!(session.viewport().scroll_offset, 400);
}

#[test]
fn test_close_child_without_children() {
    let mut app = test_app();
    assert!(!app.close_child());
}

#[test]
fn test_close_event_list_forgets_nav_frames() {
    let mut app = test_app();
    open_test_session(&mut app, 200);
    app.open_child();
    assert_eq!(app.nav.depth(), 1);

    app.close_event_list();
    assert!(app.events.is_none());
    assert!(app.children.is_empty());
    assert!(app.nav.is_empty());
    assert_eq!(app.focus, Pane::Entities);
}

#[test]
fn test_close_child_after_list_closed_is_noop() {
    let mut app = test_app();
    open_test_session(&mut app, 200);
    app.open_child();

    // The list unmounts while the detail view is still up.
    app.events = None;
    app.children.push(ChildView::EventDetail {
        event: make_events(1).remove(0),
        scroll: 0,
    });
    assert!(app.close_child()); // must not panic
}

// ==================== Removal Action Tests ====================

#[test]
fn test_request_remove_sets_pending_action() {
    let mut app = test_app();
    open_test_session(&mut app, 30);
    app.events.as_mut().unwrap().set_selected_index(3);

    app.request_remove();
    let pending = app.pending_removal.as_ref().unwrap();
    assert_eq!(pending.event_id, "evt-3");
    assert!(pending.description().contains("porch"));
    assert!(app.has_pending_action());
}

#[test]
fn test_cancel_action_clears_pending() {
    let mut app = test_app();
    open_test_session(&mut app, 30);
    app.request_remove();
    app.cancel_action();
    assert!(!app.has_pending_action());
    assert_eq!(app.events.as_ref().unwrap().len(), 30);
}

#[test]
fn test_request_remove_without_events_is_noop() {
    let mut app = test_app();
    app.request_remove();
    assert!(!app.has_pending_action());
}

// ==================== Mouse Hit Testing Tests ====================

#[test]
fn test_event_row_at_maps_click_to_index() {
    let mut app = test_app();
    let knobs = ListKnobs {
        row_height: 3,
        ..ListKnobs::default()
    };
    let mut session = ListSession::open("events:test#1", make_events(100), 100, knobs);
    session.set_viewport_height(30);
    session.scroll_to(30); // ten rows scrolled off
    app.events = Some(session);
    app.last_event_area = Some((40, 3, 60, 32));

    // First content line is y = 4 (inside the border): cell 30, row 10
    assert_eq!(app.event_row_at(50, 4), Some(10));
    // Two cells further down is still row 10
    assert_eq!(app.event_row_at(50, 6), Some(10));
    // Next row starts three cells in
    assert_eq!(app.event_row_at(50, 7), Some(11));
    // Clicks on the border do not resolve
    assert_eq!(app.event_row_at(50, 3), None);
}

#[test]
fn test_status_message_lifecycle() {
    let mut app = test_app();
    app.set_status("hello", false);
    assert!(app.status_message.is_some());
    app.clear_status();
    assert!(app.status_message.is_none());
}
