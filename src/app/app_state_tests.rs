//! Tests for app/state

use super::*;
use crate::binder::{FieldId, SearchResponse};
use crate::notification::NotificationKind;
use crate::search::SearchError;
use crate::test_utils::test_helpers::*;

#[test]
fn test_new_binds_default_page() {
    let app = test_app();
    assert_eq!(app.binder.len(), 3);
    assert_eq!(app.inputs.len(), 3);
    let titles: Vec<&str> = app.inputs.iter().map(|i| i.title()).collect();
    assert_eq!(titles, vec!["Classic", "Emoji", "Splash"]);
    assert_eq!(app.focus, None);
    assert!(!app.should_quit());
}

#[test]
fn test_new_rejects_invalid_selector() {
    let mut config = crate::config::Config::default();
    config.binder.panel_selector = "div input".to_string();
    let result = App::new(&crate::dom::Page::default_page(), &config);
    assert!(result.is_err());
}

#[test]
fn test_focus_sends_request_with_field_mode() {
    let (mut app, mut rx, _tx) = test_app_with_channels();

    app.focus_first();
    app.focus_field(FieldId(1));

    let requests = drain_requests(&mut rx);
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].mode, "classic");
    assert_eq!(requests[0].query, "");
    assert_eq!(requests[1].mode, "emoji");
    assert_eq!(requests[1].field, FieldId(1));
}

#[test]
fn test_typing_updates_document_and_requests() {
    let (mut app, mut rx, _tx) = test_app_with_channels();
    app.focus_first();
    drain_requests(&mut rx);

    type_text(&mut app, "Kaf");

    let requests = drain_requests(&mut rx);
    let queries: Vec<&str> = requests.iter().map(|r| r.query.as_str()).collect();
    assert_eq!(queries, vec!["K", "Ka", "Kaf"]);
    let input = app.binder.fields()[0].input;
    assert_eq!(app.document.value(input), "Kaf");
}

#[test]
fn test_poll_responses_applies_worker_output() {
    let (mut app, mut rx, tx) = test_app_with_channels();
    app.focus_first();
    let request = drain_requests(&mut rx).pop().unwrap();

    tx.send(SearchResponse {
        field: request.field,
        request_id: request.request_id,
        result: Ok(vec![crate::search::SuggestionItem::new("Kafka", "/k.png")]),
    })
    .unwrap();
    app.poll_responses();

    assert_eq!(app.visible_row_count(), 1);
}

#[test]
fn test_poll_responses_survives_disconnected_worker() {
    let (mut app, _rx, tx) = test_app_with_channels();
    drop(tx);
    app.poll_responses();
    app.poll_responses();
    assert!(!app.should_quit());
}

#[test]
fn test_stale_response_is_ignored() {
    let (mut app, mut rx, _tx) = test_app_with_channels();
    app.focus_first();
    type_text(&mut app, "a");
    let requests = drain_requests(&mut rx);
    let old = &requests[0];

    respond(&mut app, FieldId(0), &["Acheron"]);
    app.handle_response(SearchResponse {
        field: old.field,
        request_id: old.request_id,
        result: Ok(vec![]),
    });

    assert_eq!(app.visible_row_count(), 1);
}

#[test]
fn test_failure_hides_panel_and_notifies() {
    let (mut app, mut rx, _tx) = test_app_with_channels();
    app.focus_first();
    respond(&mut app, FieldId(0), &["Kafka"]);
    type_text(&mut app, "x");
    let request = drain_requests(&mut rx).pop().unwrap();

    app.handle_response(SearchResponse {
        field: request.field,
        request_id: request.request_id,
        result: Err(SearchError::Status { code: 502 }),
    });

    assert_eq!(app.visible_row_count(), 0);
    let notification = app.notification.current().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert!(notification.message.contains("502"));
}

#[test]
fn test_select_row_submits_and_quits() {
    let mut app = test_app();
    app.focus_first();
    respond(&mut app, FieldId(0), &["Kafka", "Himeko"]);

    app.select_row(FieldId(0), 1);

    assert_eq!(app.inputs[0].text(), "Himeko");
    assert!(app.should_quit());
    let submission = app.submission.as_ref().unwrap();
    assert_eq!(submission.action, "/classic");
    assert_eq!(
        submission.fields,
        vec![("character".to_string(), "Himeko".to_string())]
    );
}

#[test]
fn test_submit_focused_sends_typed_value() {
    let mut app = test_app();
    app.focus_field(FieldId(2));
    type_text(&mut app, "Welt");

    app.submit_focused();

    let submission = app.submission.as_ref().unwrap();
    assert_eq!(submission.action, "/splash");
    assert_eq!(submission.fields, vec![("guess".to_string(), "Welt".to_string())]);
}

#[test]
fn test_focus_change_hides_other_panels() {
    let mut app = test_app();
    app.focus_first();
    respond(&mut app, FieldId(0), &["Kafka"]);
    assert!(app.binder.is_panel_visible(&app.document, FieldId(0)));

    app.focus_next();

    assert_eq!(app.focus, Some(FieldId(1)));
    assert!(!app.binder.is_panel_visible(&app.document, FieldId(0)));
    assert!(app.inputs[1].is_focused());
    assert!(!app.inputs[0].is_focused());
}

#[test]
fn test_focus_wraps_both_ways() {
    let mut app = test_app();
    app.focus_prev();
    assert_eq!(app.focus, Some(FieldId(2)));
    app.focus_next();
    assert_eq!(app.focus, Some(FieldId(0)));
}

#[test]
fn test_highlight_is_clamped() {
    let mut app = test_app();
    app.focus_first();
    respond(&mut app, FieldId(0), &["Kafka", "Himeko"]);

    app.highlight_next();
    app.highlight_next();
    app.highlight_next();
    assert_eq!(app.highlighted, Some(1));

    app.highlight_prev();
    app.highlight_prev();
    assert_eq!(app.highlighted, Some(0));
}

#[test]
fn test_highlight_without_panel_is_noop() {
    let mut app = test_app();
    app.focus_first();
    app.highlight_next();
    assert_eq!(app.highlighted, None);
}

#[test]
fn test_closed_worker_notifies() {
    let (mut app, rx, _tx) = test_app_with_channels();
    drop(rx);

    app.focus_first();

    let notification = app.notification.current().unwrap();
    assert_eq!(notification.message, "Search worker stopped");
}
