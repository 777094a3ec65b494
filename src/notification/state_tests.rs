//! Tests for notification/state

use super::*;

#[test]
fn test_starts_empty() {
    let mut state = NotificationState::new(Duration::from_secs(3));
    assert!(state.current().is_none());
}

#[test]
fn test_show_and_show_error() {
    let mut state = NotificationState::new(Duration::from_secs(3));

    state.show("Submitted to /classic");
    let current = state.current().unwrap();
    assert_eq!(current.message, "Submitted to /classic");
    assert_eq!(current.kind, NotificationKind::Info);

    state.show_error("Search endpoint returned HTTP 502");
    let current = state.current().unwrap();
    assert_eq!(current.message, "Search endpoint returned HTTP 502");
    assert_eq!(current.kind, NotificationKind::Error);
}

#[test]
fn test_expires_after_duration() {
    let mut state = NotificationState::new(Duration::from_millis(100));
    state.show("hello");

    let shown_at = state.current.as_ref().unwrap().shown_at;
    state.expire(shown_at + Duration::from_millis(99));
    assert!(state.current.is_some());

    state.expire(shown_at + Duration::from_millis(100));
    assert!(state.current.is_none());
}

#[test]
fn test_zero_duration_never_shows() {
    let mut state = NotificationState::new(Duration::ZERO);
    state.show("gone");
    assert!(state.current().is_none());
}

#[test]
fn test_clear() {
    let mut state = NotificationState::new(Duration::from_secs(3));
    state.show("hello");
    state.clear();
    assert!(state.current().is_none());
}
