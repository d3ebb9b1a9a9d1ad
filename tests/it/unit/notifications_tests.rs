//! Unit tests for the error notice and its auto-dismiss.

use csvchart::app::SessionStore;
use csvchart::notifications::ErrorNotice;
use csvchart::settings::Settings;
use std::time::{Duration, Instant};

#[test]
fn test_notice_not_immediately_expired() {
    let notice = ErrorNotice::new("Bad file");
    assert!(!notice.is_expired(), "Fresh notice should not be expired");
    assert_eq!(notice.duration, Duration::from_millis(6000));
}

#[test]
fn test_notice_expires_after_duration() {
    let start = Instant::now();
    let notice = ErrorNotice::new("Bad file")
        .with_duration(Duration::from_secs(6))
        .with_raised_at(start);

    assert!(!notice.is_expired_at(start + Duration::from_secs(5)));
    assert!(notice.is_expired_at(start + Duration::from_secs(6)));
}

#[test]
fn test_remaining_percent() {
    let start = Instant::now();
    let notice = ErrorNotice::new("x")
        .with_duration(Duration::from_secs(10))
        .with_raised_at(start);

    assert_eq!(notice.remaining_percent_at(start), 1.0);
    assert!((notice.remaining_percent_at(start + Duration::from_secs(5)) - 0.5).abs() < 1e-6);
    assert_eq!(notice.remaining_percent_at(start + Duration::from_secs(20)), 0.0);
}

#[test]
fn test_store_dismisses_expired_error() {
    let mut store = SessionStore::new(Settings {
        error_dismiss_ms: 1000,
        ..Default::default()
    });
    store.set_error("Please upload a valid CSV file");
    let raised = store.state().error.as_ref().unwrap().raised_at;

    assert!(!store.dismiss_expired_error(raised + Duration::from_millis(500)));
    assert!(store.state().error.is_some());

    assert!(store.dismiss_expired_error(raised + Duration::from_millis(1000)));
    assert!(store.state().error.is_none());
    assert!(!store.dismiss_expired_error(raised + Duration::from_millis(2000)));
}

#[test]
fn test_newer_error_replaces_older() {
    let mut store = SessionStore::default();
    store.set_error("first");
    store.set_error("second");
    assert_eq!(store.state().error_message(), Some("second"));
    store.clear_error();
    assert_eq!(store.state().error_message(), None);
}
