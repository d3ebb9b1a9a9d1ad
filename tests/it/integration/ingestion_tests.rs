//! Upload scheduling: background ingestion and cancel-and-replace.

use crate::helpers::numeric_csv;
use csvchart::app::{IngestOutcome, SessionStore, shared, spawn_ingestion};
use csvchart::data::{ParseError, ingest};

#[test]
fn test_background_ingestion_applies_result() {
    let session = shared(SessionStore::default());

    let handle = spawn_ingestion(&session, "data.csv", b"a,b\n1,2\n".to_vec()).unwrap();
    assert_eq!(handle.join().unwrap(), IngestOutcome::Applied);

    let store = session.read();
    assert!(!store.state().loading);
    assert_eq!(store.state().schema.headers(), ["a", "b"]);
}

#[test]
fn test_wrong_extension_never_starts_a_thread() {
    let session = shared(SessionStore::default());

    let err = spawn_ingestion(&session, "data.txt", b"a\n1\n".to_vec()).unwrap_err();
    assert!(matches!(err, ParseError::WrongExtension { .. }));

    let store = session.read();
    assert!(!store.state().loading);
    assert!(store.state().error_message().is_some());
}

#[test]
fn test_rejected_name_does_not_disturb_inflight_upload() {
    let mut store = SessionStore::default();
    let ticket = store.begin_ingestion("big.csv");

    assert!(store.accept_upload("notes.txt").is_err());
    assert!(store.state().loading);
    assert!(store.is_current(ticket));

    let outcome = store.finish_ingestion(ticket, ingest("big.csv", b"a\n1\n"));
    assert_eq!(outcome, IngestOutcome::Applied);
}

#[test]
fn test_later_upload_replaces_earlier_one() {
    let mut store = SessionStore::default();
    let first = store.begin_ingestion("first.csv");
    let second = store.begin_ingestion("second.csv");
    assert!(!store.is_current(first));

    // The earlier parse finishes last; it must not win
    let second_result = ingest("second.csv", b"second\n2\n");
    let first_result = ingest("first.csv", b"first\n1\n");

    assert_eq!(store.finish_ingestion(second, second_result), IngestOutcome::Applied);
    assert_eq!(store.finish_ingestion(first, first_result), IngestOutcome::Superseded);
    assert_eq!(store.state().schema.headers(), ["second"]);
}

#[test]
fn test_loading_holds_until_newest_finishes() {
    let mut store = SessionStore::default();
    let first = store.begin_ingestion("first.csv");
    let second = store.begin_ingestion("second.csv");

    store.finish_ingestion(first, ingest("first.csv", b"first\n1\n"));
    assert!(store.state().loading);
    assert!(!store.state().has_data());

    store.finish_ingestion(second, ingest("second.csv", b"second\n2\n"));
    assert!(!store.state().loading);
    assert!(store.state().has_data());
}

#[test]
fn test_concurrent_uploads_settle_on_last_started() {
    let session = shared(SessionStore::default());
    let large = numeric_csv(&["big_a", "big_b"], 20_000);

    let first = spawn_ingestion(&session, "large.csv", large.into_bytes()).unwrap();
    let second = spawn_ingestion(&session, "small.csv", b"small\n1\n".to_vec()).unwrap();

    // The first parse may finish before the second upload starts
    let outcomes = [first.join().unwrap(), second.join().unwrap()];
    assert!(matches!(outcomes[0], IngestOutcome::Applied | IngestOutcome::Superseded));
    assert_eq!(outcomes[1], IngestOutcome::Applied);

    let store = session.read();
    assert!(!store.state().loading);
    assert_eq!(store.state().schema.headers(), ["small"]);
}

#[test]
fn test_failed_newest_upload_reports_error() {
    let session = shared(SessionStore::default());
    let handle = spawn_ingestion(&session, "bad.csv", b"a,b\n1\n".to_vec()).unwrap();

    assert!(matches!(handle.join().unwrap(), IngestOutcome::Failed(ParseError::Malformed { .. })));
    let store = session.read();
    assert!(!store.state().loading);
    assert!(!store.state().has_data());
    assert!(store.state().error_message().is_some());
}
