use chrono::{Duration, Utc};

use warden_core::models::Report;
use warden_core::traits::IReportStore;
use warden_storage::StorageEngine;

fn sample_report(identifier: &str) -> Report {
    Report {
        identifier: identifier.to_string(),
        message_id: format!("msg-{identifier}"),
        author_name: "p1".to_string(),
        author_steamid: "1".to_string(),
        target_name: "p2".to_string(),
        target_steamid: "2".to_string(),
        reason: "cheating".to_string(),
        server_name: "test server".to_string(),
        server_ip: "127.0.0.1:27015".to_string(),
        map_name: "de_dust2".to_string(),
        created_at: Utc::now(),
        cancelled: false,
        cancelled_by: None,
        cancelled_by_steamid: None,
        cancelled_by_staff: false,
    }
}

// ── Round-trip ────────────────────────────────────────────────────────────

#[test]
fn insert_then_get_round_trips() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let report = sample_report("AAAAAAAAAAAAAA1");

    engine.insert(&report).unwrap();
    let loaded = engine.get("AAAAAAAAAAAAAA1").unwrap().unwrap();

    assert_eq!(loaded.identifier, report.identifier);
    assert_eq!(loaded.message_id, report.message_id);
    assert_eq!(loaded.author_steamid, "1");
    assert_eq!(loaded.target_steamid, "2");
    assert_eq!(loaded.reason, "cheating");
    assert_eq!(loaded.map_name, "de_dust2");
    assert!(!loaded.cancelled);
    assert_eq!(loaded.cancelled_by, None);
}

#[test]
fn get_unknown_identifier_is_none() {
    let engine = StorageEngine::open_in_memory().unwrap();
    assert!(engine.get("ZZZZZZZZZZZZZZ9").unwrap().is_none());
}

#[test]
fn duplicate_identifier_insert_is_an_error() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let report = sample_report("AAAAAAAAAAAAAA1");

    engine.insert(&report).unwrap();
    assert!(engine.insert(&report).is_err());
}

// ── Cancellation invariant ────────────────────────────────────────────────

#[test]
fn mark_cancelled_succeeds_exactly_once() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.insert(&sample_report("AAAAAAAAAAAAAA1")).unwrap();

    assert!(engine
        .mark_cancelled("AAAAAAAAAAAAAA1", "p1", "1", false)
        .unwrap());
    // Second attempt races against nothing but still must return false.
    assert!(!engine
        .mark_cancelled("AAAAAAAAAAAAAA1", "staff", "9", true)
        .unwrap());

    let loaded = engine.get("AAAAAAAAAAAAAA1").unwrap().unwrap();
    assert!(loaded.cancelled);
    assert_eq!(loaded.cancelled_by.as_deref(), Some("p1"));
    assert_eq!(loaded.cancelled_by_steamid.as_deref(), Some("1"));
    assert!(!loaded.cancelled_by_staff, "second cancel must not rewrite");
}

#[test]
fn mark_cancelled_unknown_identifier_returns_false() {
    let engine = StorageEngine::open_in_memory().unwrap();
    assert!(!engine
        .mark_cancelled("ZZZZZZZZZZZZZZ9", "p1", "1", false)
        .unwrap());
}

#[test]
fn staff_cancellation_records_staff_identity() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.insert(&sample_report("AAAAAAAAAAAAAA1")).unwrap();

    assert!(engine
        .mark_cancelled("AAAAAAAAAAAAAA1", "staff", "9", true)
        .unwrap());
    let loaded = engine.get("AAAAAAAAAAAAAA1").unwrap().unwrap();
    assert!(loaded.cancelled_by_staff);
    assert_eq!(loaded.cancelled_by.as_deref(), Some("staff"));
}

// ── Window visibility ─────────────────────────────────────────────────────

#[test]
fn author_lookup_respects_freshness_window() {
    let engine = StorageEngine::open_in_memory().unwrap();

    let mut stale = sample_report("AAAAAAAAAAAAAA1");
    stale.created_at = Utc::now() - Duration::minutes(61);
    engine.insert(&stale).unwrap();

    assert!(engine.find_open_by_author("1", 60).unwrap().is_none());
    // A non-positive window disables the freshness filter.
    assert!(engine.find_open_by_author("1", 0).unwrap().is_some());
}

#[test]
fn author_lookup_returns_most_recent_open_report() {
    let engine = StorageEngine::open_in_memory().unwrap();

    let mut older = sample_report("AAAAAAAAAAAAAA1");
    older.created_at = Utc::now() - Duration::minutes(10);
    engine.insert(&older).unwrap();
    engine.insert(&sample_report("BBBBBBBBBBBBBB2")).unwrap();

    let found = engine.find_open_by_author("1", 60).unwrap().unwrap();
    assert_eq!(found.identifier, "BBBBBBBBBBBBBB2");
}

#[test]
fn cancelled_reports_are_invisible_to_lookups() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.insert(&sample_report("AAAAAAAAAAAAAA1")).unwrap();
    engine
        .mark_cancelled("AAAAAAAAAAAAAA1", "p1", "1", false)
        .unwrap();

    assert!(engine.find_open_by_author("1", 60).unwrap().is_none());
    assert!(engine.find_open_against("2", 60).unwrap().is_empty());
}

#[test]
fn target_lookup_finds_reports_from_any_author() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.insert(&sample_report("AAAAAAAAAAAAAA1")).unwrap();

    let mut other = sample_report("BBBBBBBBBBBBBB2");
    other.author_name = "p3".to_string();
    other.author_steamid = "3".to_string();
    engine.insert(&other).unwrap();

    let against = engine.find_open_against("2", 60).unwrap();
    assert_eq!(against.len(), 2);
}

// ── File persistence ──────────────────────────────────────────────────────

#[test]
fn reports_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports.db");

    {
        let engine = StorageEngine::open(&path).unwrap();
        engine.insert(&sample_report("AAAAAAAAAAAAAA1")).unwrap();
    }

    let engine = StorageEngine::open(&path).unwrap();
    let loaded = engine.get("AAAAAAAAAAAAAA1").unwrap().unwrap();
    assert_eq!(loaded.reason, "cheating");
}
