//! Tests for notification ingestion and list operations

use serde_json::json;

use super::fixtures::*;
use crate::core::notifications::{NotificationList, Phase};
use shared::NotificationType;

fn unique_ids(list: &NotificationList) -> Vec<&str> {
    list.records().iter().map(|r| r.unique_id.as_str()).collect()
}

#[test]
fn test_ingest_keeps_server_order() {
    let list = notification_list();

    assert_eq!(unique_ids(&list), vec!["n1", "n2", "n3", "n4", "n5"]);
    assert_eq!(list.unread_count(), 3);
    assert_eq!(list.unread_ids(), vec!["n1", "n3", "n5"]);
    assert!(list.records().iter().all(|r| r.phase == Phase::Present));
}

#[test]
fn test_ingest_reads_wire_fields() {
    let list = notification_list();

    let n1 = list.get("n1").unwrap();
    assert_eq!(n1.kind, NotificationType::Message);
    assert_eq!(n1.timestamp.as_deref(), Some("2024-05-01T10:00:00Z"));
    assert_eq!(n1.title, "New message");

    assert_eq!(list.get("n2").unwrap().kind, NotificationType::NewUser);
    assert_eq!(list.get("n3").unwrap().timestamp, None);
    // Missing type renders as info
    assert_eq!(list.get("n5").unwrap().kind, NotificationType::Info);
}

#[test]
fn test_field_aliases() {
    let list = NotificationList::ingest(vec![json!({
        "_id": "a",
        "isRead": true,
        "body": "via body",
        "timestamp": "2024-01-01",
        "type": "brand_new_kind"
    })]);

    let record = list.get("a").unwrap();
    assert!(record.read);
    assert_eq!(record.message, "via body");
    assert_eq!(record.timestamp.as_deref(), Some("2024-01-01"));
    assert_eq!(record.kind, NotificationType::Info);
}

#[test]
fn test_unique_id_fallbacks() {
    let list = NotificationList::ingest(vec![
        json!({"title": "stamped", "createdAt": "2024-05-02T08:00:00Z"}),
        json!({"title": "anonymous"}),
        json!({"title": "also anonymous"}),
    ]);

    assert_eq!(list.records()[0].unique_id, "ts-2024-05-02T08:00:00Z");
    assert!(list.records()[1].unique_id.starts_with("rnd-"));
    assert!(list.records()[2].unique_id.starts_with("rnd-"));
    assert_ne!(list.records()[1].unique_id, list.records()[2].unique_id);
}

#[test]
fn test_duplicate_ids_get_suffixes() {
    let list = NotificationList::ingest(vec![
        json!({"_id": "dup"}),
        json!({"_id": "dup"}),
        json!({"_id": "dup"}),
        json!({"_id": "dup-1"}),
    ]);

    assert_eq!(unique_ids(&list), vec!["dup", "dup-1", "dup-2", "dup-1-1"]);
}

#[test]
fn test_non_objects_are_skipped() {
    let list = NotificationList::ingest(vec![json!("junk"), json!(null), json!({"_id": "ok"}), json!([1, 2])]);
    assert_eq!(unique_ids(&list), vec!["ok"]);
}

#[test]
fn test_set_read_returns_previous() {
    let mut list = notification_list();

    assert_eq!(list.set_read("n1", true), Some(false));
    assert_eq!(list.set_read("n1", true), Some(true));
    assert_eq!(list.set_read("missing", true), None);
    assert_eq!(list.unread_count(), 2);
}

#[test]
fn test_mark_all_read() {
    let mut list = notification_list();
    list.mark_all_read();

    assert_eq!(list.unread_count(), 0);
    assert_eq!(list.len(), 5);
}

#[test]
fn test_begin_dismiss_once() {
    let mut list = notification_list();

    assert!(list.begin_dismiss("n2"));
    assert!(list.get("n2").unwrap().is_dismissing());
    assert!(!list.begin_dismiss("n2"));
    assert!(!list.begin_dismiss("missing"));
}

#[test]
fn test_remove_keeps_order_of_rest() {
    let mut list = notification_list();

    let removed = list.remove("n3").unwrap();
    assert_eq!(removed.unique_id, "n3");
    assert_eq!(unique_ids(&list), vec!["n1", "n2", "n4", "n5"]);
    assert!(list.remove("n3").is_none());
}

#[test]
fn test_record_serializes_for_rendering() {
    let list = notification_list();
    let value = serde_json::to_value(list.get("n2").unwrap()).unwrap();

    assert_eq!(value["uniqueId"], "n2");
    assert_eq!(value["type"], "new_user");
    assert_eq!(value["read"], true);
    assert_eq!(value["phase"], "present");
}
