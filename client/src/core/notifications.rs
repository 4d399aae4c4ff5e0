//! Notification records and the in-memory notification list
//!
//! Records are ingested from raw server objects once; the derived `unique_id`
//! is the record's key for the rest of the session.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashSet;

use shared::NotificationType;

/// UI-only lifecycle of a record in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Present,
    /// Exit animation running; removed once the dismiss delay elapses
    Dismissing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    pub unique_id: String,
    pub read: bool,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub timestamp: Option<String>,
    pub phase: Phase,
}

impl NotificationRecord {
    /// Build a record from a raw server object; `unique_id` is derived, not deduplicated
    pub fn from_raw(object: &Map<String, Value>) -> Self {
        let timestamp = text_field(object, &["timestamp", "createdAt"]);

        Self {
            unique_id: derive_unique_id(object, timestamp.as_deref()),
            read: matches!(object.get("read").or_else(|| object.get("isRead")), Some(Value::Bool(true))),
            kind: NotificationType::from_wire(object.get("type").and_then(Value::as_str)),
            title: text_field(object, &["title"]).unwrap_or_default(),
            message: text_field(object, &["message", "body"]).unwrap_or_default(),
            timestamp,
            phase: Phase::Present,
        }
    }

    pub fn is_dismissing(&self) -> bool {
        self.phase == Phase::Dismissing
    }
}

/// Server `id`, else `_id`, else `ts-<timestamp>`, else `rnd-<uuid>`
pub fn derive_unique_id(object: &Map<String, Value>, timestamp: Option<&str>) -> String {
    if let Some(id) = text_field(object, &["id", "_id"]) {
        return id;
    }

    match timestamp {
        Some(ts) => format!("ts-{ts}"),
        None => format!("rnd-{}", uuid::Uuid::new_v4().simple()),
    }
}

fn text_field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match object.get(*key) {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Ordered notification list keyed by `unique_id`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationList {
    records: Vec<NotificationRecord>,
}

impl NotificationList {
    /// Ingest a server snapshot, keeping server order and making every key unique
    pub fn ingest(raw: Vec<Value>) -> Self {
        let mut seen = HashSet::with_capacity(raw.len());
        let records = raw
            .iter()
            .filter_map(Value::as_object)
            .map(|object| {
                let mut record = NotificationRecord::from_raw(object);
                if !seen.insert(record.unique_id.clone()) {
                    let base = record.unique_id.clone();
                    let mut suffix = 1;
                    while !seen.insert(format!("{base}-{suffix}")) {
                        suffix += 1;
                    }
                    record.unique_id = format!("{base}-{suffix}");
                }
                record
            })
            .collect();

        Self { records }
    }

    pub fn records(&self) -> &[NotificationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, unique_id: &str) -> Option<&NotificationRecord> {
        self.records.iter().find(|r| r.unique_id == unique_id)
    }

    pub fn unread_count(&self) -> usize {
        self.records.iter().filter(|r| !r.read).count()
    }

    pub fn unread_ids(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| !r.read)
            .map(|r| r.unique_id.clone())
            .collect()
    }

    /// Set `read` on one record; returns the previous value, `None` if absent
    pub fn set_read(&mut self, unique_id: &str, read: bool) -> Option<bool> {
        let record = self.records.iter_mut().find(|r| r.unique_id == unique_id)?;
        Some(std::mem::replace(&mut record.read, read))
    }

    pub fn mark_all_read(&mut self) {
        for record in &mut self.records {
            record.read = true;
        }
    }

    /// Enter `Dismissing`; false if absent or already dismissing
    pub fn begin_dismiss(&mut self, unique_id: &str) -> bool {
        match self.records.iter_mut().find(|r| r.unique_id == unique_id) {
            Some(record) if record.phase == Phase::Present => {
                record.phase = Phase::Dismissing;
                true
            }
            _ => false,
        }
    }

    /// Remove one record in place, keeping the order of the rest
    pub fn remove(&mut self, unique_id: &str) -> Option<NotificationRecord> {
        let index = self.records.iter().position(|r| r.unique_id == unique_id)?;
        Some(self.records.remove(index))
    }
}
