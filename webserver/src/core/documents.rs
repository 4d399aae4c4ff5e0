//! Helpers over schemaless JSON documents

use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

pub const ID_FIELD: &str = "_id";
pub const CREATED_AT_FIELD: &str = "createdAt";

/// `_id` of a document, falling back to `id`
pub fn document_id(document: &Value) -> Option<&str> {
    document
        .get(ID_FIELD)
        .or_else(|| document.get("id"))
        .and_then(Value::as_str)
}

/// Id held by a reference field, whether still an id or already populated
pub fn reference_id<'a>(document: &'a Value, field: &str) -> Option<&'a str> {
    match document.get(field)? {
        Value::String(id) => Some(id),
        populated @ Value::Object(_) => document_id(populated),
        _ => None,
    }
}

/// Server fields of a new document; client-sent values are overwritten
pub fn stamp(mut document: Map<String, Value>, id: String, created_at: DateTime<Utc>) -> Value {
    document.insert(ID_FIELD.to_string(), Value::String(id));
    document.insert(CREATED_AT_FIELD.to_string(), Value::String(format_created_at(created_at)));
    Value::Object(document)
}

/// `createdAt` text: RFC 3339 in UTC with millisecond precision
pub fn format_created_at(created_at: DateTime<Utc>) -> String {
    created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Merge `patch` into `document`, never touching `_id`; true if anything changed
pub fn apply_patch(document: &mut Value, patch: &Map<String, Value>) -> bool {
    let Some(object) = document.as_object_mut() else {
        return false;
    };

    let mut changed = false;
    for (key, value) in patch {
        if key == ID_FIELD {
            continue;
        }
        if object.get(key) != Some(value) {
            object.insert(key.clone(), value.clone());
            changed = true;
        }
    }
    changed
}

/// Meeting where the user is the startup or the investor
pub fn involves_user(meeting: &Value, user_id: &str) -> bool {
    reference_id(meeting, "startup") == Some(user_id) || reference_id(meeting, "investor") == Some(user_id)
}

/// Message exchanged between `a` and `b`, either direction
pub fn in_conversation(message: &Value, a: &str, b: &str) -> bool {
    let sender = reference_id(message, "sender");
    let receiver = reference_id(message, "receiver");
    (sender == Some(a) && receiver == Some(b)) || (sender == Some(b) && receiver == Some(a))
}

/// Replace each id in `fields` with the referenced document, when known
pub fn populate(document: &mut Value, fields: &[&str], lookup: &HashMap<String, Value>) {
    for field in fields {
        let Some(id) = document.get(*field).and_then(Value::as_str) else {
            continue;
        };
        if let Some(referenced) = lookup.get(id).cloned() {
            document[*field] = referenced;
        }
    }
}

/// Stable sort by `createdAt`; RFC 3339 text in one timezone sorts chronologically
pub fn sort_by_created(documents: &mut [Value]) {
    documents.sort_by(|a, b| {
        let a = a.get(CREATED_AT_FIELD).and_then(Value::as_str).unwrap_or_default();
        let b = b.get(CREATED_AT_FIELD).and_then(Value::as_str).unwrap_or_default();
        a.cmp(b)
    });
}

/// Index documents by id for `populate`
pub fn index_by_id(documents: Vec<Value>) -> HashMap<String, Value> {
    documents
        .into_iter()
        .filter_map(|doc| Some((document_id(&doc)?.to_string(), doc)))
        .collect()
}
