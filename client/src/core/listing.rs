//! Directory listing records (startups and investors)
//!
//! A listing is decoded from whatever JSON object the directory API returns:
//! the identity, display and search fields are picked out by their known wire
//! names, every other scalar becomes a category field.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;

const ID_KEYS: &[&str] = &["id", "_id"];
const NAME_KEYS: &[&str] = &["name", "companyName", "firmName", "startupName"];
const SUMMARY_KEYS: &[&str] = &["description", "summary", "bio", "tagline"];
const TAGS_KEY: &str = "tags";

/// Value of a single-valued category field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Text form used by the string comparisons
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(text) => Cow::Borrowed(text),
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => Cow::Owned(format!("{}", *n as i64)),
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
        }
    }

    /// Numeric form used by bucket dimensions; unparseable text is `None`
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(text) => parse_amount(text),
        }
    }
}

/// Parse amounts like `250000`, `"$1,500,000"` or `"2.5M"`
pub fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '_') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let (digits, multiplier) = match cleaned.chars().last().map(|c| c.to_ascii_uppercase()) {
        Some('K') => (&cleaned[..cleaned.len() - 1], 1_000.0),
        Some('M') => (&cleaned[..cleaned.len() - 1], 1_000_000.0),
        Some('B') => (&cleaned[..cleaned.len() - 1], 1_000_000_000.0),
        _ => (cleaned.as_str(), 1.0),
    };

    digits
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(|n| n * multiplier)
}

/// Startup or investor as seen by the directory pages
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct ListingRecord {
    pub id: String,
    pub name: String,
    pub summary_text: String,
    pub tags: Vec<String>,
    pub fields: BTreeMap<String, FieldValue>,
}

impl ListingRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            summary_text: String::new(),
            tags: Vec::new(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary_text = summary.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_text(mut self, field: &str, value: impl Into<String>) -> Self {
        self.fields.insert(field.to_string(), FieldValue::Text(value.into()));
        self
    }

    pub fn with_number(mut self, field: &str, value: f64) -> Self {
        self.fields.insert(field.to_string(), FieldValue::Number(value));
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}

impl From<Map<String, Value>> for ListingRecord {
    fn from(mut object: Map<String, Value>) -> Self {
        let id = take_first(&mut object, ID_KEYS)
            .and_then(|v| scalar_text(&v))
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let name = take_first(&mut object, NAME_KEYS)
            .and_then(|v| scalar_text(&v))
            .unwrap_or_default();
        let summary_text = take_first(&mut object, SUMMARY_KEYS)
            .and_then(|v| scalar_text(&v))
            .unwrap_or_default();

        let tags = match object.remove(TAGS_KEY) {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
            Some(Value::String(joined)) => joined
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect(),
            _ => Vec::new(),
        };

        let fields = object
            .into_iter()
            .filter_map(|(key, value)| {
                let field = match value {
                    Value::String(text) if !text.trim().is_empty() => FieldValue::Text(text),
                    Value::Number(n) => FieldValue::Number(n.as_f64()?),
                    _ => return None,
                };
                Some((key, field))
            })
            .collect();

        Self {
            id,
            name,
            summary_text,
            tags,
            fields,
        }
    }
}

/// Remove every key in `keys`, keeping the first non-null value
fn take_first(object: &mut Map<String, Value>, keys: &[&str]) -> Option<Value> {
    let mut found = None;
    for key in keys {
        if let Some(value) = object.remove(*key) {
            if found.is_none() && !value.is_null() {
                found = Some(value);
            }
        }
    }
    found
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
