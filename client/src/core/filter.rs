//! Directory filter engine
//!
//! Pure function of (source, query, predicates): the result is an ordered
//! subset of the source. Nothing here can fail; values that cannot be
//! evaluated are non-matches.

use std::collections::BTreeMap;

use super::listing::ListingRecord;
use super::schema::{DirectorySchema, MatchRule, NumericDimension};

/// Indices into `source` of the records that pass the query and every active predicate
pub fn filter_indices(
    source: &[ListingRecord],
    query: &str,
    predicates: &BTreeMap<String, String>,
    schema: &DirectorySchema,
) -> Vec<usize> {
    let needle = query.to_lowercase();
    let active: Vec<(&str, &str)> = predicates
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(dimension, value)| (dimension.as_str(), value.as_str()))
        .collect();

    source
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_query(record, &needle))
        .filter(|(_, record)| {
            active
                .iter()
                .all(|(dimension, value)| matches_predicate(record, schema, dimension, value))
        })
        .map(|(index, _)| index)
        .collect()
}

/// Records of `source` that pass the query and every active predicate, in source order
pub fn filter_listings<'a>(
    source: &'a [ListingRecord],
    query: &str,
    predicates: &BTreeMap<String, String>,
    schema: &DirectorySchema,
) -> Vec<&'a ListingRecord> {
    filter_indices(source, query, predicates, schema)
        .into_iter()
        .map(|index| &source[index])
        .collect()
}

/// Free-text match against name, summary and tags; `needle` is already lowercased
pub fn matches_query(record: &ListingRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    contains_ci(&record.name, needle)
        || contains_ci(&record.summary_text, needle)
        || record.tags.iter().any(|tag| contains_ci(tag, needle))
}

/// Evaluate one predicate; unknown dimensions never match
pub fn matches_predicate(record: &ListingRecord, schema: &DirectorySchema, dimension: &str, value: &str) -> bool {
    let Some(dimension) = schema.dimension(dimension) else {
        return false;
    };

    match &dimension.rule {
        MatchRule::Exact { field } => record
            .field(field)
            .is_some_and(|v| v.as_text().to_lowercase() == value.to_lowercase()),
        MatchRule::ContainsOrTag { field } => {
            let needle = value.to_lowercase();
            record.field(field).is_some_and(|v| contains_ci(&v.as_text(), &needle))
                || record.tags.iter().any(|tag| contains_ci(tag, &needle))
        }
        MatchRule::NumericBucket(numeric) => matches_bucket(record, numeric, value),
    }
}

fn matches_bucket(record: &ListingRecord, numeric: &NumericDimension, label: &str) -> bool {
    let Some(amount) = record_amount(record, numeric) else {
        return false;
    };

    if numeric.unclassified == Some(label) {
        return amount == 0.0;
    }

    match numeric.bucket(label) {
        Some(bucket) => bucket.contains(amount),
        None => false,
    }
}

/// Amount of the first present field (primary, then fallback), zero if neither
/// is present; `None` when the present value is not a number
pub fn record_amount(record: &ListingRecord, numeric: &NumericDimension) -> Option<f64> {
    match std::iter::once(numeric.field)
        .chain(numeric.fallback)
        .find_map(|field| record.field(field))
    {
        Some(value) => value.as_number(),
        None => Some(0.0),
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
