//! Property checks of the filter engine over a grid of inputs
//!
//! Every combination of query and predicate values drawn from the fixture
//! data is checked for the ordering, subset and idempotence guarantees.


use std::collections::BTreeMap;

use client::core::{DirectorySchema, ListingRecord, filter_listings};
use fixtures::*;

const QUERIES: &[&str] = &["", "fin", "AI", "berlin", "zzz"];

fn predicate_grid(schema: &DirectorySchema) -> Vec<BTreeMap<String, String>> {
    let values: &[(&str, &[&str])] = &[
        ("stage", &["", "Seed", "Series A", "Pre-Seed"]),
        ("location", &["", "Berlin", "Lisbon"]),
        ("fundingRange", &["", "$0-50K", "$5M+", "Pre-Seed", "nonsense"]),
    ];

    let mut grid = vec![BTreeMap::new()];
    for (dimension, options) in values {
        assert!(schema.dimension(dimension).is_some());
        grid = grid
            .into_iter()
            .flat_map(|base| {
                options.iter().map(move |value| {
                    let mut next = base.clone();
                    next.insert(dimension.to_string(), value.to_string());
                    next
                })
            })
            .collect();
    }
    grid
}

fn positions(source: &[ListingRecord], result: &[&ListingRecord]) -> Vec<usize> {
    result
        .iter()
        .map(|r| source.iter().position(|s| s.id == r.id).unwrap())
        .collect()
}

#[test]
fn test_results_are_ordered_subsets() {
    let source = startups();
    let schema = DirectorySchema::startups();

    for query in QUERIES {
        for predicates in predicate_grid(&schema) {
            let result = filter_listings(&source, query, &predicates, &schema);
            let idx = positions(&source, &result);
            assert!(idx.windows(2).all(|w| w[0] < w[1]), "order broken for {query:?} {predicates:?}");
        }
    }
}

#[test]
fn test_adding_a_predicate_never_widens() {
    let source = startups();
    let schema = DirectorySchema::startups();

    for query in QUERIES {
        let unfiltered = ids(&filter_listings(&source, query, &BTreeMap::new(), &schema));
        for predicates in predicate_grid(&schema) {
            let narrowed = ids(&filter_listings(&source, query, &predicates, &schema));
            assert!(narrowed.iter().all(|id| unfiltered.contains(id)));
        }
    }
}

#[test]
fn test_filter_is_deterministic() {
    let source = startups();
    let schema = DirectorySchema::startups();

    for query in QUERIES {
        for predicates in predicate_grid(&schema) {
            let first = ids(&filter_listings(&source, query, &predicates, &schema));
            let second = ids(&filter_listings(&source, query, &predicates, &schema));
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_unknown_labels_match_nothing() {
    let source = startups();
    let schema = DirectorySchema::startups();

    for query in QUERIES {
        let predicates = BTreeMap::from([("fundingRange".to_string(), "nonsense".to_string())]);
        assert!(filter_listings(&source, query, &predicates, &schema).is_empty());
    }
}

#[test]
fn test_identity_when_nothing_is_set() {
    let source = startups();
    let schema = DirectorySchema::startups();
    let unset: BTreeMap<String, String> = schema.dimension_names().map(|d| (d.to_string(), String::new())).collect();

    let result = filter_listings(&source, "", &unset, &schema);
    assert_eq!(result.len(), source.len());
    assert_eq!(positions(&source, &result), (0..source.len()).collect::<Vec<_>>());
}
