//! Tests for the directory filter engine

use std::collections::BTreeMap;

use super::fixtures::*;
use crate::core::filter::{filter_listings, matches_query, record_amount};
use crate::core::listing::ListingRecord;
use crate::core::schema::{DirectorySchema, MatchRule};

fn predicates(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn run(source: &[ListingRecord], query: &str, pairs: &[(&str, &str)]) -> Vec<String> {
    ids(&filter_listings(source, query, &predicates(pairs), &DirectorySchema::startups()))
}

#[test]
fn test_identity_filter_keeps_order() {
    let source = startup_listings();
    assert_eq!(run(&source, "", &[]), vec!["s1", "s2", "s3", "s4"]);

    // Unset dimensions are ignored
    assert_eq!(run(&source, "", &[("stage", ""), ("industry", "")]), vec!["s1", "s2", "s3", "s4"]);
}

#[test]
fn test_query_matches_name_summary_and_tags() {
    let source = startup_listings();

    assert_eq!(run(&source, "fin", &[]), vec!["s1", "s4"]);
    assert_eq!(run(&source, "AI", &[]), vec!["s3"]);
    assert_eq!(run(&source, "greengrid", &[]), vec!["s2"]);
    assert_eq!(run(&source, "payroll", &[]), vec!["s4"]);
    assert!(run(&source, "biotech", &[]).is_empty());
}

#[test]
fn test_exact_dimension_is_case_insensitive_equality() {
    let source = startup_listings();

    assert_eq!(run(&source, "", &[("stage", "seed")]), vec!["s1"]);
    assert_eq!(run(&source, "", &[("stage", "Pre-Seed")]), vec!["s3"]);
    assert_eq!(run(&source, "", &[("location", "berlin")]), vec!["s1", "s3"]);
}

#[test]
fn test_industry_matches_field_or_tag() {
    let source = startup_listings();

    // s1 by field ("Financial Services"), s4 by tag ("FinTech")
    assert_eq!(run(&source, "", &[("industry", "fin")]), vec!["s1", "s4"]);
    assert_eq!(run(&source, "", &[("industry", "Energy")]), vec!["s2"]);
}

#[test]
fn test_funding_buckets_with_fallback_and_parsing() {
    let source = startup_listings();

    assert_eq!(run(&source, "", &[("fundingRange", "$50K-250K")]), vec!["s1"]);
    // s2 only has the fallback `funding` field
    assert_eq!(run(&source, "", &[("fundingRange", "$1M-5M")]), vec!["s2"]);
    // s4 carries "$7.5M" as text
    assert_eq!(run(&source, "", &[("fundingRange", "$5M+")]), vec!["s4"]);
    // s3 has no funding at all
    assert_eq!(run(&source, "", &[("fundingRange", "Pre-Seed")]), vec!["s3"]);
}

#[test]
fn test_funding_bucket_boundaries() {
    let ladder = funding_ladder();

    assert_eq!(run(&ladder, "", &[("fundingRange", "$0-50K")]), vec!["f0", "f1"]);
    assert_eq!(run(&ladder, "", &[("fundingRange", "$50K-250K")]), vec!["f2", "f3"]);
    assert!(run(&ladder, "", &[("fundingRange", "$250K-1M")]).is_empty());
    assert_eq!(run(&ladder, "", &[("fundingRange", "$5M+")]), vec!["f4"]);
    assert_eq!(run(&ladder, "", &[("fundingRange", "Pre-Seed")]), vec!["f0"]);
}

#[test]
fn test_team_size_buckets() {
    let source = startup_listings();

    assert_eq!(run(&source, "", &[("teamSize", "1-10")]), vec!["s1"]);
    assert_eq!(run(&source, "", &[("teamSize", "11-50")]), vec!["s2"]);
    assert_eq!(run(&source, "", &[("teamSize", "500+")]), vec!["s4"]);
    assert!(run(&source, "", &[("teamSize", "51-200")]).is_empty());
}

#[test]
fn test_dimensions_and_query_compose_with_and() {
    let source = startup_listings();

    assert_eq!(run(&source, "", &[("location", "Berlin"), ("stage", "Seed")]), vec!["s1"]);
    assert_eq!(run(&source, "fin", &[("location", "Lisbon")]), vec!["s4"]);
    assert!(run(&source, "fin", &[("location", "London")]).is_empty());
}

#[test]
fn test_malformed_values_never_match() {
    let source = startup_listings();

    assert!(run(&source, "", &[("fundingRange", "$10B+")]).is_empty());
    assert!(run(&source, "", &[("teamSize", "lots")]).is_empty());
    assert!(run(&source, "", &[("founderAge", "30")]).is_empty());
}

#[test]
fn test_missing_field_is_non_match() {
    let source = vec![ListingRecord::new("x", "NoFields")];

    assert!(run(&source, "", &[("stage", "Seed")]).is_empty());
    assert!(run(&source, "", &[("industry", "Energy")]).is_empty());
    assert!(run(&source, "", &[("teamSize", "1-10")]).is_empty());
}

#[test]
fn test_empty_source_yields_empty() {
    assert!(run(&[], "", &[]).is_empty());
    assert!(run(&[], "anything", &[("stage", "Seed")]).is_empty());
}

#[test]
fn test_filter_is_pure() {
    let source = startup_listings();
    let first = run(&source, "fin", &[("industry", "fin")]);
    let second = run(&source, "fin", &[("industry", "fin")]);
    assert_eq!(first, second);
}

#[test]
fn test_filter_never_adds_records() {
    let source = startup_listings();
    let all = run(&source, "", &[]);
    let by_predicate = run(&source, "", &[("location", "Berlin")]);
    let combined = run(&source, "ai", &[("location", "Berlin")]);

    assert!(by_predicate.iter().all(|id| all.contains(id)));
    assert!(combined.iter().all(|id| by_predicate.contains(id)));
}

#[test]
fn test_record_amount_fallback_chain() {
    let schema = DirectorySchema::startups();
    let Some(MatchRule::NumericBucket(funding)) = schema.dimension("fundingRange").map(|d| d.rule.clone()) else {
        panic!("fundingRange should be a bucket dimension");
    };

    let primary = ListingRecord::new("a", "A").with_number("fundingAmount", 10.0).with_number("funding", 99.0);
    let fallback = ListingRecord::new("b", "B").with_number("funding", 99.0);
    let neither = ListingRecord::new("c", "C");

    assert_eq!(record_amount(&primary, &funding), Some(10.0));
    assert_eq!(record_amount(&fallback, &funding), Some(99.0));
    assert_eq!(record_amount(&neither, &funding), Some(0.0));

    // A present but unparseable primary does not fall through
    let malformed = ListingRecord::new("d", "D").with_text("fundingAmount", "TBD").with_number("funding", 99.0);
    assert_eq!(record_amount(&malformed, &funding), None);
}

#[test]
fn test_unparseable_amount_matches_no_bucket() {
    let source = vec![
        ListingRecord::new("tbd", "Stealth Co").with_text("fundingAmount", "TBD"),
        ListingRecord::new("zero", "Garage Co"),
    ];

    for label in ["$0-50K", "Pre-Seed", "$5M+"] {
        let matched = run(&source, "", &[("fundingRange", label)]);
        assert!(!matched.contains(&"tbd".to_string()), "{label} matched a malformed amount");
    }
    assert_eq!(run(&source, "", &[("fundingRange", "Pre-Seed")]), vec!["zero"]);
    assert_eq!(run(&source, "", &[("fundingRange", "$0-50K")]), vec!["zero"]);
}

#[test]
fn test_exact_dimension_does_not_trim() {
    let source = vec![
        ListingRecord::new("a", "A").with_text("location", "Berlin "),
        ListingRecord::new("b", "B").with_text("location", "berlin"),
    ];
    assert_eq!(run(&source, "", &[("location", "BERLIN")]), vec!["b"]);
}

#[test]
fn test_investor_schema_dimensions() {
    let investors = vec![
        ListingRecord::new("i1", "Northwind Ventures")
            .with_text("investorType", "VC")
            .with_text("preferredStage", "Seed")
            .with_number("ticketSize", 500_000.0),
        ListingRecord::new("i2", "Ada Angel")
            .with_text("investorType", "Angel")
            .with_text("preferredStage", "Pre-Seed")
            .with_number("investmentAmount", 25_000.0),
    ];
    let schema = DirectorySchema::investors();

    let seed_vcs = filter_listings(&investors, "", &predicates(&[("investorType", "vc"), ("stage", "seed")]), &schema);
    assert_eq!(ids(&seed_vcs), vec!["i1"]);

    let small_tickets = filter_listings(&investors, "", &predicates(&[("ticketSize", "$0-50K")]), &schema);
    assert_eq!(ids(&small_tickets), vec!["i2"]);
}

#[test]
fn test_matches_query_empty_needle() {
    let record = ListingRecord::new("x", "Anything");
    assert!(matches_query(&record, ""));
}
