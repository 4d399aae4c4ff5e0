//! Filter dimensions of the directory pages
//!
//! Each page has a fixed set of single-select dimensions. A dimension knows
//! which record field it reads and how a selected value is compared against it.

use std::ops::{Bound, RangeBounds};

use shared::ListingKind;

/// Selectable label mapped to a numeric interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    pub label: &'static str,
    pub lower: Bound<f64>,
    pub upper: Bound<f64>,
}

impl Bucket {
    pub const fn new(label: &'static str, lower: Bound<f64>, upper: Bound<f64>) -> Self {
        Self { label, lower, upper }
    }

    pub fn contains(&self, amount: f64) -> bool {
        (self.lower, self.upper).contains(&amount)
    }
}

pub const FUNDING_BUCKETS: &[Bucket] = &[
    Bucket::new("$0-50K", Bound::Included(0.0), Bound::Included(50_000.0)),
    Bucket::new("$50K-250K", Bound::Excluded(50_000.0), Bound::Included(250_000.0)),
    Bucket::new("$250K-1M", Bound::Excluded(250_000.0), Bound::Included(1_000_000.0)),
    Bucket::new("$1M-5M", Bound::Excluded(1_000_000.0), Bound::Included(5_000_000.0)),
    Bucket::new("$5M+", Bound::Excluded(5_000_000.0), Bound::Unbounded),
];

pub const TEAM_SIZE_BUCKETS: &[Bucket] = &[
    Bucket::new("1-10", Bound::Included(1.0), Bound::Included(10.0)),
    Bucket::new("11-50", Bound::Included(11.0), Bound::Included(50.0)),
    Bucket::new("51-200", Bound::Included(51.0), Bound::Included(200.0)),
    Bucket::new("201-500", Bound::Included(201.0), Bound::Included(500.0)),
    Bucket::new("500+", Bound::Excluded(500.0), Bound::Unbounded),
];

/// Label selecting records with no (or zero) funding
pub const PRE_SEED_LABEL: &str = "Pre-Seed";

/// Numeric dimension: field, fallback field, buckets and the unclassified label
#[derive(Debug, Clone, PartialEq)]
pub struct NumericDimension {
    pub field: &'static str,
    pub fallback: Option<&'static str>,
    pub buckets: &'static [Bucket],
    pub unclassified: Option<&'static str>,
}

impl NumericDimension {
    pub fn bucket(&self, label: &str) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.label == label)
    }
}

/// How a selected value is compared with a record
#[derive(Debug, Clone, PartialEq)]
pub enum MatchRule {
    /// Case-insensitive equality with a text field
    Exact { field: &'static str },
    /// Field contains the value, or any tag does
    ContainsOrTag { field: &'static str },
    /// Amount falls into the selected bucket
    NumericBucket(NumericDimension),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub name: &'static str,
    pub rule: MatchRule,
}

impl Dimension {
    pub const fn exact(name: &'static str, field: &'static str) -> Self {
        Self {
            name,
            rule: MatchRule::Exact { field },
        }
    }

    pub const fn contains_or_tag(name: &'static str, field: &'static str) -> Self {
        Self {
            name,
            rule: MatchRule::ContainsOrTag { field },
        }
    }
}

/// Dimensions of one directory page
#[derive(Debug, Clone, PartialEq)]
pub struct DirectorySchema {
    pub kind: ListingKind,
    pub dimensions: Vec<Dimension>,
}

impl DirectorySchema {
    pub fn for_kind(kind: ListingKind) -> Self {
        match kind {
            ListingKind::Startup => Self::startups(),
            ListingKind::Investor => Self::investors(),
        }
    }

    pub fn startups() -> Self {
        Self {
            kind: ListingKind::Startup,
            dimensions: vec![
                Dimension::exact("stage", "stage"),
                Dimension::contains_or_tag("industry", "industry"),
                Dimension {
                    name: "fundingRange",
                    rule: MatchRule::NumericBucket(NumericDimension {
                        field: "fundingAmount",
                        fallback: Some("funding"),
                        buckets: FUNDING_BUCKETS,
                        unclassified: Some(PRE_SEED_LABEL),
                    }),
                },
                Dimension::exact("location", "location"),
                Dimension {
                    name: "teamSize",
                    rule: MatchRule::NumericBucket(NumericDimension {
                        field: "teamSize",
                        fallback: Some("employees"),
                        buckets: TEAM_SIZE_BUCKETS,
                        unclassified: None,
                    }),
                },
            ],
        }
    }

    pub fn investors() -> Self {
        Self {
            kind: ListingKind::Investor,
            dimensions: vec![
                Dimension::exact("investorType", "investorType"),
                Dimension::contains_or_tag("industry", "industry"),
                Dimension::exact("stage", "preferredStage"),
                Dimension::exact("location", "location"),
                Dimension {
                    name: "ticketSize",
                    rule: MatchRule::NumericBucket(NumericDimension {
                        field: "ticketSize",
                        fallback: Some("investmentAmount"),
                        buckets: FUNDING_BUCKETS,
                        unclassified: None,
                    }),
                },
            ],
        }
    }

    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    pub fn dimension_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.dimensions.iter().map(|d| d.name)
    }
}
