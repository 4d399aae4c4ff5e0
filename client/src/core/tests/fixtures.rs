//! Test fixtures for the core client logic

use serde_json::{Value, json};

use crate::core::listing::ListingRecord;
use crate::core::notifications::NotificationList;

/// Small startup directory covering every startup dimension
pub fn startup_listings() -> Vec<ListingRecord> {
    vec![
        ListingRecord::new("s1", "LedgerLeaf")
            .with_summary("Bookkeeping automation for small businesses")
            .with_tags(["fintech", "saas"])
            .with_text("stage", "Seed")
            .with_text("industry", "Financial Services")
            .with_text("location", "Berlin")
            .with_number("fundingAmount", 250_000.0)
            .with_number("teamSize", 8.0),
        ListingRecord::new("s2", "GreenGrid")
            .with_summary("Battery storage marketplace")
            .with_tags(["cleantech", "energy"])
            .with_text("stage", "Series A")
            .with_text("industry", "Energy")
            .with_text("location", "London")
            .with_number("funding", 3_000_000.0)
            .with_number("employees", 42.0),
        ListingRecord::new("s3", "MediMind")
            .with_summary("AI triage for clinics")
            .with_tags(["healthtech", "ai"])
            .with_text("stage", "pre-seed")
            .with_text("industry", "Healthcare")
            .with_text("location", "Berlin"),
        ListingRecord::new("s4", "PayPilot")
            .with_summary("Cross-border payroll")
            .with_tags(["FinTech", "payments"])
            .with_text("stage", "Series B")
            .with_text("industry", "Payments")
            .with_text("location", "Lisbon")
            .with_text("fundingAmount", "$7.5M")
            .with_number("teamSize", 600.0),
    ]
}

/// One listing per funding amount {0, 50000, 50001, 250000, 5000001}
pub fn funding_ladder() -> Vec<ListingRecord> {
    [0.0, 50_000.0, 50_001.0, 250_000.0, 5_000_001.0]
        .iter()
        .enumerate()
        .map(|(i, amount)| ListingRecord::new(format!("f{i}"), format!("Fund {i}")).with_number("fundingAmount", *amount))
        .collect()
}

/// Raw server notifications: 3 unread + 2 read
pub fn raw_notifications() -> Vec<Value> {
    vec![
        json!({"_id": "n1", "type": "message", "title": "New message", "message": "Hi", "read": false, "createdAt": "2024-05-01T10:00:00Z"}),
        json!({"_id": "n2", "type": "new_user", "title": "Welcome", "message": "Ada joined", "read": true, "createdAt": "2024-05-01T11:00:00Z"}),
        json!({"id": "n3", "type": "warning", "title": "Profile", "message": "Incomplete profile", "read": false}),
        json!({"_id": "n4", "type": "feature_update", "title": "AI match", "message": "Try it", "read": true}),
        json!({"_id": "n5", "title": "Meeting", "message": "Tomorrow 10:00", "read": false}),
    ]
}

pub fn notification_list() -> NotificationList {
    NotificationList::ingest(raw_notifications())
}

pub fn ids(records: &[&ListingRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}
