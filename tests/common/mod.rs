//! Shared test utilities and fixtures.

#![allow(dead_code)]

use serde_json::Value;
use sifter::{Engine, FieldDescriptor, QueryOutcome};

// Re-export canonical test utilities from sifter::testing
pub use sifter::testing::{fruit_fields, fruit_records, make_record, words};

/// Engine over the three-record fruit corpus.
pub fn fruit_engine() -> Engine {
    Engine::new(fruit_records(), &fruit_fields()).expect("fruit fields are valid")
}

/// Engine over `(title, body)` pairs with title=3, body=1.
pub fn engine_for(pairs: &[(&str, &str)]) -> Engine {
    let records: Vec<Value> = pairs
        .iter()
        .map(|(title, body)| make_record(title, body))
        .collect();
    Engine::new(records, &fruit_fields()).expect("fruit fields are valid")
}

/// Engine over `(title, body)` pairs with custom weights.
pub fn weighted_engine(pairs: &[(&str, &str)], title: u32, body: u32) -> Engine {
    let records: Vec<Value> = pairs
        .iter()
        .map(|(t, b)| make_record(t, b))
        .collect();
    let fields = vec![
        FieldDescriptor::new("title", title),
        FieldDescriptor::new("body", body),
    ];
    Engine::new(records, &fields).expect("weights are positive")
}

/// Display order as positions.
pub fn order(outcome: &QueryOutcome) -> Vec<usize> {
    outcome.display_order.iter().map(|r| r.position).collect()
}

/// Display order scores.
pub fn scores(outcome: &QueryOutcome) -> Vec<u64> {
    outcome.display_order.iter().map(|r| r.score).collect()
}

/// Assert every visibility decision follows the rule.
pub fn assert_visibility_rule(outcome: &QueryOutcome) {
    for entry in &outcome.display_order {
        if entry.visible {
            assert!(
                entry.included && entry.score >= outcome.threshold,
                "position {} visible with score {} (threshold {}, included {})",
                entry.position,
                entry.score,
                outcome.threshold,
                entry.included
            );
        }
        if !entry.included {
            assert!(!entry.visible, "position {} visible but not included", entry.position);
        }
    }
    assert_eq!(
        outcome.visible_count,
        outcome.display_order.iter().filter(|r| r.visible).count()
    );
}
