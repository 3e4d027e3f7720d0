//! Empty inputs, empty record sets and other corners.

use serde_json::Value;
use sifter::{Engine, FieldDescriptor, FilterError, Query};

use super::common::{fruit_engine, fruit_fields};

#[test]
fn test_empty_record_set() {
    let records: Vec<Value> = Vec::new();
    let mut engine = Engine::new(records, &fruit_fields()).unwrap();

    for query in [Query::parse("apple"), Query::Reset] {
        let outcome = engine.query(query);
        assert!(outcome.display_order.is_empty());
        assert_eq!(outcome.visible_count, 0);
    }
}

#[test]
fn test_blank_text_query_shows_everything() {
    let mut engine = fruit_engine();
    assert_eq!(engine.query("").visible_count, 3);
    assert_eq!(engine.query("   ").visible_count, 3);
}

#[test]
fn test_blank_tokens_are_dropped() {
    let mut engine = fruit_engine();
    let outcome = engine.query(vec!["", "apple", "  "]);
    assert_eq!(outcome.words, vec!["apple".to_string()]);
    assert_eq!(outcome.threshold, 1);
}

#[test]
fn test_invalid_weights_rejected_at_construction() {
    let fields = vec![
        FieldDescriptor::new("title", 3),
        FieldDescriptor::new("body", 0),
    ];
    let err = Engine::new(sifter::testing::fruit_records(), &fields).unwrap_err();
    assert!(matches!(err, FilterError::ConfigInvalid(_)));
}

#[test]
fn test_duplicate_words_count_twice() {
    // Each listed word is scored; repeating a word also raises the threshold.
    let mut engine = fruit_engine();
    let outcome = engine.query("banana banana");
    assert_eq!(outcome.threshold, 2);
    assert_eq!(outcome.get(1).unwrap().score, 6);
    assert_eq!(outcome.visible_positions(), vec![1]);
}
