//! Tests for index construction and rebuilds.

use std::collections::{BTreeMap, HashMap};

use sifter::{build_index, positions_are_permutation, Engine, FieldDescriptor};

use super::common::{fruit_engine, fruit_fields, fruit_records, make_record};

#[test]
fn test_index_snapshot_of_fruit_corpus() {
    let index = build_index(fruit_records(), &fruit_fields());
    assert_eq!(index.len(), 3);
    assert!(positions_are_permutation(&index));

    let record = index.get(1).unwrap();
    assert_eq!(record.original_position, 1);
    assert_eq!(record.field_texts, vec!["banana", "apple tart"]);
    assert_eq!(index.weight(0), 3);
}

#[test]
fn test_string_map_records() {
    let mut first = HashMap::new();
    first.insert("title".to_string(), "apple".to_string());
    let mut second = HashMap::new();
    second.insert("body".to_string(), "apple".to_string());

    let mut engine = Engine::new(vec![first, second], &fruit_fields()).unwrap();
    let outcome = engine.query("apple");
    assert_eq!(outcome.visible_positions(), vec![0, 1]);
}

#[test]
fn test_borrowed_records() {
    let mut record = BTreeMap::new();
    record.insert("name".to_string(), "Rust Book".to_string());
    let records = vec![record];

    let fields = vec![FieldDescriptor::new("name", 2)];
    let mut engine = Engine::new(records.iter(), &fields).unwrap();
    assert_eq!(engine.query("rust").get(0).unwrap().score, 2);
}

#[test]
fn test_snapshot_ignores_later_edits() {
    let mut records = fruit_records();
    let mut engine = Engine::new(records.clone(), &fruit_fields()).unwrap();

    records[2] = make_record("kiwi", "");
    assert_eq!(engine.query("kiwi").visible_count, 0);

    engine.reindex(records);
    assert_eq!(engine.query("kiwi").visible_positions(), vec![2]);
}

#[test]
fn test_reindex_drops_last_outcome() {
    let mut engine = fruit_engine();
    engine.query("apple");
    assert!(engine.last_outcome().is_some());

    engine.reindex(vec![make_record("one", "")]);
    assert!(engine.last_outcome().is_none());
    assert_eq!(engine.len(), 1);
    assert_eq!(engine.index().fields(), fruit_fields().as_slice());
}
