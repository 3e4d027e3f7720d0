//! Tests for picking records out of a JSON document.

use serde_json::json;
use sifter::{select_records, Engine, FieldDescriptor, FilterConfig, FilterError};

fn library() -> serde_json::Value {
    json!({
        "templates": [
            {"kind": "recipe", "title": "Apple pie", "content": "sweet"},
            {"kind": "note", "title": "Shopping", "content": "apple"},
            {"title": "Untagged apple", "content": ""},
            {"kind": "recipe", "title": "Tart", "content": "apple tart"}
        ]
    })
}

#[test]
fn test_default_config_selects_every_template() {
    let engine = Engine::from_document(&library(), &FilterConfig::default()).unwrap();
    assert_eq!(engine.len(), 4);
}

#[test]
fn test_key_selector() {
    let doc = library();
    let records = select_records(&doc, "/templates", "kind").unwrap();
    assert_eq!(records.len(), 3);
}

#[test]
fn test_key_value_selector_keeps_document_order() {
    let config = FilterConfig {
        single: "kind=recipe".to_string(),
        ..FilterConfig::default()
    };
    let mut engine = Engine::from_document(&library(), &config).unwrap();
    assert_eq!(engine.len(), 2);

    // position 0 is "Apple pie", position 1 is "Tart"
    assert_eq!(engine.index().get(1).unwrap().field_text(0), "Tart");
    let outcome = engine.query("apple");
    assert_eq!(outcome.visible_positions(), vec![0, 1]);
    assert_eq!(outcome.get(0).unwrap().score, 3);
    assert_eq!(outcome.get(1).unwrap().score, 1);
}

#[test]
fn test_root_array_container() {
    let doc = json!([{"title": "a"}, {"title": "b"}]);
    let config = FilterConfig {
        container: String::new(),
        ..FilterConfig::default()
    };
    assert_eq!(Engine::from_document(&doc, &config).unwrap().len(), 2);
}

#[test]
fn test_nested_selectors() {
    let doc = json!({
        "templates": [
            {"meta": {"name": "Pancakes", "tags": ["breakfast", "sweet"]}},
            {"meta": {"name": "Omelette", "tags": ["breakfast", "savory"]}}
        ]
    });
    let config = FilterConfig::with_fields(vec![
        FieldDescriptor::new("meta.name", 3),
        FieldDescriptor::new("/meta/tags", 1),
    ]);
    let mut engine = Engine::from_document(&doc, &config).unwrap();
    assert_eq!(engine.index().get(0).unwrap().field_text(1), "breakfast sweet");

    let outcome = engine.query("sweet");
    assert_eq!(outcome.visible_positions(), vec![0]);
}

#[test]
fn test_missing_container() {
    let err = Engine::from_document(&json!({"other": []}), &FilterConfig::default()).unwrap_err();
    assert!(matches!(err, FilterError::Container { .. }));
}

#[test]
fn test_container_not_an_array() {
    let err =
        Engine::from_document(&json!({"templates": {"a": 1}}), &FilterConfig::default()).unwrap_err();
    assert!(matches!(err, FilterError::Container { .. }));
}
