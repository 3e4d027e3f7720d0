//! Input events from a binding layer, and the initial programmatic query.

use sifter::{Engine, Query, Trigger};

use super::common::{fruit_engine, fruit_fields, fruit_records};

#[test]
fn test_typing_session() {
    let mut engine = fruit_engine();

    // mid-word keys run nothing
    for (text, key) in [("a", 'a'), ("ap", 'p'), ("apple", 'e')] {
        assert!(engine
            .handle(Trigger::Keystroke {
                text: text.to_string(),
                key,
            })
            .is_none());
    }

    let outcome = engine
        .handle(Trigger::Keystroke {
            text: "apple ".to_string(),
            key: ' ',
        })
        .unwrap();
    assert_eq!(outcome.visible_count, 3);

    let outcome = engine
        .handle(Trigger::WordCompleted("apple tart ".to_string()))
        .unwrap();
    assert_eq!(outcome.visible_positions(), vec![0, 1]);

    // backspacing to empty resets
    let outcome = engine
        .handle(Trigger::Keystroke {
            text: String::new(),
            key: '\u{8}',
        })
        .unwrap();
    assert_eq!(outcome.visible_count, 3);
}

#[test]
fn test_cleared_event_resets() {
    let mut engine = fruit_engine();
    engine.query("banana");
    assert_eq!(engine.handle(Trigger::Cleared).unwrap().visible_count, 3);
}

#[test]
fn test_initial_query_string_and_list_agree() {
    let from_text =
        Engine::with_initial_query(fruit_records(), &fruit_fields(), "apple tart").unwrap();
    let from_list =
        Engine::with_initial_query(fruit_records(), &fruit_fields(), ["apple", "tart"]).unwrap();
    assert_eq!(from_text.last_outcome(), from_list.last_outcome());
}

#[test]
fn test_echo_writes_query_back() {
    assert_eq!(Query::from_words(["apple", "tart"]).echo(), "apple tart ");
    assert_eq!(Query::from_words([" "]).echo(), "");
}
