//! Display ordering: score descending, original position ascending.

use super::common::{engine_for, fruit_engine, order, scores, weighted_engine};

#[test]
fn test_worked_example() {
    let mut engine = fruit_engine();
    let outcome = engine.query(["apple"]);

    assert_eq!(outcome.threshold, 1);
    assert_eq!(outcome.visible_count, 3);
    assert_eq!(order(outcome), vec![0, 1, 2]);
    assert_eq!(scores(outcome), vec![3, 1, 1]);
}

#[test]
fn test_title_match_outranks_earlier_body_match() {
    let mut engine = engine_for(&[("intro", "rust basics"), ("rust tips", "misc")]);
    let outcome = engine.query("rust");
    assert_eq!(order(outcome), vec![1, 0]);
    assert_eq!(scores(outcome), vec![3, 1]);
}

#[test]
fn test_equal_scores_keep_original_position() {
    let mut engine = engine_for(&[
        ("zeta", "common"),
        ("alpha", "common"),
        ("mid", "common"),
    ]);
    let outcome = engine.query("common");
    assert_eq!(order(outcome), vec![0, 1, 2]);
}

#[test]
fn test_hidden_records_are_ordered_too() {
    let mut engine = engine_for(&[("none", ""), ("apple", ""), ("nothing", "apple")]);
    let outcome = engine.query("apple");
    // hidden record 0 sits after every scoring record
    assert_eq!(order(outcome), vec![1, 2, 0]);
    assert!(!outcome.display_order[2].visible);
}

#[test]
fn test_weights_are_configurable() {
    let pairs = [("apple", "x"), ("x", "apple")];

    let mut title_heavy = weighted_engine(&pairs, 5, 1);
    assert_eq!(order(title_heavy.query("apple")), vec![0, 1]);

    let mut body_heavy = weighted_engine(&pairs, 1, 5);
    assert_eq!(order(body_heavy.query("apple")), vec![1, 0]);
}

#[test]
fn test_multi_word_scores_add_up() {
    let mut engine = engine_for(&[
        ("apple", "pie"),
        ("apple pie", "apple pie"),
        ("pie", ""),
    ]);
    let outcome = engine.query("apple pie");
    // 3+1, 3+1+3+1, 3
    assert_eq!(outcome.get(0).unwrap().score, 4);
    assert_eq!(outcome.get(1).unwrap().score, 8);
    assert_eq!(outcome.get(2).unwrap().score, 3);
    assert_eq!(order(outcome), vec![1, 0, 2]);
}
