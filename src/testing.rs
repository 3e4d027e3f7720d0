// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use serde_json::{json, Value};

use crate::types::FieldDescriptor;

/// `title` worth 3, `body` worth 1.
pub fn fruit_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("title", 3),
        FieldDescriptor::new("body", 1),
    ]
}

/// The three-record fruit corpus.
///
/// | Position | title       | body          |
/// |----------|-------------|---------------|
/// | 0        | apple pie   | sweet         |
/// | 1        | banana      | apple tart    |
/// | 2        | fruit       | apple apple   |
pub fn fruit_records() -> Vec<Value> {
    vec![
        make_record("apple pie", "sweet"),
        make_record("banana", "apple tart"),
        make_record("fruit", "apple apple"),
    ]
}

/// A record with a title and a body.
pub fn make_record(title: &str, body: &str) -> Value {
    json!({ "title": title, "body": body })
}

/// Owned word list from string literals.
pub fn words(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
