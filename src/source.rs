// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where record text comes from.
//!
//! The engine never looks inside a record itself. It asks a [`FieldSource`] for
//! the text behind each field selector, once per record per build. Anything that
//! can answer that question can be filtered: JSON values, string maps, or a
//! caller's own type.
//!
//! # JSON selectors
//!
//! | Selector        | Meaning                                  |
//! |-----------------|------------------------------------------|
//! | `/meta/title`   | JSON pointer (RFC 6901)                  |
//! | `meta.title`    | Dotted key path, array indices allowed   |
//!
//! The text of a value mirrors the text content of a structured element: strings
//! as-is, numbers and booleans formatted, arrays and objects joined from their
//! children, `null` empty.
//!
//! # Record selection
//!
//! [`select_records`] picks records out of a document. `container` is a JSON
//! pointer to an array, `single` filters its elements:
//!
//! | `single`     | Elements kept                               |
//! |--------------|---------------------------------------------|
//! | `*`          | all of them                                 |
//! | `key`        | objects that have `key`                     |
//! | `key=value`  | elements whose `key` text equals `value`    |

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::error::{FilterError, Result};

/// Something the engine can pull field text out of.
pub trait FieldSource {
    /// Text content behind `selector`, or `None` when the record has no such field.
    fn field_text(&self, selector: &str) -> Option<String>;
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field_text(&self, selector: &str) -> Option<String> {
        (**self).field_text(selector)
    }
}

impl FieldSource for HashMap<String, String> {
    fn field_text(&self, selector: &str) -> Option<String> {
        self.get(selector).cloned()
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn field_text(&self, selector: &str) -> Option<String> {
        self.get(selector).cloned()
    }
}

impl FieldSource for Value {
    fn field_text(&self, selector: &str) -> Option<String> {
        lookup(self, selector).map(text_content)
    }
}

/// Resolve a selector against a JSON value.
pub fn lookup<'a>(value: &'a Value, selector: &str) -> Option<&'a Value> {
    if selector.starts_with('/') {
        return value.pointer(selector);
    }

    let mut current = value;
    for key in selector.split('.') {
        current = match current {
            Value::Object(map) => map.get(key)?,
            Value::Array(items) => items.get(key.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Flatten a JSON value into plain text.
pub fn text_content(value: &Value) -> String {
    let mut parts = Vec::new();
    collect_text(value, &mut parts);
    parts.join(" ")
}

fn collect_text(value: &Value, parts: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => parts.push(b.to_string()),
        Value::Number(n) => parts.push(n.to_string()),
        Value::String(s) => {
            if !s.is_empty() {
                parts.push(s.clone());
            }
        }
        Value::Array(items) => items.iter().for_each(|item| collect_text(item, parts)),
        Value::Object(map) => map.values().for_each(|item| collect_text(item, parts)),
    }
}

/// How `single` decides whether a container element is a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSelector {
    /// `*`
    Any,
    /// `key`
    HasKey(String),
    /// `key=value`
    KeyEquals(String, String),
}

impl RecordSelector {
    pub fn parse(single: &str) -> Result<Self> {
        let single = single.trim();
        if single.is_empty() {
            return Err(FilterError::ConfigInvalid(
                "record selector must not be empty".to_string(),
            ));
        }
        if single == "*" {
            return Ok(RecordSelector::Any);
        }
        match single.split_once('=') {
            Some((key, _)) if key.trim().is_empty() => Err(FilterError::ConfigInvalid(format!(
                "record selector {single:?} has no key"
            ))),
            Some((key, value)) => Ok(RecordSelector::KeyEquals(
                key.trim().to_string(),
                value.trim().to_string(),
            )),
            None => Ok(RecordSelector::HasKey(single.to_string())),
        }
    }

    pub fn matches(&self, element: &Value) -> bool {
        match self {
            RecordSelector::Any => true,
            RecordSelector::HasKey(key) => lookup(element, key).is_some(),
            RecordSelector::KeyEquals(key, expected) => lookup(element, key)
                .map(|v| text_content(v) == *expected)
                .unwrap_or(false),
        }
    }
}

/// Pick the records out of `document`, in document order.
pub fn select_records<'a>(
    document: &'a Value,
    container: &str,
    single: &str,
) -> Result<Vec<&'a Value>> {
    let selector = RecordSelector::parse(single)?;

    let target = document
        .pointer(container)
        .ok_or_else(|| FilterError::Container {
            pointer: container.to_string(),
            reason: "does not exist".to_string(),
        })?;

    let items = target.as_array().ok_or_else(|| FilterError::Container {
        pointer: container.to_string(),
        reason: "is not an array".to_string(),
    })?;

    Ok(items.iter().filter(|item| selector.matches(item)).collect())
}
