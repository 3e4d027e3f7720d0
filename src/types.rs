// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a filter.
//!
//! These types define how field descriptors, indexed records, per-query tallies
//! and ranked output fit together.
//!
//! | Type             | Lifetime            | Purpose                              |
//! |------------------|---------------------|--------------------------------------|
//! | `FieldDescriptor`| configuration       | Which field to extract, what it's worth |
//! | `Record`         | index build         | Immutable text snapshot of one item  |
//! | `Tally`          | one query           | Score and inclusion of one record    |
//! | `RankedRecord`   | one query's output  | A record's place in the display order |
//! | `QueryOutcome`   | one query's output  | The full ranked view                 |
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Record**: `field_texts.len() == descriptors.len()`. Field `k` of every
//!   record lines up with descriptor `k`; scoring indexes weights by `k`.
//!
//! - **RecordIndex**: `records[i].original_position == i`. Canonical storage is
//!   never reordered, so a position doubles as an array index.
//!
//! - **QueryOutcome**: `visible_count == display_order.iter().filter(visible).count()`
//!   and `display_order` is a permutation of all records.

use serde::{Deserialize, Serialize};

/// Accumulated score of a record for one query.
///
/// Weights are `u32`, and a score is at most `words × Σ weights`, so `u64`
/// leaves plenty of headroom.
pub type Score = u64;

// =============================================================================
// CONFIGURATION TYPES
// =============================================================================

/// One weighted field: where to find the text and what a match in it is worth.
///
/// Descriptors are ordered. The order decides how `Record::field_texts` lines
/// up, so reordering descriptors requires a re-index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Field selector handed to a [`FieldSource`](crate::FieldSource).
    pub selector: String,
    /// Score added when a query word matches inside this field. Must be positive.
    pub weight: u32,
}

impl FieldDescriptor {
    pub fn new(selector: impl Into<String>, weight: u32) -> Self {
        Self {
            selector: selector.into(),
            weight,
        }
    }
}

// =============================================================================
// INDEX TYPES
// =============================================================================

/// An indexable item, reduced to the text of its weighted fields.
///
/// Built once per index build and never mutated afterwards. Per-query state
/// lives in [`Tally`], owned by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// 0-based position in the source ordering. The only stable tie-break.
    pub original_position: usize,
    /// Extracted text, one entry per field descriptor, in descriptor order.
    /// An absent field is stored as an empty string.
    pub field_texts: Vec<String>,
}

impl Record {
    /// Text of field `k`, or `""` when `k` is out of range.
    #[inline]
    pub fn field_text(&self, k: usize) -> &str {
        self.field_texts.get(k).map(String::as_str).unwrap_or("")
    }
}

/// Per-query state of one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub score: Score,
    /// At least one word matched at least one field during this query.
    pub included: bool,
}

impl Tally {
    /// Visibility rule: included and at or above the threshold.
    #[inline]
    pub fn is_visible(&self, threshold: Score) -> bool {
        self.included && self.score >= threshold
    }
}

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// A record's entry in the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedRecord {
    /// Identity of the record: its original position.
    pub position: usize,
    pub score: Score,
    pub included: bool,
    pub visible: bool,
}

/// Everything the presentation layer needs after a query.
///
/// `display_order` holds every record, visible or not, so a renderer can hide
/// the rest and re-insert the full list in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOutcome {
    /// Normalized words the query ran with (`[" "]` for a reset).
    pub words: Vec<String>,
    /// Minimum score a record needed.
    pub threshold: Score,
    /// All records, score descending, original position ascending.
    pub display_order: Vec<RankedRecord>,
    pub visible_count: usize,
}

impl QueryOutcome {
    /// Visible records in display order.
    pub fn visible(&self) -> impl Iterator<Item = &RankedRecord> + '_ {
        self.display_order.iter().filter(|r| r.visible)
    }

    /// Positions of visible records in display order.
    pub fn visible_positions(&self) -> Vec<usize> {
        self.visible().map(|r| r.position).collect()
    }

    /// Look up a record's entry by original position.
    pub fn get(&self, position: usize) -> Option<&RankedRecord> {
        self.display_order.iter().find(|r| r.position == position)
    }

    pub fn is_empty(&self) -> bool {
        self.display_order.is_empty()
    }
}
