// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Record index construction.
//!
//! The index is a snapshot: each record's weighted fields are extracted exactly
//! once, in descriptor order, and stored next to the record's original position.
//! Queries only ever read it.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSITIONS_PERMUTATION**: `records[i].original_position == i`, so positions
//!    form exactly `0..len()`.
//! 2. **FIELDS_ALIGNED**: every record has one text per field descriptor.
//! 3. **CANONICAL_ORDER**: records are stored in source order and never resorted.
//!    Display order is a separate view (see `search`).

use tracing::{debug, instrument};

use crate::contracts::check_index_well_formed;
use crate::source::FieldSource;
use crate::types::{FieldDescriptor, Record};

/// Immutable, canonically ordered snapshot of the records being filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordIndex {
    fields: Vec<FieldDescriptor>,
    records: Vec<Record>,
}

impl RecordIndex {
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Records in canonical (original position) order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Weight of field `k`.
    #[inline]
    pub fn weight(&self, k: usize) -> u32 {
        self.fields[k].weight
    }
}

/// Build a fresh index from `records`, extracting each field once.
///
/// A field the record doesn't have is stored as an empty string: it never
/// matches, but the record can still match on its other fields.
///
/// Rebuilding produces a new index; nothing is merged into an old one.
#[instrument(skip_all, fields(fields = fields.len()))]
pub fn build_index<S, I>(records: I, fields: &[FieldDescriptor]) -> RecordIndex
where
    S: FieldSource,
    I: IntoIterator<Item = S>,
{
    let records: Vec<Record> = records
        .into_iter()
        .enumerate()
        .map(|(original_position, source)| Record {
            original_position,
            field_texts: fields
                .iter()
                .map(|field| source.field_text(&field.selector).unwrap_or_default())
                .collect(),
        })
        .collect();

    debug!(records = records.len(), "built record index");

    let index = RecordIndex {
        fields: fields.to_vec(),
        records,
    };
    check_index_well_formed(&index);
    index
}

/// Positions form an exact permutation of `0..len()`.
pub fn positions_are_permutation(index: &RecordIndex) -> bool {
    let mut seen = vec![false; index.len()];
    for record in index.records() {
        match seen.get_mut(record.original_position) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    seen.into_iter().all(|s| s)
}
