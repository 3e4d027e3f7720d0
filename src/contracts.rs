// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index and for query outcomes.
//!
//! Debug-mode assertions that catch a broken invariant where it happens instead
//! of three queries later, when the display order stops making sense. They are
//! zero-cost in release builds (`debug_assert!`).
//!
//! | Contract Function             | Property                                   |
//! |-------------------------------|--------------------------------------------|
//! | `check_index_well_formed`     | positions are `0..n`, fields aligned       |
//! | `check_tallies_aligned`       | one tally per record                       |
//! | `check_outcome_consistent`    | visibility rule, count, order, completeness |
//!
//! # Usage
//!
//! ```ignore
//! use sifter::contracts::*;
//!
//! // In debug builds, this panics if an invariant is violated
//! check_outcome_consistent(&outcome, index.len());
//!
//! // In release builds, this is a no-op
//! ```

#[cfg(debug_assertions)]
use std::cmp::Ordering;

use crate::index::RecordIndex;
#[cfg(debug_assertions)]
use crate::scoring::ranking::compare_ranked;
use crate::types::{QueryOutcome, Tally};

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check that an index is well-formed.
///
/// # Panics (debug builds only)
/// Panics if a record is stored out of canonical order or its field texts don't
/// line up with the descriptors.
#[inline]
pub fn check_index_well_formed(index: &RecordIndex) {
    #[cfg(debug_assertions)]
    for (i, record) in index.records().iter().enumerate() {
        debug_assert_eq!(
            record.original_position, i,
            "Contract violation: record at slot {} has original_position {}",
            i, record.original_position
        );
        debug_assert_eq!(
            record.field_texts.len(),
            index.fields().len(),
            "Contract violation: record {} has {} field texts for {} fields",
            i,
            record.field_texts.len(),
            index.fields().len()
        );
    }
    #[cfg(not(debug_assertions))]
    let _ = index;
}

// ============================================================================
// SCORING CONTRACTS
// ============================================================================

/// Check that there is exactly one tally per indexed record.
#[inline]
pub fn check_tallies_aligned(tallies: &[Tally], index: &RecordIndex) {
    debug_assert_eq!(
        tallies.len(),
        index.len(),
        "Contract violation: {} tallies for {} records",
        tallies.len(),
        index.len()
    );
}

// ============================================================================
// OUTCOME CONTRACTS
// ============================================================================

/// Check that a query outcome is internally consistent.
///
/// - every visible entry is included and meets the threshold
/// - `visible_count` matches the visible entries
/// - the display order is sorted by score desc, position asc
/// - every record appears exactly once
#[inline]
pub fn check_outcome_consistent(outcome: &QueryOutcome, record_count: usize) {
    #[cfg(debug_assertions)]
    {
        debug_assert_eq!(
            outcome.display_order.len(),
            record_count,
            "Contract violation: display order has {} entries for {} records",
            outcome.display_order.len(),
            record_count
        );

        let mut seen = vec![false; record_count];
        for entry in &outcome.display_order {
            debug_assert!(
                entry.position < record_count && !seen[entry.position],
                "Contract violation: position {} missing or repeated",
                entry.position
            );
            seen[entry.position] = true;

            if entry.visible {
                debug_assert!(
                    entry.included && entry.score >= outcome.threshold,
                    "Contract violation: position {} visible with score {} (threshold {}, included {})",
                    entry.position,
                    entry.score,
                    outcome.threshold,
                    entry.included
                );
            }
        }

        let visible = outcome.display_order.iter().filter(|e| e.visible).count();
        debug_assert_eq!(
            visible, outcome.visible_count,
            "Contract violation: visible_count {} but {} visible entries",
            outcome.visible_count, visible
        );

        for pair in outcome.display_order.windows(2) {
            debug_assert!(
                compare_ranked(&pair[0], &pair[1]) == Ordering::Less,
                "Contract violation: display order not sorted at positions {} / {}",
                pair[0].position,
                pair[1].position
            );
        }
    }
    #[cfg(not(debug_assertions))]
    let _ = (outcome, record_count);
}
