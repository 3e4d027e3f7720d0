// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how records get sorted for display.
//!
//! Score descending, then original position ascending. Position is unique per
//! record, so the comparison is a total order and the display order is fully
//! determined by the scores, no matter what order the records were in before.

use std::cmp::Ordering;

use crate::types::RankedRecord;

/// Compare two ranked records for display.
///
/// Sort order:
/// 1. **Score** - descending (higher score first)
/// 2. **Original position** - ascending, the only tie-breaker
///
/// The explicit tie-break means the result doesn't depend on sort stability or
/// on the order the records were handed in.
///
/// # Example
///
/// ```ignore
/// let early = RankedRecord { position: 1, score: 1, .. };
/// let late = RankedRecord { position: 2, score: 1, .. };
///
/// assert_eq!(compare_ranked(&early, &late), Ordering::Less);
/// ```
pub fn compare_ranked(a: &RankedRecord, b: &RankedRecord) -> Ordering {
    match b.score.cmp(&a.score) {
        Ordering::Equal => a.position.cmp(&b.position),
        ord => ord,
    }
}
