// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Selection and ordering: from tallies to a ranked, thresholded view.
//!
//! Two passes over two different orders, kept apart on purpose:
//!
//! ```text
//! canonical order ──▶ visibility (included ∧ score ≥ threshold)
//!        │
//!        └──▶ copy ──▶ sort (score desc, position asc) ──▶ display order
//! ```
//!
//! Visibility is decided while walking the canonical index, where slot `i` is
//! record `i`, so a decision can never land on the wrong record. The display
//! order is a fresh vector; canonical storage is never resorted, which is what
//! lets the next query start from a clean slate.

use crate::index::RecordIndex;
use crate::scoring::ranking::compare_ranked;
use crate::scoring::ScoreBoard;
use crate::types::{RankedRecord, Score};

/// Output of [`select_and_order`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Every record, score descending, position ascending.
    pub display_order: Vec<RankedRecord>,
    pub visible_count: usize,
}

/// Decide visibility in canonical order, then sort a copy for display.
pub fn select_and_order(index: &RecordIndex, board: &ScoreBoard, threshold: Score) -> Selection {
    let mut display_order: Vec<RankedRecord> = index
        .records()
        .iter()
        .map(|record| {
            let tally = board.get(record.original_position);
            RankedRecord {
                position: record.original_position,
                score: tally.score,
                included: tally.included,
                visible: tally.is_visible(threshold),
            }
        })
        .collect();

    let visible_count = display_order.iter().filter(|r| r.visible).count();

    // Stable, and tie-broken on position anyway.
    display_order.sort_by(compare_ranked);

    Selection {
        display_order,
        visible_count,
    }
}
