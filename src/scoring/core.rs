// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a query: per-record tallies.
//!
//! A [`ScoreBoard`] holds one [`Tally`] per record, indexed by original
//! position. It belongs to exactly one engine and is rewritten from zero at the
//! start of every query, so a score never leaks from one query into the next.
//!
//! # Key Invariant: Presence, Not Count
//!
//! ```text
//! score(record) = Σ_words Σ_fields [word matches field] × weight(field)
//! ```
//!
//! "apple apple" in a weight-1 field scores 1 for the word "apple", not 2.

use crate::contracts::check_tallies_aligned;
use crate::error::Result;
use crate::index::RecordIndex;
use crate::scoring::matcher::WordMatcher;
use crate::types::{Score, Tally};

/// Per-query score and inclusion of every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    tallies: Vec<Tally>,
}

impl ScoreBoard {
    pub fn new(len: usize) -> Self {
        Self {
            tallies: vec![Tally::default(); len],
        }
    }

    /// Zero every tally and resize to `len` records.
    pub fn reset(&mut self, len: usize) {
        self.tallies.clear();
        self.tallies.resize(len, Tally::default());
    }

    /// Recompute every tally for `matchers` over `index`.
    pub fn rescore(&mut self, index: &RecordIndex, matchers: &[WordMatcher]) {
        self.reset(index.len());

        for matcher in matchers {
            for (tally, record) in self.tallies.iter_mut().zip(index.records()) {
                for (k, text) in record.field_texts.iter().enumerate() {
                    if matcher.is_match(text) {
                        tally.score += Score::from(index.weight(k));
                        tally.included = true;
                    }
                }
            }
        }

        check_tallies_aligned(&self.tallies, index);
    }

    /// The reset query: every record included, nothing scored.
    pub fn include_all(&mut self, len: usize) {
        self.reset(len);
        for tally in &mut self.tallies {
            tally.included = true;
        }
    }

    /// Tally of the record at `position`.
    #[inline]
    pub fn get(&self, position: usize) -> Tally {
        self.tallies.get(position).copied().unwrap_or_default()
    }

    pub fn tallies(&self) -> &[Tally] {
        &self.tallies
    }

    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }
}

/// Compile `words` into matchers, in order.
///
/// Escaped words always compile in practice; a word that still fails (it would
/// have to blow the regex size limit) is reported through the error.
pub fn compile_words(words: &[String]) -> Result<Vec<WordMatcher>> {
    words.iter().map(|w| WordMatcher::new(w)).collect()
}

/// Score `words` against `index`, writing into `board`.
///
/// An empty word list leaves every record at score 0 and not included; showing
/// everything for "no query" is the query controller's call, not the scorer's.
pub fn score(index: &RecordIndex, words: &[String], board: &mut ScoreBoard) -> Result<()> {
    let matchers = compile_words(words)?;
    board.rescore(index, &matchers);
    Ok(())
}
