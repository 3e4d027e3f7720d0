// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query controller: one engine, one index, one query at a time.
//!
//! An [`Engine`] owns its record index and its score board. Every query takes
//! `&mut self` and runs to completion (reset, score, select, order) before it
//! returns, so a caller can never observe a half-scored state. Engines share
//! nothing, so two filters over different record sets can't interfere.
//!
//! ```ignore
//! let mut engine = Engine::new(records, &fields)?;
//! let outcome = engine.query("apple pie");
//! for entry in outcome.visible() {
//!     render(entry.position);
//! }
//! ```

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::config::{validate_fields, FilterConfig};
use crate::contracts::check_outcome_consistent;
use crate::error::Result;
use crate::index::{build_index, RecordIndex};
use crate::query::{Query, Trigger};
use crate::scoring::{ScoreBoard, WordMatcher};
use crate::search::select_and_order;
use crate::source::{select_records, FieldSource};
use crate::types::{FieldDescriptor, QueryOutcome};

/// An incremental filter over a fixed set of records.
#[derive(Debug, Clone)]
pub struct Engine {
    index: RecordIndex,
    board: ScoreBoard,
    last: Option<QueryOutcome>,
}

impl Engine {
    /// Index `records` with `fields`. Fails only on an invalid field list.
    pub fn new<S, I>(records: I, fields: &[FieldDescriptor]) -> Result<Self>
    where
        S: FieldSource,
        I: IntoIterator<Item = S>,
    {
        validate_fields(fields)?;
        let index = build_index(records, fields);
        info!(
            records = index.len(),
            fields = fields.len(),
            "filter initialized"
        );

        Ok(Self {
            board: ScoreBoard::new(index.len()),
            index,
            last: None,
        })
    }

    /// Build an engine and run an initial programmatic query once.
    pub fn with_initial_query<S, I>(
        records: I,
        fields: &[FieldDescriptor],
        query: impl Into<Query>,
    ) -> Result<Self>
    where
        S: FieldSource,
        I: IntoIterator<Item = S>,
    {
        let mut engine = Self::new(records, fields)?;
        engine.query(query);
        Ok(engine)
    }

    /// Pick records out of a JSON document using `config`'s selectors.
    pub fn from_document(document: &Value, config: &FilterConfig) -> Result<Self> {
        config.validate()?;
        let records = select_records(document, &config.container, &config.single)?;
        Self::new(records, &config.fields)
    }

    pub fn index(&self) -> &RecordIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Outcome of the most recent query, if one has run since the last build.
    pub fn last_outcome(&self) -> Option<&QueryOutcome> {
        self.last.as_ref()
    }

    /// Run a query to completion and return the ranked view.
    #[instrument(skip_all)]
    pub fn query(&mut self, query: impl Into<Query>) -> &QueryOutcome {
        let query = query.into();
        let threshold = query.threshold();

        match &query {
            Query::Reset => self.board.include_all(self.index.len()),
            Query::Words(words) => {
                let matchers = compile_lenient(words);
                self.board.rescore(&self.index, &matchers);
            }
        }

        let selection = select_and_order(&self.index, &self.board, threshold);
        let outcome = QueryOutcome {
            words: query.words(),
            threshold,
            display_order: selection.display_order,
            visible_count: selection.visible_count,
        };
        check_outcome_consistent(&outcome, self.index.len());

        debug!(
            words = ?outcome.words,
            threshold,
            visible = outcome.visible_count,
            total = self.index.len(),
            "query complete"
        );

        self.last.insert(outcome)
    }

    /// React to an input event. Returns `None` for events that run no query.
    pub fn handle(&mut self, trigger: Trigger) -> Option<&QueryOutcome> {
        let query = trigger.into_query()?;
        Some(self.query(query))
    }

    /// Replace the index with a fresh snapshot of `records`.
    ///
    /// Needed whenever the underlying content changed; queries never re-read
    /// records on their own. The previous outcome is dropped because its
    /// positions refer to the old snapshot.
    pub fn reindex<S, I>(&mut self, records: I)
    where
        S: FieldSource,
        I: IntoIterator<Item = S>,
    {
        let fields = self.index.fields().to_vec();
        self.index = build_index(records, &fields);
        self.board.reset(self.index.len());
        self.last = None;
        info!(records = self.index.len(), "filter reindexed");
    }
}

/// Compile words, skipping any that can't be matched instead of failing the
/// whole query. A skipped word still counts towards the threshold.
fn compile_lenient(words: &[String]) -> Vec<WordMatcher> {
    words
        .iter()
        .filter_map(|word| match WordMatcher::new(word) {
            Ok(matcher) => Some(matcher),
            Err(err) => {
                warn!(%err, "skipping unmatchable word");
                None
            }
        })
        .collect()
}
