// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Incremental, in-memory word filtering over structured records.
//!
//! A fixed collection of records is indexed once, one text snapshot per
//! weighted field. Each query scores every record by adding the weight of each
//! field a query word appears in (whole word, case-insensitive), keeps the
//! records that reach the threshold, and ranks them by score with original
//! position as the tie-break.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  source.rs  │────▶│   index.rs   │────▶│  scoring/    │────▶│  search/     │
//! │ (FieldSource│     │ (build_index,│     │ (ScoreBoard, │     │ (select_and_ │
//! │  selectors) │     │ RecordIndex) │     │ WordMatcher) │     │  order)      │
//! └─────────────┘     └──────────────┘     └──────────────┘     └──────────────┘
//!                            ▲                                         │
//!                            │          ┌──────────────┐               │
//!                            └──────────│  engine.rs   │◀──────────────┘
//!                                       │ (Engine,     │
//!                                       │  query.rs)   │
//!                                       └──────────────┘
//! ```
//!
//! Canonical order (the index) and display order (each outcome) are separate
//! arrays. The index is never resorted, so re-querying can't misalign scores.
//!
//! # Usage
//!
//! ```ignore
//! use sifter::{Engine, FieldDescriptor};
//!
//! let fields = vec![FieldDescriptor::new("title", 3), FieldDescriptor::new("body", 1)];
//! let mut engine = Engine::new(records, &fields)?;
//!
//! let outcome = engine.query("apple pie");
//! println!("{} of {} shown", outcome.visible_count, engine.len());
//! ```

// Module declarations
pub mod config;
pub mod contracts;
mod engine;
mod error;
mod index;
mod query;
pub mod scoring;
mod search;
pub mod source;
mod types;

pub mod testing;

// Re-exports for public API
pub use config::{validate_fields, FilterConfig};
pub use engine::Engine;
pub use error::{FilterError, Result};
pub use index::{build_index, positions_are_permutation, RecordIndex};
pub use query::{Query, Trigger, RESET_TOKEN};
pub use scoring::ranking::compare_ranked;
pub use scoring::{score, ScoreBoard, WordMatcher};
pub use search::{select_and_order, Selection};
pub use source::{select_records, FieldSource};
pub use types::{FieldDescriptor, QueryOutcome, RankedRecord, Record, Score, Tally};
