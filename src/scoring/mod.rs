// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how records get their numbers.
//!
//! Scoring is additive and presence-based. A word found in a field adds that
//! field's weight once, however many times the word repeats there. A word found
//! in two fields adds both weights. The sum over all words is the record's
//! score for the query.

mod core;
mod matcher;
pub mod ranking;

pub use core::*;
pub use matcher::*;
