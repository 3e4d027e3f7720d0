// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while setting a filter up.
//!
//! The query path itself never fails: missing fields become empty text and
//! metacharacters in words are escaped. Everything here happens at construction
//! time, when a bad configuration or an unreadable record document is caught
//! before the first query runs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring or building a filter.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The configuration is well-formed JSON but semantically unusable.
    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    /// The configuration file could not be read.
    #[error("Failed to read {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration or record document is not valid JSON.
    #[error("Invalid JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The container selector did not resolve to an array of records.
    #[error("Container {pointer:?} {reason}")]
    Container { pointer: String, reason: String },

    /// A word could not be compiled into a matcher.
    #[error("Cannot match word {word:?}: {source}")]
    Pattern {
        word: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, FilterError>;
