// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whole-word, case-insensitive matching of a literal query word.
//!
//! "cat" matches "the Cat sat" but not "category". The word is escaped before it
//! becomes a pattern, so `c++`, `a.b` or `(x)` are matched as the text they are.
//!
//! Boundaries are only demanded on the sides of the word that start or end with
//! a word character. A plain `\b…\b` would make `c++` unmatchable before a space,
//! since there is no word boundary between `+` and ` `.

use regex::{Regex, RegexBuilder};

use crate::error::{FilterError, Result};

/// A compiled query word.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    word: String,
    regex: Regex,
}

impl WordMatcher {
    pub fn new(word: &str) -> Result<Self> {
        let regex = RegexBuilder::new(&whole_word_pattern(word))
            .case_insensitive(true)
            .build()
            .map_err(|source| FilterError::Pattern {
                word: word.to_string(),
                source,
            })?;

        Ok(Self {
            word: word.to_string(),
            regex,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Does `text` contain the word as a whole word?
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        !text.is_empty() && self.regex.is_match(text)
    }
}

/// Build the pattern for `word`: escaped, with `\b` on word-character edges.
pub fn whole_word_pattern(word: &str) -> String {
    let lead = if word.chars().next().is_some_and(is_word_char) {
        r"\b"
    } else {
        ""
    };
    let trail = if word.chars().next_back().is_some_and(is_word_char) {
        r"\b"
    } else {
        ""
    };
    format!("{lead}{}{trail}", regex::escape(word))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
