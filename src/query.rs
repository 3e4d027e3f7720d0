// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query input: turning whatever the caller has into a canonical word list.
//!
//! Free text is split on ASCII spaces. Empty and whitespace-only tokens are
//! dropped before they can reach the scorer. Anything that normalizes to no
//! words at all, and the lone blank token `[" "]`, is the reset query: show
//! every record, score nothing.

use crate::types::Score;

/// The token that spells "reset" in an explicit word list.
pub const RESET_TOKEN: &str = " ";

/// A normalized query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Score these words. Never empty, no blank entries.
    Words(Vec<String>),
    /// Show everything.
    Reset,
}

impl Query {
    /// Split free text on ASCII spaces.
    pub fn parse(text: &str) -> Self {
        Self::from_tokens(text.split(' '))
    }

    /// Normalize an explicit word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_tokens(words)
    }

    fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = tokens
            .into_iter()
            .filter(|t| !t.as_ref().trim().is_empty())
            .map(|t| t.as_ref().to_string())
            .collect();

        if words.is_empty() {
            Query::Reset
        } else {
            Query::Words(words)
        }
    }

    pub fn is_reset(&self) -> bool {
        matches!(self, Query::Reset)
    }

    /// Canonical word list; the reset query is `[" "]`.
    pub fn words(&self) -> Vec<String> {
        match self {
            Query::Words(words) => words.clone(),
            Query::Reset => vec![RESET_TOKEN.to_string()],
        }
    }

    /// Minimum score to be visible: one point per word.
    ///
    /// With additive field weights this leans towards records matching every
    /// word without strictly requiring it: one title hit can carry a record
    /// past a two-word threshold.
    pub fn threshold(&self) -> Score {
        match self {
            Query::Words(words) => words.len() as Score,
            Query::Reset => 0,
        }
    }

    /// The query as input text, `"w1 w2 "`, for writing back into an input
    /// control. The reset query echoes as an empty input.
    pub fn echo(&self) -> String {
        match self {
            Query::Words(words) => format!("{} ", words.join(" ")),
            Query::Reset => String::new(),
        }
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Query::parse(text)
    }
}

impl From<String> for Query {
    fn from(text: String) -> Self {
        Query::parse(&text)
    }
}

impl From<Vec<String>> for Query {
    fn from(words: Vec<String>) -> Self {
        Query::from_words(words)
    }
}

impl From<Vec<&str>> for Query {
    fn from(words: Vec<&str>) -> Self {
        Query::from_words(words)
    }
}

impl From<&[&str]> for Query {
    fn from(words: &[&str]) -> Self {
        Query::from_words(words)
    }
}

impl<const N: usize> From<[&str; N]> for Query {
    fn from(words: [&str; N]) -> Self {
        Query::from_words(words)
    }
}

/// Events from an input control, as the binding layer reports them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// A word boundary was typed; carries the full input text.
    WordCompleted(String),
    /// The input was emptied.
    Cleared,
    /// A raw key release with the input text after it.
    Keystroke { text: String, key: char },
}

impl Trigger {
    /// The query this event asks for, if any.
    ///
    /// An empty input always resets. Otherwise only a space completes a word;
    /// other keys are still mid-word and run nothing.
    pub fn into_query(self) -> Option<Query> {
        match self {
            Trigger::WordCompleted(text) => Some(Query::parse(&text)),
            Trigger::Cleared => Some(Query::Reset),
            Trigger::Keystroke { text, .. } if text.is_empty() => Some(Query::Reset),
            Trigger::Keystroke { text, key: ' ' } => Some(Query::parse(&text)),
            Trigger::Keystroke { .. } => None,
        }
    }
}
