// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Filter configuration: which records, which fields, what they're worth.
//!
//! ```json
//! {
//!     "container": "/templates",
//!     "single": "*",
//!     "fields": [
//!         { "selector": "title", "weight": 3 },
//!         { "selector": "content", "weight": 1 }
//!     ]
//! }
//! ```
//!
//! Every key is optional; missing keys fall back to the defaults shown above.
//! A configuration is validated before any record is indexed, so a zero weight
//! or an empty selector fails loudly at construction instead of silently never
//! matching.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};
use crate::source::RecordSelector;
use crate::types::FieldDescriptor;

/// Complete filter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    /// JSON pointer to the array holding the records (`""` is the document root).
    pub container: String,
    /// Which container elements are records (`*`, `key`, or `key=value`).
    pub single: String,
    /// Weighted fields, in the order their texts are stored.
    pub fields: Vec<FieldDescriptor>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            container: "/templates".to_string(),
            single: "*".to_string(),
            fields: vec![
                FieldDescriptor::new("title", 3),
                FieldDescriptor::new("content", 1),
            ],
        }
    }
}

impl FilterConfig {
    /// Configuration with the given fields and the default selectors.
    pub fn with_fields(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: FilterConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| FilterError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Reject configurations that can't produce a meaningful filter.
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.fields)?;

        if !self.container.is_empty() && !self.container.starts_with('/') {
            return Err(FilterError::ConfigInvalid(format!(
                "container {:?} must be a JSON pointer starting with '/'",
                self.container
            )));
        }

        RecordSelector::parse(&self.single)?;
        Ok(())
    }
}

/// Field rules shared by [`FilterConfig::validate`] and programmatic engines.
pub fn validate_fields(fields: &[FieldDescriptor]) -> Result<()> {
    if fields.is_empty() {
        return Err(FilterError::ConfigInvalid(
            "at least one field is required".to_string(),
        ));
    }

    for (k, field) in fields.iter().enumerate() {
        if field.selector.trim().is_empty() {
            return Err(FilterError::ConfigInvalid(format!(
                "field {k} has an empty selector"
            )));
        }
        if field.weight == 0 {
            return Err(FilterError::ConfigInvalid(format!(
                "field {k} ({:?}) must have a positive weight",
                field.selector
            )));
        }
    }

    Ok(())
}
