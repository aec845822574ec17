//! Error index, report format and error types.

use crate::property::PropertyKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Error messages grouped by property key.
///
/// Messages for one key keep the order in which their rules were registered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorIndex {
    fields: HashMap<PropertyKey, Vec<String>>,
}

impl ErrorIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Append a message for a key.
    pub fn add(&mut self, key: PropertyKey, message: impl Into<String>) {
        self.fields.entry(key).or_default().push(message.into());
    }

    /// Messages for a key, empty if the key has none.
    pub fn get(&self, key: &str) -> &[String] {
        self.fields.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any key has messages.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total number of messages.
    pub fn len(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    /// Keys that have at least one message.
    pub fn keys(&self) -> impl Iterator<Item = &PropertyKey> {
        self.fields.keys()
    }

    /// Iterate over keys and their messages.
    pub fn iter(&self) -> impl Iterator<Item = (&PropertyKey, &[String])> {
        self.fields.iter().map(|(key, messages)| (key, messages.as_slice()))
    }
}

/// A single failed rule, as shown in a [`ValidationReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The property key that failed validation
    pub field: String,
    /// The rule code (e.g. "email", "length", "less_than")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Serializable summary of the last validation, in rule registration order.
///
/// ```json
/// {
///   "valid": false,
///   "errors": [
///     {"field": "name", "code": "min_length", "message": "'name' must have at least 3 characters."}
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Create a report from failed rules; valid when there are none.
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Errors reported for one field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }
}

/// Returned by [`ValidationResult::into_result`](crate::ValidationResult::into_result)
/// when at least one rule failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: {} error(s)", .errors.len())]
pub struct ValidationFailure {
    /// Failure messages in rule registration order
    pub errors: Vec<String>,
}

impl ValidationFailure {
    /// Create a failure from its messages.
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }
}

/// Invalid [`ValidatorConfig`](crate::ValidatorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid email pattern: {0}")]
    EmailPattern(#[from] regex::Error),

    #[error("Invalid number format: decimal '{decimal}', grouping {grouping:?}")]
    NumberFormat {
        decimal: char,
        grouping: Option<char>,
    },

    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
