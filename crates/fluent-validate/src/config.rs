//! Validator configuration.

use crate::error::{ConfigError, Result};
use crate::predicates::{anchored, NumberFormat};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Message used when a rule resolves to an empty string.
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Invalid result";

/// Settings shared by every rule of one [`Validator`](crate::Validator).
///
/// # Example
///
/// ```ignore
/// use fluent_validate::{NumberFormat, Validator, ValidatorConfig};
///
/// let config = ValidatorConfig::new()
///     .number_format(NumberFormat::german())
///     .fallback_message("invalid");
///
/// let validator = Validator::<Invoice>::with_config(config)?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Replaces messages that resolve to an empty string.
    pub fallback_message: String,
    /// Email pattern, matched against the whole input. Built-in pattern when `None`.
    pub email_pattern: Option<String>,
    /// Separators accepted by `number()` rules.
    pub number_format: NumberFormat,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            email_pattern: None,
            number_format: NumberFormat::default(),
        }
    }
}

impl ValidatorConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Set the fallback message.
    pub fn fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    /// Use a custom email pattern.
    pub fn email_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.email_pattern = Some(pattern.into());
        self
    }

    /// Set the number format.
    pub fn number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = format;
        self
    }

    /// Verify that the configuration can be used.
    pub fn check(&self) -> Result<()> {
        self.compile_email()?;
        self.compile_number()?;
        Ok(())
    }

    pub(crate) fn compile_email(&self) -> Result<Option<Regex>> {
        match &self.email_pattern {
            Some(pattern) => Ok(Some(Regex::new(&anchored(pattern))?)),
            None => Ok(None),
        }
    }

    pub(crate) fn compile_number(&self) -> Result<Regex> {
        let format = self.number_format;
        let invalid = || ConfigError::NumberFormat {
            decimal: format.decimal_separator,
            grouping: format.grouping_separator,
        };
        if !format.is_consistent() {
            return Err(invalid());
        }
        format.to_regex().map_err(|_| invalid())
    }
}
