//! Outcome of evaluating a validator against one model.

use crate::error::{ErrorIndex, FieldError, ValidationFailure, ValidationReport};
use serde::{Deserialize, Serialize};

/// `Valid`, or `Invalid` with the failure messages in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    Valid,
    Invalid { errors: Vec<String> },
}

impl ValidationResult {
    /// True iff no rule failed.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Failure messages; empty when valid.
    pub fn errors(&self) -> &[String] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid { errors } => errors,
        }
    }

    /// Convert into a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid { errors } => Err(ValidationFailure::new(errors)),
        }
    }
}

impl From<ValidationResult> for Result<(), ValidationFailure> {
    fn from(result: ValidationResult) -> Self {
        result.into_result()
    }
}

/// Everything one pass over the rules produced.
///
/// Returned by [`Validator::evaluate`](crate::Validator::evaluate), which does
/// not touch the validator's stored state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    pub(crate) failures: Vec<FieldError>,
    pub(crate) index: ErrorIndex,
}

impl Evaluation {
    /// True iff no rule failed.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failure messages in registration order.
    pub fn errors(&self) -> Vec<String> {
        self.failures.iter().map(|f| f.message.clone()).collect()
    }

    /// Messages for one property key.
    pub fn errors_for_key(&self, key: &str) -> &[String] {
        self.index.get(key)
    }

    /// Messages grouped by property key.
    pub fn index(&self) -> &ErrorIndex {
        &self.index
    }

    /// Failed rules with their codes, in registration order.
    pub fn failures(&self) -> &[FieldError] {
        &self.failures
    }

    /// The outcome as a [`ValidationResult`].
    pub fn result(&self) -> ValidationResult {
        if self.is_valid() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid {
                errors: self.errors(),
            }
        }
    }

    /// Serializable report of the failures.
    pub fn report(&self) -> ValidationReport {
        ValidationReport::new(self.failures.clone())
    }
}
