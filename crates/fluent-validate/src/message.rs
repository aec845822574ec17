//! Default error message templates, one per rule kind.

use thiserror::Error;

/// Default message for a failed rule.
///
/// `Display` renders the final text, with the property label in single quotes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorMessage {
    #[error("The length of '{name}' must be between {min} and {max} characters.")]
    Length { name: String, min: usize, max: usize },

    #[error("'{name}' must have at least {min} characters.")]
    MinLength { name: String, min: usize },

    #[error("'{name}' must have at most {max} characters.")]
    MaxLength { name: String, max: usize },

    #[error("'{name}' should not be empty.")]
    NotEmpty { name: String },

    #[error("'{name}' should not be blank.")]
    NotBlank { name: String },

    #[error("'{name}' is not a valid email address.")]
    Email { name: String },

    #[error("'{name}' is not a valid credit card number.")]
    CreditCard { name: String },

    #[error("'{name}' is not a valid number.")]
    Number { name: String },

    #[error("'{name}' is not a valid URL.")]
    Url { name: String },

    #[error("'{name}' must be less than {bound}.")]
    LessThan { name: String, bound: String },

    #[error("'{name}' must be less than or equal to {bound}.")]
    LessThanOrEqualTo { name: String, bound: String },

    #[error("'{name}' must be greater than {bound}.")]
    GreaterThan { name: String, bound: String },

    #[error("'{name}' must be greater than or equal to {bound}.")]
    GreaterThanOrEqualTo { name: String, bound: String },

    #[error("'{name}' should be equal to {value}.")]
    Equal { name: String, value: String },

    #[error("'{name}' should not be equal to {value}.")]
    NotEqual { name: String, value: String },

    #[error("'{name}' must not be nil.")]
    NotNone { name: String },

    /// Custom property predicate without a message.
    #[error("'{name}' is invalid.")]
    Invalid { name: String },

    /// Whole-model predicate without a message.
    #[error("Validation failed.")]
    ModelInvalid,
}
