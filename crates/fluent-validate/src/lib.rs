//! # fluent-validate
//!
//! Fluent, strongly typed validation rules for Rust structs.
//!
//! Rules are registered per property through a chaining builder and run in
//! registration order. Every failing rule contributes one message, and the
//! messages of the last run are kept on the validator, both in order and
//! grouped by property.
//!
//! ## Example
//!
//! ```rust,ignore
//! use fluent_validate::prelude::*;
//!
//! #[derive(Properties)]
//! struct CreateUser {
//!     name: String,
//!     email: String,
//!     age: u8,
//! }
//!
//! let mut validator = Validator::<CreateUser>::new();
//! validator
//!     .rule_for(CreateUser::NAME)
//!     .not_empty()
//!     .length(3, 50)
//!     .rule_for(CreateUser::EMAIL)
//!     .email()
//!     .with_message("Please enter a valid email")
//!     .rule_for(CreateUser::AGE)
//!     .less_than(130);
//!
//! let result = validator.validate(&user);
//! if !result.is_valid() {
//!     for message in validator.errors_for(&CreateUser::NAME) {
//!         println!("{message}");
//!     }
//! }
//! ```
//!
//! ## Checks
//!
//! - `not_empty`, `not_blank` - presence
//! - `length(min, max)`, `min_length`, `max_length` - character counts, inclusive
//! - `email`, `email_matching`, `credit_card`, `number`, `url` - formats
//! - `less_than`, `greater_than`, `equal` and friends - comparisons
//! - `not_none`, `some_equal`, `some_not_equal`, `some_url` - optional values
//! - `validate(condition)` and `Validator::must` - custom predicates
//!
//! ## Report Format
//!
//! [`Validator::report`] serializes as:
//!
//! ```json
//! {
//!   "valid": false,
//!   "errors": [
//!     {"field": "name", "code": "length", "message": "The length of 'name' must be between 3 and 50 characters."},
//!     {"field": "email", "code": "email", "message": "Please enter a valid email"}
//!   ]
//! }
//! ```

extern crate self as fluent_validate;

mod builder;
mod config;
mod error;
mod message;
pub mod predicates;
mod property;
mod result;
mod rule;
mod validate;
mod validator;

pub use builder::{IsEmpty, RuleBuilder};
pub use config::{ValidatorConfig, DEFAULT_FALLBACK_MESSAGE};
pub use error::{ConfigError, ErrorIndex, FieldError, ValidationFailure, ValidationReport};
pub use message::ErrorMessage;
pub use predicates::NumberFormat;
pub use property::{Property, PropertyKey};
pub use result::{Evaluation, ValidationResult};
pub use rule::Rule;
pub use validate::Validate;
pub use validator::Validator;

pub use fluent_validate_macros::Properties;

/// Prelude module for validation
pub mod prelude {
    pub use crate::{
        NumberFormat, Properties, Property, Validate, ValidationFailure, ValidationResult,
        Validator, ValidatorConfig,
    };
}
