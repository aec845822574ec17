//! Validation trait for models that carry their own rules.

use crate::error::ValidationFailure;
use crate::validator::Validator;

/// Trait for types that describe their own rules.
///
/// ## Example
///
/// ```rust,ignore
/// use fluent_validate::prelude::*;
///
/// #[derive(Properties)]
/// struct CreateUser {
///     email: String,
///     username: String,
/// }
///
/// impl Validate for CreateUser {
///     fn rules(validator: &mut Validator<Self>) {
///         validator
///             .rule_for(Self::EMAIL)
///             .email()
///             .rule_for(Self::USERNAME)
///             .length(3, 50);
///     }
/// }
///
/// fn example() {
///     let user = CreateUser {
///         email: "invalid".to_string(),
///         username: "ab".to_string(),
///     };
///
///     match user.validate() {
///         Ok(()) => println!("Valid!"),
///         Err(e) => println!("Errors: {:?}", e.errors),
///     }
/// }
/// ```
pub trait Validate: Sized + 'static {
    /// Register this type's rules.
    fn rules(validator: &mut Validator<Self>);

    /// Build a validator holding this type's rules.
    fn validator() -> Validator<Self> {
        let mut validator = Validator::new();
        Self::rules(&mut validator);
        validator
    }

    /// Validate the value and return a `ValidationFailure` on failure.
    fn validate(&self) -> Result<(), ValidationFailure> {
        Self::validator().evaluate(self).result().into_result()
    }

    /// Validate and return the value if valid, error otherwise.
    fn validated(self) -> Result<Self, ValidationFailure> {
        Validate::validate(&self)?;
        Ok(self)
    }
}
