//! Fluent rule registration for one property.
//!
//! A [`RuleBuilder`] is obtained from [`Validator::rule_for`]. Every check
//! registers a rule on the validator immediately and hands the builder back,
//! so checks chain freely:
//!
//! ```rust,ignore
//! let mut validator = Validator::<User>::new();
//! validator
//!     .rule_for(User::NAME)
//!     .not_empty()
//!     .min_length(3)
//!     .rule_for(User::EMAIL)
//!     .email()
//!     .with_message("Please enter a valid email");
//! ```
//!
//! Which checks are available depends on the property's value type; the
//! impl blocks live in the submodules.

mod collection;
mod compare;
mod option;
mod string;

pub use collection::IsEmpty;

use crate::message::ErrorMessage;
use crate::property::Property;
use crate::rule::Rule;
use crate::validator::Validator;

/// Registers checks for one property of `M` on a borrowed [`Validator`].
pub struct RuleBuilder<'v, M: 'static, V: 'static> {
    validator: &'v mut Validator<M>,
    property: Property<M, V>,
    last_rule: Option<usize>,
}

impl<'v, M: 'static, V: 'static> RuleBuilder<'v, M, V> {
    pub(crate) fn new(validator: &'v mut Validator<M>, property: Property<M, V>) -> Self {
        Self {
            validator,
            property,
            last_rule: None,
        }
    }

    /// The property this builder registers rules for.
    pub fn property(&self) -> &Property<M, V> {
        &self.property
    }

    /// Replace the message of the check registered just before this call.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        match self.last_rule.and_then(|index| self.validator.rule_mut(index)) {
            Some(rule) => rule.set_message(message.into()),
            None => tracing::debug!(
                property = %self.property.name(),
                "with_message called before any check, ignoring"
            ),
        }
        self
    }

    /// Custom check on the property value.
    ///
    /// Fails with `'{key}' is invalid.` unless a message is supplied through
    /// [`with_message`](Self::with_message).
    pub fn validate<F>(self, condition: F) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        self.register("custom", condition, |name| ErrorMessage::Invalid {
            name: name.to_string(),
        })
    }

    /// Continue with another property of the same validator.
    pub fn rule_for<W: 'static>(self, property: Property<M, W>) -> RuleBuilder<'v, M, W> {
        RuleBuilder::new(self.validator, property)
    }

    /// Finish this property and return the validator.
    pub fn build(self) -> &'v mut Validator<M> {
        self.validator
    }

    /// Register a rule that checks the property value with `check` and
    /// renders `default` with the property label on failure.
    pub(crate) fn register<C, D>(mut self, code: &'static str, check: C, default: D) -> Self
    where
        C: Fn(&V) -> bool + Send + Sync + 'static,
        D: Fn(&str) -> ErrorMessage + Send + Sync + 'static,
    {
        let get = self.property.getter();
        let name = self.property.name().to_string();
        let rule = Rule::with_default(
            self.property.key(),
            code,
            move |model: &M| check(get(model)),
            move || default(&name),
        );

        tracing::trace!(property = %self.property.name(), code, "registered rule");
        self.last_rule = Some(self.validator.push_rule(rule));
        self
    }
}

impl<M: 'static, V: 'static> std::fmt::Debug for RuleBuilder<'_, M, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleBuilder")
            .field("property", &self.property)
            .field("last_rule", &self.last_rule)
            .finish_non_exhaustive()
    }
}
