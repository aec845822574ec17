//! The validator: an ordered list of rules over one model type.

use crate::builder::RuleBuilder;
use crate::config::ValidatorConfig;
use crate::error::{ConfigError, ErrorIndex, FieldError, ValidationReport};
use crate::message::ErrorMessage;
use crate::predicates::default_number_regex;
use crate::property::{short_type_name, Property, PropertyKey};
use crate::result::{Evaluation, ValidationResult};
use crate::rule::Rule;
use regex::Regex;
use std::fmt;

/// Ordered rules over a model `M`, plus the outcome of the last
/// [`validate`](Validator::validate) call.
///
/// Rules run in registration order and every failing rule contributes one
/// message; nothing short-circuits.
///
/// # Example
///
/// ```rust,ignore
/// use fluent_validate::prelude::*;
///
/// #[derive(Properties)]
/// struct User {
///     name: String,
///     email: String,
/// }
///
/// let mut validator = Validator::<User>::new();
/// validator
///     .rule_for(User::NAME)
///     .min_length(3)
///     .rule_for(User::EMAIL)
///     .email();
///
/// let result = validator.validate(&user);
/// assert_eq!(
///     validator.errors_for(&User::NAME),
///     ["'name' must have at least 3 characters."]
/// );
/// ```
pub struct Validator<M> {
    rules: Vec<Rule<M>>,
    errors: Vec<String>,
    index: ErrorIndex,
    failures: Vec<FieldError>,
    config: ValidatorConfig,
    email: Option<Regex>,
    number: Option<Regex>,
}

impl<M: 'static> Validator<M> {
    /// Create an empty validator with the default configuration.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            errors: Vec::new(),
            index: ErrorIndex::new(),
            failures: Vec::new(),
            config: ValidatorConfig::default(),
            email: None,
            number: None,
        }
    }

    /// Create an empty validator with a custom configuration.
    ///
    /// Fails if the email pattern does not compile or the number format is
    /// ambiguous.
    pub fn with_config(config: ValidatorConfig) -> Result<Self, ConfigError> {
        let email = config.compile_email()?;
        let number = config.compile_number()?;
        Ok(Self {
            email,
            number: Some(number),
            config,
            ..Self::new()
        })
    }

    /// Start registering checks for one property.
    pub fn rule_for<V: 'static>(&mut self, property: Property<M, V>) -> RuleBuilder<'_, M, V> {
        RuleBuilder::new(self, property)
    }

    /// Start registering checks on the model value itself, keyed by its type name.
    ///
    /// ```rust,ignore
    /// let mut validator = Validator::<String>::new();
    /// validator.rule_for_model().email();
    /// ```
    pub fn rule_for_model(&mut self) -> RuleBuilder<'_, M, M> {
        RuleBuilder::new(self, Property::model())
    }

    /// Whole-model check. Fails with `Validation failed.`.
    pub fn must<F>(&mut self, condition: F) -> &mut Self
    where
        F: Fn(&M) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule::with_default(
            PropertyKey::of_type::<M>(),
            "custom",
            condition,
            || ErrorMessage::ModelInvalid,
        ));
        self
    }

    /// Whole-model check with its own message.
    pub fn must_with_message<F>(&mut self, condition: F, message: impl Into<String>) -> &mut Self
    where
        F: Fn(&M) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule::with_message(
            PropertyKey::of_type::<M>(),
            "custom",
            condition,
            message,
        ));
        self
    }

    /// Run every rule against `model` and store the outcome.
    ///
    /// Results of the previous call are replaced, not merged.
    pub fn validate(&mut self, model: &M) -> ValidationResult {
        let Evaluation { failures, index } = self.evaluate(model);
        self.errors = failures.iter().map(|f| f.message.clone()).collect();
        self.index = index;
        self.failures = failures;

        if self.errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid {
                errors: self.errors.clone(),
            }
        }
    }

    /// Run every rule against `model` without storing anything.
    pub fn evaluate(&self, model: &M) -> Evaluation {
        let mut evaluation = Evaluation::default();

        for rule in self.rules.iter().filter(|rule| !rule.is_valid(model)) {
            let (key, mut message) = rule.describe_error();
            if message.is_empty() {
                message.clone_from(&self.config.fallback_message);
            }
            tracing::trace!(key = %key, code = rule.code(), message = %message, "rule failed");

            evaluation
                .failures
                .push(FieldError::new(key.as_str(), rule.code(), message.clone()));
            evaluation.index.add(key, message);
        }

        tracing::debug!(
            model = %short_type_name::<M>(),
            rules = self.rules.len(),
            failures = evaluation.failures.len(),
            "validation finished"
        );
        evaluation
    }

    /// Messages from the last [`validate`](Self::validate), in rule order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Messages from the last validation for one property.
    pub fn errors_for<V>(&self, property: &Property<M, V>) -> &[String] {
        self.index.get(property.name())
    }

    /// Messages from the last validation for a property key.
    pub fn errors_for_key(&self, key: &str) -> &[String] {
        self.index.get(key)
    }

    /// First message from the last validation for one property.
    pub fn first_error_for<V>(&self, property: &Property<M, V>) -> Option<&str> {
        self.errors_for(property).first().map(String::as_str)
    }

    /// Messages from the last validation grouped by key.
    pub fn error_index(&self) -> &ErrorIndex {
        &self.index
    }

    /// Report of the last validation.
    pub fn report(&self) -> ValidationReport {
        ValidationReport::new(self.failures.clone())
    }

    /// Number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule has been registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Configuration this validator was built with.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub(crate) fn push_rule(&mut self, rule: Rule<M>) -> usize {
        self.rules.push(rule);
        self.rules.len() - 1
    }

    pub(crate) fn rule_mut(&mut self, index: usize) -> Option<&mut Rule<M>> {
        self.rules.get_mut(index)
    }

    pub(crate) fn email_regex(&self) -> Option<&Regex> {
        self.email.as_ref()
    }

    pub(crate) fn number_regex(&self) -> &Regex {
        match &self.number {
            Some(regex) => regex,
            None => default_number_regex(),
        }
    }
}

impl<M: 'static> Default for Validator<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for Validator<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules)
            .field("errors", &self.errors)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
