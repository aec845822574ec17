//! A single registered rule: predicate, property key and lazy message.

use crate::message::ErrorMessage;
use crate::property::PropertyKey;
use std::fmt;

/// Boxed predicate over the whole model.
pub(crate) type Predicate<M> = Box<dyn Fn(&M) -> bool + Send + Sync>;

/// Boxed factory for a default message, run only when the rule fails.
pub(crate) type MessageFactory = Box<dyn Fn() -> ErrorMessage + Send + Sync>;

/// Where a rule's error message comes from.
pub(crate) enum MessageSource {
    Custom(String),
    Default(MessageFactory),
}

/// A predicate over a model, bound to one property key.
///
/// Rules are created by [`RuleBuilder`](crate::RuleBuilder) and
/// [`Validator::must`](crate::Validator::must); each is evaluated on its own,
/// so one failing rule never hides another.
pub struct Rule<M> {
    key: PropertyKey,
    code: &'static str,
    predicate: Predicate<M>,
    message: MessageSource,
}

impl<M> Rule<M> {
    /// Create a rule whose message is rendered from a template on failure.
    pub fn with_default<P, D>(key: PropertyKey, code: &'static str, predicate: P, default: D) -> Self
    where
        P: Fn(&M) -> bool + Send + Sync + 'static,
        D: Fn() -> ErrorMessage + Send + Sync + 'static,
    {
        Self {
            key,
            code,
            predicate: Box::new(predicate),
            message: MessageSource::Default(Box::new(default)),
        }
    }

    /// Create a rule with a fixed message.
    pub fn with_message<P>(
        key: PropertyKey,
        code: &'static str,
        predicate: P,
        message: impl Into<String>,
    ) -> Self
    where
        P: Fn(&M) -> bool + Send + Sync + 'static,
    {
        Self {
            key,
            code,
            predicate: Box::new(predicate),
            message: MessageSource::Custom(message.into()),
        }
    }

    /// Whether the model satisfies this rule.
    pub fn is_valid(&self, model: &M) -> bool {
        (self.predicate)(model)
    }

    /// Key and message to report when the rule fails.
    pub fn describe_error(&self) -> (PropertyKey, String) {
        let message = match &self.message {
            MessageSource::Custom(message) => message.clone(),
            MessageSource::Default(factory) => factory().to_string(),
        };
        (self.key.clone(), message)
    }

    /// The property this rule is attached to.
    pub fn key(&self) -> &PropertyKey {
        &self.key
    }

    /// Rule code, e.g. `"email"`.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Whether the message was supplied by the caller.
    pub fn has_custom_message(&self) -> bool {
        matches!(self.message, MessageSource::Custom(_))
    }

    pub(crate) fn set_message(&mut self, message: String) {
        self.message = MessageSource::Custom(message);
    }
}

impl<M> fmt::Debug for Rule<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("key", &self.key)
            .field("code", &self.code)
            .field("custom_message", &self.has_custom_message())
            .finish_non_exhaustive()
    }
}
