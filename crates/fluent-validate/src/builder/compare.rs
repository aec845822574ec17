use super::RuleBuilder;
use crate::message::ErrorMessage;
use std::fmt::Display;
use std::sync::Arc;

/// Ordering checks. The bound is rendered with `Display` only when the rule fails.
impl<'v, M: 'static, V> RuleBuilder<'v, M, V>
where
    V: PartialOrd + Display + Send + Sync + 'static,
{
    /// Value strictly less than `bound`.
    pub fn less_than(self, bound: V) -> Self {
        let bound = Arc::new(bound);
        let shown = Arc::clone(&bound);
        self.register(
            "less_than",
            move |value| *value < *bound,
            move |name| ErrorMessage::LessThan {
                name: name.to_string(),
                bound: shown.to_string(),
            },
        )
    }

    /// Value less than or equal to `bound`.
    pub fn less_than_or_equal_to(self, bound: V) -> Self {
        let bound = Arc::new(bound);
        let shown = Arc::clone(&bound);
        self.register(
            "less_than_or_equal_to",
            move |value| *value <= *bound,
            move |name| ErrorMessage::LessThanOrEqualTo {
                name: name.to_string(),
                bound: shown.to_string(),
            },
        )
    }

    /// Value strictly greater than `bound`.
    pub fn greater_than(self, bound: V) -> Self {
        let bound = Arc::new(bound);
        let shown = Arc::clone(&bound);
        self.register(
            "greater_than",
            move |value| *value > *bound,
            move |name| ErrorMessage::GreaterThan {
                name: name.to_string(),
                bound: shown.to_string(),
            },
        )
    }

    /// Value greater than or equal to `bound`.
    pub fn greater_than_or_equal_to(self, bound: V) -> Self {
        let bound = Arc::new(bound);
        let shown = Arc::clone(&bound);
        self.register(
            "greater_than_or_equal_to",
            move |value| *value >= *bound,
            move |name| ErrorMessage::GreaterThanOrEqualTo {
                name: name.to_string(),
                bound: shown.to_string(),
            },
        )
    }
}

/// Equality checks.
impl<'v, M: 'static, V> RuleBuilder<'v, M, V>
where
    V: PartialEq + Display + Send + Sync + 'static,
{
    /// Value equal to `expected`.
    pub fn equal(self, expected: V) -> Self {
        let expected = Arc::new(expected);
        let shown = Arc::clone(&expected);
        self.register(
            "equal",
            move |value| *value == *expected,
            move |name| ErrorMessage::Equal {
                name: name.to_string(),
                value: shown.to_string(),
            },
        )
    }

    /// Value different from `unexpected`.
    pub fn not_equal(self, unexpected: V) -> Self {
        let unexpected = Arc::new(unexpected);
        let shown = Arc::clone(&unexpected);
        self.register(
            "not_equal",
            move |value| *value != *unexpected,
            move |name| ErrorMessage::NotEqual {
                name: name.to_string(),
                value: shown.to_string(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{Property, Validator};
    use std::fmt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Person {
        age: i32,
        score: f64,
        nickname: String,
    }

    const AGE: Property<Person, i32> = Property::new("age", |p| &p.age);
    const SCORE: Property<Person, f64> = Property::new("score", |p| &p.score);
    const NICKNAME: Property<Person, String> = Property::new("nickname", |p| &p.nickname);

    fn person(age: i32) -> Person {
        Person {
            age,
            score: 0.5,
            nickname: "kid".to_string(),
        }
    }

    #[test]
    fn less_than_at_bound_fails() {
        let mut validator = Validator::new();
        validator.rule_for(AGE).less_than(10);

        assert!(validator.validate(&person(9)).is_valid());
        assert_eq!(
            validator.validate(&person(10)).errors(),
            ["'age' must be less than 10."]
        );
    }

    #[test]
    fn inclusive_bounds_accept_the_bound() {
        let mut validator = Validator::new();
        validator
            .rule_for(AGE)
            .less_than_or_equal_to(10)
            .greater_than_or_equal_to(10);

        assert!(validator.validate(&person(10)).is_valid());
        assert_eq!(
            validator.validate(&person(11)).errors(),
            ["'age' must be less than or equal to 10."]
        );
        assert_eq!(
            validator.validate(&person(9)).errors(),
            ["'age' must be greater than or equal to 10."]
        );
    }

    #[test]
    fn greater_than_with_floats() {
        let mut validator = Validator::new();
        validator.rule_for(SCORE).greater_than(0.75);
        assert_eq!(
            validator.validate(&person(1)).errors(),
            ["'score' must be greater than 0.75."]
        );
    }

    #[test]
    fn equality_checks() {
        let mut validator = Validator::new();
        validator
            .rule_for(AGE)
            .equal(18)
            .rule_for(NICKNAME)
            .not_equal("kid".to_string());

        assert_eq!(
            validator.validate(&person(17)).errors(),
            [
                "'age' should be equal to 18.",
                "'nickname' should not be equal to kid."
            ]
        );
    }

    static MONEY_SHOWN: AtomicUsize = AtomicUsize::new(0);

    #[derive(Debug, PartialEq, PartialOrd)]
    struct Money(u32);

    impl fmt::Display for Money {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            MONEY_SHOWN.fetch_add(1, Ordering::SeqCst);
            write!(f, "${}", self.0)
        }
    }

    struct Cart {
        total: Money,
    }

    const TOTAL: Property<Cart, Money> = Property::new("total", |c| &c.total);

    #[test]
    fn bounds_are_only_rendered_on_failure() {
        let mut validator = Validator::new();
        validator
            .rule_for(TOTAL)
            .less_than(Money(100))
            .greater_than_or_equal_to(Money(1))
            .not_equal(Money(50));

        assert!(validator.validate(&Cart { total: Money(5) }).is_valid());
        assert_eq!(MONEY_SHOWN.load(Ordering::SeqCst), 0);

        assert_eq!(
            validator.validate(&Cart { total: Money(150) }).errors(),
            ["'total' must be less than $100."]
        );
        assert_eq!(MONEY_SHOWN.load(Ordering::SeqCst), 1);
    }
}
