use super::string::url_message;
use super::RuleBuilder;
use crate::message::ErrorMessage;
use crate::predicates::is_valid_url;
use std::fmt::Display;
use std::sync::Arc;

/// Checks for optional values.
///
/// An absent value never equals a concrete one: `some_equal` fails on `None`
/// and `some_not_equal` passes on it.
impl<'v, M: 'static, T: 'static> RuleBuilder<'v, M, Option<T>> {
    /// Value is present.
    pub fn not_none(self) -> Self {
        self.register(
            "not_none",
            Option::is_some,
            |name| ErrorMessage::NotNone {
                name: name.to_string(),
            },
        )
    }

    /// Value is present and equal to `expected`.
    pub fn some_equal(self, expected: T) -> Self
    where
        T: PartialEq + Display + Send + Sync,
    {
        let expected = Arc::new(expected);
        let shown = Arc::clone(&expected);
        self.register(
            "equal",
            move |value| value.as_ref() == Some(&*expected),
            move |name| ErrorMessage::Equal {
                name: name.to_string(),
                value: shown.to_string(),
            },
        )
    }

    /// Value is absent or different from `unexpected`.
    pub fn some_not_equal(self, unexpected: T) -> Self
    where
        T: PartialEq + Display + Send + Sync,
    {
        let unexpected = Arc::new(unexpected);
        let shown = Arc::clone(&unexpected);
        self.register(
            "not_equal",
            move |value| value.as_ref() != Some(&*unexpected),
            move |name| ErrorMessage::NotEqual {
                name: name.to_string(),
                value: shown.to_string(),
            },
        )
    }

    /// Value is absent or an absolute URL.
    pub fn some_url(self) -> Self
    where
        T: AsRef<str>,
    {
        self.register(
            "url",
            |value| value.as_ref().map_or(true, |url| is_valid_url(url.as_ref())),
            url_message,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{Property, Validator};
    use std::fmt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Profile {
        age: Option<u8>,
        homepage: Option<String>,
    }

    const AGE: Property<Profile, Option<u8>> = Property::new("age", |p| &p.age);
    const HOMEPAGE: Property<Profile, Option<String>> = Property::new("homepage", |p| &p.homepage);

    fn profile(age: Option<u8>, homepage: Option<&str>) -> Profile {
        Profile {
            age,
            homepage: homepage.map(str::to_string),
        }
    }

    #[test]
    fn not_none_message() {
        let mut validator = Validator::new();
        validator.rule_for(AGE).not_none();

        assert!(validator.validate(&profile(Some(1), None)).is_valid());
        assert_eq!(
            validator.validate(&profile(None, None)).errors(),
            ["'age' must not be nil."]
        );
    }

    #[test]
    fn absence_never_equals_a_value() {
        let mut equal = Validator::new();
        equal.rule_for(AGE).some_equal(18);
        assert!(equal.validate(&profile(Some(18), None)).is_valid());
        assert_eq!(
            equal.validate(&profile(None, None)).errors(),
            ["'age' should be equal to 18."]
        );

        let mut not_equal = Validator::new();
        not_equal.rule_for(AGE).some_not_equal(18);
        assert!(not_equal.validate(&profile(None, None)).is_valid());
        assert_eq!(
            not_equal.validate(&profile(Some(18), None)).errors(),
            ["'age' should not be equal to 18."]
        );
    }

    #[test]
    fn optional_url() {
        let mut validator = Validator::new();
        validator.rule_for(HOMEPAGE).some_url();

        assert!(validator.validate(&profile(None, None)).is_valid());
        assert!(validator
            .validate(&profile(None, Some("https://example.com")))
            .is_valid());
        assert_eq!(
            validator.validate(&profile(None, Some("example.com"))).errors(),
            ["'homepage' is not a valid URL."]
        );
    }

    static LEVEL_SHOWN: AtomicUsize = AtomicUsize::new(0);

    #[derive(Debug, PartialEq)]
    struct Level(u8);

    impl fmt::Display for Level {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            LEVEL_SHOWN.fetch_add(1, Ordering::SeqCst);
            write!(f, "L{}", self.0)
        }
    }

    struct Player {
        level: Option<Level>,
    }

    const LEVEL: Property<Player, Option<Level>> = Property::new("level", |p| &p.level);

    #[test]
    fn expected_values_are_only_rendered_on_failure() {
        let mut validator = Validator::new();
        validator
            .rule_for(LEVEL)
            .some_equal(Level(3))
            .some_not_equal(Level(9));

        assert!(validator
            .validate(&Player {
                level: Some(Level(3))
            })
            .is_valid());
        assert_eq!(LEVEL_SHOWN.load(Ordering::SeqCst), 0);

        assert_eq!(
            validator.validate(&Player { level: None }).errors(),
            ["'level' should be equal to L3."]
        );
        assert_eq!(LEVEL_SHOWN.load(Ordering::SeqCst), 1);
    }
}
