use super::RuleBuilder;
use crate::message::ErrorMessage;
use crate::predicates::{
    anchored, is_valid_credit_card, is_valid_email, is_valid_url, matches_email,
};
use regex::Regex;

fn char_count(value: &str) -> usize {
    value.chars().count()
}

/// Checks for text values. Lengths are counted in characters.
impl<'v, M: 'static, V> RuleBuilder<'v, M, V>
where
    V: AsRef<str> + 'static,
{
    /// Length between `min` and `max`, both inclusive.
    pub fn length(self, min: usize, max: usize) -> Self {
        self.register(
            "length",
            move |value| (min..=max).contains(&char_count(value.as_ref())),
            move |name| ErrorMessage::Length {
                name: name.to_string(),
                min,
                max,
            },
        )
    }

    /// At least `min` characters.
    pub fn min_length(self, min: usize) -> Self {
        self.register(
            "min_length",
            move |value| char_count(value.as_ref()) >= min,
            move |name| ErrorMessage::MinLength {
                name: name.to_string(),
                min,
            },
        )
    }

    /// At most `max` characters.
    pub fn max_length(self, max: usize) -> Self {
        self.register(
            "max_length",
            move |value| char_count(value.as_ref()) <= max,
            move |name| ErrorMessage::MaxLength {
                name: name.to_string(),
                max,
            },
        )
    }

    /// Contains at least one non-whitespace character.
    pub fn not_blank(self) -> Self {
        self.register(
            "not_blank",
            |value| !value.as_ref().trim().is_empty(),
            |name| ErrorMessage::NotBlank {
                name: name.to_string(),
            },
        )
    }

    /// Email address, using the validator's configured pattern.
    pub fn email(self) -> Self {
        let pattern = self.validator.email_regex().cloned();
        self.register(
            "email",
            move |value| matches_email(value.as_ref(), pattern.as_ref()),
            email_message,
        )
    }

    /// Email address matching `regex` over the whole value.
    pub fn email_matching(self, regex: Regex) -> Self {
        match Regex::new(&anchored(regex.as_str())) {
            Ok(whole) => self.register(
                "email",
                move |value| matches_email(value.as_ref(), Some(&whole)),
                email_message,
            ),
            Err(_) => self.register(
                "email",
                move |value| is_valid_email(value.as_ref(), Some(&regex)),
                email_message,
            ),
        }
    }

    /// Card number passing the Luhn checksum.
    pub fn credit_card(self) -> Self {
        self.register(
            "credit_card",
            |value| is_valid_credit_card(value.as_ref()),
            |name| ErrorMessage::CreditCard {
                name: name.to_string(),
            },
        )
    }

    /// Number written in the validator's configured format.
    pub fn number(self) -> Self {
        let regex = self.validator.number_regex().clone();
        self.register(
            "number",
            move |value| regex.is_match(value.as_ref()),
            |name| ErrorMessage::Number {
                name: name.to_string(),
            },
        )
    }

    /// Absolute URL.
    pub fn url(self) -> Self {
        self.register(
            "url",
            |value| is_valid_url(value.as_ref()),
            url_message,
        )
    }
}

fn email_message(name: &str) -> ErrorMessage {
    ErrorMessage::Email {
        name: name.to_string(),
    }
}

pub(super) fn url_message(name: &str) -> ErrorMessage {
    ErrorMessage::Url {
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use crate::{NumberFormat, Property, Validator, ValidatorConfig};
    use regex::Regex;

    struct Form {
        text: String,
    }

    const TEXT: Property<Form, String> = Property::new("text", |f| &f.text);

    fn form(text: &str) -> Form {
        Form {
            text: text.to_string(),
        }
    }

    fn errors(validator: &mut Validator<Form>, text: &str) -> Vec<String> {
        validator.validate(&form(text)).errors().to_vec()
    }

    #[test]
    fn length_is_inclusive_on_both_ends() {
        let mut validator = Validator::new();
        validator.rule_for(TEXT).length(2, 4);

        assert!(errors(&mut validator, "ab").is_empty());
        assert!(errors(&mut validator, "abcd").is_empty());
        assert_eq!(
            errors(&mut validator, "a"),
            ["The length of 'text' must be between 2 and 4 characters."]
        );
        assert_eq!(errors(&mut validator, "abcde").len(), 1);
    }

    #[test]
    fn lengths_count_characters() {
        let mut validator = Validator::new();
        validator.rule_for(TEXT).max_length(3).min_length(3);
        assert!(errors(&mut validator, "äöü").is_empty());
    }

    #[test]
    fn min_and_max_length_messages() {
        let mut validator = Validator::new();
        validator.rule_for(TEXT).min_length(3).max_length(1);
        assert_eq!(
            errors(&mut validator, "ab"),
            [
                "'text' must have at least 3 characters.",
                "'text' must have at most 1 characters."
            ]
        );
    }

    #[test]
    fn not_blank_rejects_whitespace() {
        let mut validator = Validator::new();
        validator.rule_for(TEXT).not_blank();
        assert_eq!(errors(&mut validator, " \t"), ["'text' should not be blank."]);
        assert!(errors(&mut validator, " x ").is_empty());
    }

    #[test]
    fn email_uses_configured_pattern() {
        let config = ValidatorConfig::new().email_pattern(r"[a-z]+@corp\.com");
        let mut validator = Validator::with_config(config).unwrap();
        validator.rule_for(TEXT).email();

        assert!(errors(&mut validator, "ada@corp.com").is_empty());
        assert_eq!(
            errors(&mut validator, "ada@mail.com"),
            ["'text' is not a valid email address."]
        );
    }

    #[test]
    fn email_matching_requires_whole_match() {
        let mut validator = Validator::new();
        validator
            .rule_for(TEXT)
            .email_matching(Regex::new(r"a@b\.io|a@b\.io\.evil").unwrap());

        assert!(errors(&mut validator, "a@b.io").is_empty());
        assert!(errors(&mut validator, "a@b.io.evil").is_empty());
        assert_eq!(errors(&mut validator, "xa@b.io").len(), 1);
    }

    #[test]
    fn credit_card_and_url() {
        let mut validator = Validator::new();
        validator.rule_for(TEXT).credit_card().url();

        assert_eq!(
            errors(&mut validator, "4111111111111111"),
            ["'text' is not a valid URL."]
        );
        assert_eq!(
            errors(&mut validator, "https://example.com"),
            ["'text' is not a valid credit card number."]
        );
    }

    #[test]
    fn number_uses_configured_format() {
        let mut english = Validator::new();
        english.rule_for(TEXT).number();
        assert!(errors(&mut english, "1,234.5").is_empty());
        assert_eq!(errors(&mut english, "1.234,5"), ["'text' is not a valid number."]);

        let config = ValidatorConfig::new().number_format(NumberFormat::german());
        let mut german = Validator::with_config(config).unwrap();
        german.rule_for(TEXT).number();
        assert!(errors(&mut german, "1.234,5").is_empty());
        assert_eq!(errors(&mut german, "1,234.5").len(), 1);
    }
}
