//! Format predicates used by the string rules.
//!
//! Each predicate is a pure function of its input. Regexes are compiled once.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Default email pattern, matched against the whole input.
pub const DEFAULT_EMAIL_PATTERN: &str = r"[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

/// Minimum number of digits for a credit card number.
pub const MIN_CARD_DIGITS: usize = 13;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(&anchored(DEFAULT_EMAIL_PATTERN)).expect("default email pattern is valid")
    })
}

pub(crate) fn default_number_regex() -> &'static Regex {
    NUMBER_REGEX.get_or_init(|| {
        NumberFormat::default()
            .to_regex()
            .expect("default number format is valid")
    })
}

/// Wrap a pattern so it must match the entire input.
pub(crate) fn anchored(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}

/// Leftmost-first fallback for patterns too large to anchor.
fn matches_whole(regex: &Regex, value: &str) -> bool {
    regex
        .find(value)
        .is_some_and(|m| m.start() == 0 && m.end() == value.len())
}

/// Check an email address against `pattern`, or the default pattern when `None`.
///
/// A custom pattern must match the entire input, whichever alternative does so.
pub fn is_valid_email(value: &str, pattern: Option<&Regex>) -> bool {
    match pattern {
        Some(regex) => match Regex::new(&anchored(regex.as_str())) {
            Ok(whole) => whole.is_match(value),
            Err(_) => matches_whole(regex, value),
        },
        None => email_regex().is_match(value),
    }
}

/// Like [`is_valid_email`], for a pattern that is already anchored.
pub(crate) fn matches_email(value: &str, anchored_pattern: Option<&Regex>) -> bool {
    match anchored_pattern {
        Some(regex) => regex.is_match(value),
        None => email_regex().is_match(value),
    }
}

/// Check a card number with the Luhn checksum.
///
/// Non-digit characters (spaces, dashes) are ignored. Fewer than
/// [`MIN_CARD_DIGITS`] digits always fails.
pub fn is_valid_credit_card(value: &str) -> bool {
    let digits: Vec<u32> = value.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() < MIN_CARD_DIGITS {
        return false;
    }

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(index, &digit)| {
            if index % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    sum % 10 == 0
}

/// Check that a string parses as an absolute URL.
pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

/// Separators used when reading numbers written for a given locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Character between the integer and fractional parts
    pub decimal_separator: char,
    /// Optional thousands separator; groups after the first must have 3 digits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping_separator: Option<char>,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::english()
    }
}

impl NumberFormat {
    /// `1,234.5`
    pub const fn english() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: Some(','),
        }
    }

    /// `1.234,5`
    pub const fn german() -> Self {
        Self {
            decimal_separator: ',',
            grouping_separator: Some('.'),
        }
    }

    /// `1234.5`, no grouping accepted.
    pub const fn plain() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: None,
        }
    }

    /// Whether the separators can be told apart from digits, signs and each other.
    pub fn is_consistent(&self) -> bool {
        let reserved = |c: char| c.is_ascii_digit() || c == '+' || c == '-';
        if reserved(self.decimal_separator) {
            return false;
        }
        match self.grouping_separator {
            Some(group) => !reserved(group) && group != self.decimal_separator,
            None => true,
        }
    }

    /// Compile the whole-string pattern for this format.
    pub(crate) fn to_regex(self) -> Result<Regex, regex::Error> {
        let decimal = regex::escape(&self.decimal_separator.to_string());
        let integer = match self.grouping_separator {
            Some(group) => {
                let group = regex::escape(&group.to_string());
                format!(r"(?:[0-9]{{1,3}}(?:{group}[0-9]{{3}})+|[0-9]+)")
            }
            None => "[0-9]+".to_string(),
        };
        Regex::new(&format!(
            r"^[+-]?(?:{integer}(?:{decimal}[0-9]+)?|{decimal}[0-9]+)$"
        ))
    }
}

/// Check a number written in `format`.
///
/// Accepts an optional sign, an integer part (optionally grouped) and an
/// optional fractional part. Exponents and surrounding whitespace are rejected.
pub fn is_numeric(value: &str, format: &NumberFormat) -> bool {
    if *format == NumberFormat::default() {
        return default_number_regex().is_match(value);
    }
    match format.to_regex() {
        Ok(regex) => regex.is_match(value),
        Err(_) => false,
    }
}
