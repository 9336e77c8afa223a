use std::sync::OnceLock;

use regex::Regex;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

use super::rules::FieldRule;

/// Why a field value was rejected
///
/// The `Display` text is the message shown next to the field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("This field is required.")]
    Required,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter a valid phone number.")]
    InvalidPhone,

    #[error("Message must be at least {min} characters long.")]
    TooShort { min: usize },
}

/// Verdict for one field value
///
/// A valid result never carries a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    failure: Option<ValidationFailure>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self { failure: None }
    }

    pub fn invalid(failure: ValidationFailure) -> Self {
        Self {
            failure: Some(failure),
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }

    pub fn failure(&self) -> Option<&ValidationFailure> {
        self.failure.as_ref()
    }

    /// User-facing message, `None` when valid
    pub fn message(&self) -> Option<String> {
        self.failure.as_ref().map(ToString::to_string)
    }

    pub fn into_failure(self) -> Option<ValidationFailure> {
        self.failure
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern is valid"))
}

/// `local@domain.tld` shape check, no whitespace and a single `@`
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Optional `+`, then 1-16 digits without a leading zero
///
/// Whitespace, hyphens and parentheses are ignored, so `+1 (555) 123-4567`
/// passes.
pub fn is_valid_phone(value: &str) -> bool {
    let stripped: String = value
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')')))
        .collect();
    phone_regex().is_match(&stripped)
}

/// Validate `value` against `rules`
///
/// Rules run in a fixed order (required, email, phone, minimum length) no
/// matter how they are listed, and the first failure wins. Checks see the
/// trimmed value; all but `Required` pass on empty input. Minimum length
/// counts `char`s, so a character outside the BMP counts once.
pub fn validate(value: &str, rules: &[FieldRule]) -> ValidationResult {
    let value = value.trim();

    let mut ordered: Vec<&FieldRule> = rules.iter().collect();
    ordered.sort_by_key(|rule| rule.rank());

    for rule in ordered {
        if let Some(failure) = check(value, rule) {
            return ValidationResult::invalid(failure);
        }
    }
    ValidationResult::valid()
}

fn check(value: &str, rule: &FieldRule) -> Option<ValidationFailure> {
    match *rule {
        FieldRule::Required if value.is_empty() => Some(ValidationFailure::Required),
        FieldRule::Email if !value.is_empty() && !is_valid_email(value) => {
            Some(ValidationFailure::InvalidEmail)
        }
        FieldRule::Phone if !value.is_empty() && !is_valid_phone(value) => {
            Some(ValidationFailure::InvalidPhone)
        }
        FieldRule::MinLength(min) if !value.is_empty() && value.chars().count() < min => {
            Some(ValidationFailure::TooShort { min })
        }
        _ => None,
    }
}
