use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ValidationConfig;
use crate::{Error, Result};

/// A single declarative check on a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "param", rename_all = "kebab-case")]
pub enum FieldRule {
    Required,
    Email,
    Phone,
    /// Minimum length in characters
    MinLength(usize),
}

impl FieldRule {
    /// Position in the fixed evaluation order
    #[inline]
    pub(crate) fn rank(&self) -> u8 {
        match self {
            FieldRule::Required => 0,
            FieldRule::Email => 1,
            FieldRule::Phone => 2,
            FieldRule::MinLength(_) => 3,
        }
    }
}

impl fmt::Display for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRule::Required => f.write_str("required"),
            FieldRule::Email => f.write_str("email"),
            FieldRule::Phone => f.write_str("phone"),
            FieldRule::MinLength(n) => write!(f, "min-length={}", n),
        }
    }
}

/// Parses `required`, `email`, `phone` and `min-length=N`
impl FromStr for FieldRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (kind, param) = match s.split_once(['=', ':']) {
            Some((kind, param)) => (kind.trim(), Some(param.trim())),
            None => (s, None),
        };

        match (kind.to_ascii_lowercase().as_str(), param) {
            ("required", None) => Ok(FieldRule::Required),
            ("email", None) => Ok(FieldRule::Email),
            ("phone", None) => Ok(FieldRule::Phone),
            ("min-length" | "min_length" | "minlength", Some(n)) => n
                .parse()
                .map(FieldRule::MinLength)
                .map_err(|_| Error::InvalidRule(s.to_string())),
            _ => Err(Error::InvalidRule(s.to_string())),
        }
    }
}

/// Constraints declared on a form control
///
/// Mirrors what the markup says about a field: its `name`, its `type`, the
/// `required` flag and an optional `minlength`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConstraints {
    pub name: String,
    #[serde(default = "default_input_type")]
    pub input_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub min_length: Option<usize>,
}

fn default_input_type() -> String {
    "text".to_string()
}

impl FieldConstraints {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input_type: default_input_type(),
            required: false,
            min_length: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Derive the rule set, in evaluation order
    ///
    /// `type="email"` adds an email check, a field named `phone` a phone
    /// check, and a field named `message` the configured minimum length
    /// unless it declares its own.
    pub fn rules(&self, config: &ValidationConfig) -> Vec<FieldRule> {
        let mut rules = Vec::new();
        if self.required {
            rules.push(FieldRule::Required);
        }
        if self.input_type.eq_ignore_ascii_case("email") {
            rules.push(FieldRule::Email);
        }
        if self.name == "phone" {
            rules.push(FieldRule::Phone);
        }
        match self.min_length {
            Some(min) => rules.push(FieldRule::MinLength(min)),
            None if self.name == "message" => {
                rules.push(FieldRule::MinLength(config.message_min_length))
            }
            None => {}
        }
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rules() {
        assert_eq!("required".parse::<FieldRule>().unwrap(), FieldRule::Required);
        assert_eq!(" Email ".parse::<FieldRule>().unwrap(), FieldRule::Email);
        assert_eq!("phone".parse::<FieldRule>().unwrap(), FieldRule::Phone);
        assert_eq!(
            "min-length=10".parse::<FieldRule>().unwrap(),
            FieldRule::MinLength(10)
        );
        assert_eq!(
            "minlength:3".parse::<FieldRule>().unwrap(),
            FieldRule::MinLength(3)
        );
        assert!(matches!(
            "min-length".parse::<FieldRule>(),
            Err(Error::InvalidRule(_))
        ));
        assert!("min-length=ten".parse::<FieldRule>().is_err());
        assert!("required=yes".parse::<FieldRule>().is_err());
        assert!("zip".parse::<FieldRule>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for rule in [
            FieldRule::Required,
            FieldRule::Email,
            FieldRule::Phone,
            FieldRule::MinLength(25),
        ] {
            assert_eq!(rule.to_string().parse::<FieldRule>().unwrap(), rule);
        }
    }

    #[test]
    fn test_rules_from_constraints() {
        let config = ValidationConfig::default();

        let email = FieldConstraints::new("email").with_type("email").required();
        assert_eq!(email.rules(&config), vec![FieldRule::Required, FieldRule::Email]);

        let phone = FieldConstraints::new("phone").with_type("tel");
        assert_eq!(phone.rules(&config), vec![FieldRule::Phone]);

        let message = FieldConstraints::new("message").with_type("textarea").required();
        assert_eq!(
            message.rules(&config),
            vec![FieldRule::Required, FieldRule::MinLength(10)]
        );

        let custom = FieldConstraints::new("message").with_min_length(20);
        assert_eq!(custom.rules(&config), vec![FieldRule::MinLength(20)]);

        let plain = FieldConstraints::new("company");
        assert!(plain.rules(&config).is_empty());
    }

    #[test]
    fn test_message_minimum_follows_config() {
        let config = ValidationConfig {
            message_min_length: 25,
        };
        let message = FieldConstraints::new("message");
        assert_eq!(message.rules(&config), vec![FieldRule::MinLength(25)]);
    }
}
