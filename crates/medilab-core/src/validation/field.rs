use super::rules::{FieldConstraints, FieldRule};
use super::validator::{validate, ValidationFailure, ValidationResult};
use crate::config::ValidationConfig;

/// Feedback state of a form control
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldState {
    /// Not validated yet
    #[default]
    Pristine,
    Valid,
    Invalid(ValidationFailure),
}

impl FieldState {
    /// Bootstrap feedback class for the control
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            FieldState::Pristine => None,
            FieldState::Valid => Some("is-valid"),
            FieldState::Invalid(_) => Some("is-invalid"),
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldState::Invalid(_))
    }

    /// Text for the `.invalid-feedback` element
    pub fn message(&self) -> Option<String> {
        match self {
            FieldState::Invalid(failure) => Some(failure.to_string()),
            _ => None,
        }
    }
}

impl From<ValidationResult> for FieldState {
    fn from(result: ValidationResult) -> Self {
        match result.into_failure() {
            Some(failure) => FieldState::Invalid(failure),
            None => FieldState::Valid,
        }
    }
}

/// One form control: its rules and current feedback state
///
/// - blur always validates
/// - input only revalidates a field that is already showing an error, so
///   the message clears as soon as the user fixes it without nagging while
///   they type into a fresh field
/// - submit validates like blur
#[derive(Debug, Clone)]
pub struct FieldController {
    name: String,
    rules: Vec<FieldRule>,
    state: FieldState,
}

impl FieldController {
    pub fn new(constraints: &FieldConstraints, config: &ValidationConfig) -> Self {
        Self::from_rules(constraints.name.clone(), constraints.rules(config))
    }

    pub fn from_rules(name: impl Into<String>, rules: Vec<FieldRule>) -> Self {
        Self {
            name: name.into(),
            rules,
            state: FieldState::Pristine,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Whether the field takes part in whole-form validation
    pub fn is_required(&self) -> bool {
        self.rules.contains(&FieldRule::Required)
    }

    pub fn on_blur(&mut self, value: &str) -> &FieldState {
        self.apply(value);
        &self.state
    }

    pub fn on_input(&mut self, value: &str) -> &FieldState {
        if self.state.is_invalid() {
            self.apply(value);
        }
        &self.state
    }

    pub fn on_submit(&mut self, value: &str) -> ValidationResult {
        self.apply(value)
    }

    fn apply(&mut self, value: &str) -> ValidationResult {
        let result = validate(value, &self.rules);
        match result.failure() {
            Some(failure) => tracing::debug!(field = %self.name, %failure, "Field invalid"),
            None => tracing::debug!(field = %self.name, "Field valid"),
        }
        self.state = result.clone().into();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_field() -> FieldController {
        let constraints = FieldConstraints::new("email").with_type("email").required();
        FieldController::new(&constraints, &ValidationConfig::default())
    }

    #[test]
    fn test_starts_pristine() {
        let field = email_field();
        assert_eq!(field.state(), &FieldState::Pristine);
        assert_eq!(field.state().css_class(), None);
        assert!(field.is_required());
    }

    #[test]
    fn test_blur_validates() {
        let mut field = email_field();
        assert_eq!(
            field.on_blur("nope"),
            &FieldState::Invalid(ValidationFailure::InvalidEmail)
        );
        assert_eq!(field.state().css_class(), Some("is-invalid"));
        assert_eq!(
            field.state().message().as_deref(),
            Some("Please enter a valid email address.")
        );

        assert_eq!(field.on_blur("jane@example.org"), &FieldState::Valid);
        assert_eq!(field.state().css_class(), Some("is-valid"));
        assert!(field.state().message().is_none());
    }

    #[test]
    fn test_input_ignored_until_invalid() {
        let mut field = email_field();
        assert_eq!(field.on_input("j"), &FieldState::Pristine);

        field.on_blur("jane@example.org");
        assert_eq!(field.on_input("jane@"), &FieldState::Valid);
    }

    #[test]
    fn test_input_clears_error_once_fixed() {
        let mut field = email_field();
        field.on_blur("");
        assert_eq!(
            field.state(),
            &FieldState::Invalid(ValidationFailure::Required)
        );

        assert_eq!(
            field.on_input("jane@"),
            &FieldState::Invalid(ValidationFailure::InvalidEmail)
        );
        assert_eq!(field.on_input("jane@example.org"), &FieldState::Valid);
    }

    #[test]
    fn test_submit_returns_result() {
        let mut field = FieldController::from_rules("message", vec![FieldRule::MinLength(10)]);
        assert!(!field.is_required());
        let result = field.on_submit("hi");
        assert_eq!(
            result.message().as_deref(),
            Some("Message must be at least 10 characters long.")
        );
        assert!(field.state().is_invalid());
    }
}
