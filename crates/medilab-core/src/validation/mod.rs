//! Form field validation
//!
//! Rules are derived once from a field's declared constraints. Every blur,
//! input or submit event re-runs [`validate`] on the current value; the first
//! failing rule decides the message.

mod contact;
mod field;
mod form;
mod rules;
mod validator;

pub use contact::{ContactForm, ContactSubmission, Service};
pub use field::{FieldController, FieldState};
pub use form::{validate_form, FieldReport, FormReport};
pub use rules::{FieldConstraints, FieldRule};
pub use validator::{is_valid_email, is_valid_phone, validate, ValidationFailure, ValidationResult};
