//! The site's contact form

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::field::{FieldController, FieldState};
use super::form::{validate_form, FormReport};
use super::rules::FieldConstraints;
use crate::config::ValidationConfig;
use crate::{Error, Result};

/// "Service of Interest" choices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    #[default]
    General,
    ClinicalChemistry,
    MolecularDiagnostics,
    Microbiology,
    Hematology,
    Immunology,
    Pathology,
    Urgent,
}

impl Service {
    pub const ALL: [Service; 8] = [
        Service::General,
        Service::ClinicalChemistry,
        Service::MolecularDiagnostics,
        Service::Microbiology,
        Service::Hematology,
        Service::Immunology,
        Service::Pathology,
        Service::Urgent,
    ];

    /// Option value
    pub fn id(&self) -> &'static str {
        match self {
            Service::General => "general",
            Service::ClinicalChemistry => "clinical-chemistry",
            Service::MolecularDiagnostics => "molecular-diagnostics",
            Service::Microbiology => "microbiology",
            Service::Hematology => "hematology",
            Service::Immunology => "immunology",
            Service::Pathology => "pathology",
            Service::Urgent => "urgent",
        }
    }

    /// Option label
    pub fn label(&self) -> &'static str {
        match self {
            Service::General => "General Inquiry",
            Service::ClinicalChemistry => "Clinical Chemistry",
            Service::MolecularDiagnostics => "Molecular Diagnostics",
            Service::Microbiology => "Microbiology",
            Service::Hematology => "Hematology",
            Service::Immunology => "Immunology",
            Service::Pathology => "Pathology",
            Service::Urgent => "Urgent Test Request",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Service {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Service::ALL
            .into_iter()
            .find(|service| service.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownService(s.to_string()))
    }
}

/// Values typed into the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub service: Service,
    pub message: String,
}

impl ContactSubmission {
    /// Current value of a field by its `name`
    pub fn value(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "phone" => Some(&self.phone),
            "service" => Some(self.service.id()),
            "message" => Some(&self.message),
            _ => None,
        }
    }
}

/// Contact form controls in page order
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: Vec<FieldController>,
}

impl ContactForm {
    pub fn new(config: &ValidationConfig) -> Self {
        let declared = [
            FieldConstraints::new("name").required(),
            FieldConstraints::new("email").with_type("email").required(),
            FieldConstraints::new("phone").with_type("tel"),
            FieldConstraints::new("service").with_type("select"),
            FieldConstraints::new("message").with_type("textarea").required(),
        ];
        Self {
            fields: declared
                .iter()
                .map(|constraints| FieldController::new(constraints, config))
                .collect(),
        }
    }

    pub fn fields(&self) -> &[FieldController] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldController> {
        self.fields.iter().find(|f| f.name() == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FieldController> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    /// Forward a blur event; unknown field names are ignored
    pub fn on_blur(&mut self, name: &str, value: &str) -> Option<&FieldState> {
        self.field_mut(name).map(|f| &*f.on_blur(value))
    }

    /// Forward an input event; unknown field names are ignored
    pub fn on_input(&mut self, name: &str, value: &str) -> Option<&FieldState> {
        self.field_mut(name).map(|f| &*f.on_input(value))
    }

    /// Submit handler: decides whether the submission goes through
    pub fn validate(&mut self, submission: &ContactSubmission) -> FormReport {
        let report = validate_form(self.fields.iter_mut().map(|field| {
            let value = submission.value(field.name()).unwrap_or_default();
            (field, value)
        }));

        if report.is_valid() {
            tracing::info!(service = %submission.service, "Contact form accepted");
        } else {
            tracing::info!(
                failed = report.failures().count(),
                "Contact form submission blocked"
            );
        }
        report
    }
}
