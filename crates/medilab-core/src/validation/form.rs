use serde::Serialize;

use super::field::FieldController;
use super::validator::ValidationResult;

/// Result for one field of a form pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub name: String,
    #[serde(flatten)]
    pub result: ValidationResult,
}

/// Outcome of validating a whole form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormReport {
    fields: Vec<FieldReport>,
}

impl FormReport {
    /// Submission may proceed only when every checked field passed
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|f| f.result.is_valid())
    }

    pub fn fields(&self) -> &[FieldReport] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&ValidationResult> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.result)
    }

    pub fn failures(&self) -> impl Iterator<Item = &FieldReport> {
        self.fields.iter().filter(|f| !f.result.is_valid())
    }
}

/// Validate every required field of a form
///
/// Each required field is checked and its state updated even after an
/// earlier field failed, so all errors show at once. Fields without a
/// `Required` rule are left alone.
pub fn validate_form<'a, I>(fields: I) -> FormReport
where
    I: IntoIterator<Item = (&'a mut FieldController, &'a str)>,
{
    let fields: Vec<FieldReport> = fields
        .into_iter()
        .filter(|(field, _)| field.is_required())
        .map(|(field, value)| FieldReport {
            name: field.name().to_string(),
            result: field.on_submit(value),
        })
        .collect();

    let report = FormReport { fields };
    tracing::debug!(
        checked = report.fields.len(),
        failed = report.failures().count(),
        "Form validated"
    );
    report
}
