use anyhow::Result;

use medilab_core::validation::{ContactForm, ContactSubmission};
use medilab_core::AppConfig;

pub fn run(config: &AppConfig, submission: &ContactSubmission, json: bool) -> Result<bool> {
    let mut form = ContactForm::new(&config.validation);
    let report = form.validate(submission);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report.is_valid());
    }

    for field in report.fields() {
        match field.result.message() {
            None => println!("  {:<8} ok", field.name),
            Some(message) => println!("  {:<8} {}", field.name, message),
        }
    }
    println!();

    if report.is_valid() {
        println!(
            "Thank you for your message! We will get back to you within 24 hours. ({})",
            submission.service
        );
    } else {
        println!("Please correct the highlighted fields before submitting.");
    }

    Ok(report.is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use medilab_core::validation::Service;

    #[test]
    fn test_refused_submission_reports_failure() {
        let submission = ContactSubmission {
            name: String::new(),
            email: "jane@example.org".to_string(),
            phone: String::new(),
            service: Service::General,
            message: "Hi".to_string(),
        };
        assert!(!run(&AppConfig::default(), &submission, true).unwrap());
    }

    #[test]
    fn test_accepted_submission_reports_success() {
        let submission = ContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.org".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            service: Service::Pathology,
            message: "Please send me your biopsy turnaround times.".to_string(),
        };
        assert!(run(&AppConfig::default(), &submission, false).unwrap());
    }
}
