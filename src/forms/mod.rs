//! Form definitions
//!
//! One module per served form. Each submission type trims its own input and
//! implements [`crate::validation::Validate`].

pub mod contact;
pub mod donation;
pub mod hire;
pub mod registration;

use serde::Serialize;

use crate::validation::FieldErrors;

pub use contact::ContactSubmission;
pub use donation::DonationSubmission;
pub use hire::{HireOption, HireSubmission};
pub use registration::RegistrationSubmission;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Contact,
    Donation,
    Registration,
    Hire,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Donation => "donation",
            FormKind::Registration => "registration",
            FormKind::Hire => "hire",
        }
    }

    /// Route the form is served and submitted on
    pub fn path(&self) -> &'static str {
        match self {
            FormKind::Contact => "/contact",
            FormKind::Donation => "/donation",
            FormKind::Registration => "/registration",
            FormKind::Hire => "/hire",
        }
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of validating one submission, as returned to JSON clients
#[derive(Debug, Clone, Serialize)]
pub struct FormOutcome<V: Serialize> {
    pub form: FormKind,
    pub valid: bool,
    pub errors: FieldErrors,
    pub values: V,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<V: Serialize> FormOutcome<V> {
    pub fn new(form: FormKind, values: V, errors: FieldErrors) -> Self {
        Self {
            form,
            valid: errors.is_empty(),
            errors,
            values,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_serialization() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "Name is required.");
        let outcome = FormOutcome::new(FormKind::Contact, ContactSubmission::default(), errors);

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["form"], "contact");
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"]["name"], "Name is required.");
        assert!(json.get("message").is_none());
    }
}
