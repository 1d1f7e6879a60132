//! "Contact Me" form
//!
//! Name, email, requested service and a free-text message.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::utils::helpers::strip_slashes;
use crate::validation::{check, FieldErrors, Validate};

/// Services offered in the select box, in display order
pub const SERVICES: [&str; 5] = [
    "Web Development",
    "Leaderships",
    "Software Quality Assurance",
    "UI/UX Designing",
    "Circuit Designing",
];

pub const MIN_MESSAGE_CHARS: usize = 10;

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z\t\n\x0B\x0C\r '.-]{2,50}$").expect("contact name pattern compiles")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl ContactSubmission {
    /// Trim every field and drop backslash escapes
    pub fn normalized(self) -> Self {
        let clean = |value: String| strip_slashes(value.trim()).trim().to_string();
        Self {
            name: clean(self.name),
            email: clean(self.email),
            service: clean(self.service),
            message: clean(self.message),
        }
    }

    pub fn success_message(&self) -> String {
        format!("Thanks, {}! Your message has been received.", self.name)
    }
}

impl Validate for ContactSubmission {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        check(&mut errors, "name", &self.name)
            .required("Name is required.")
            .matches(&NAME_PATTERN, "Please enter a valid name (letters, spaces, . ' -).");

        check(&mut errors, "email", &self.email)
            .required("Email is required.")
            .email("Please enter a valid email address.");

        check(&mut errors, "service", &self.service)
            .required("Please select a service.")
            .one_of(&SERVICES, "Invalid service selected.");

        check(&mut errors, "message", &self.message)
            .required("Message is required.")
            .min_chars(MIN_MESSAGE_CHARS, "Message should be at least 10 characters.");

        errors
    }
}
