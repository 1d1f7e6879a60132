//! "Hire me" form with a single project/job choice

use serde::{Deserialize, Serialize};

use crate::validation::{FieldErrors, Validate};

pub const FIELD: &str = "hireOption";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HireOption {
    Project,
    Job,
}

impl HireOption {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "project" => Some(HireOption::Project),
            "job" => Some(HireOption::Job),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HireOption::Project => "project",
            HireOption::Job => "job",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HireOption::Project => "Hire me for a project",
            HireOption::Job => "Hire me for a job",
        }
    }

    pub fn thank_you(&self) -> &'static str {
        match self {
            HireOption::Project => {
                "Thank you for choosing to hire me for a project! I will get back to you shortly."
            }
            HireOption::Job => {
                "Thank you for your interest in hiring me for a job! I will be in touch soon."
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HireSubmission {
    #[serde(rename = "hireOption")]
    pub hire_option: String,
}

impl HireSubmission {
    pub fn normalized(self) -> Self {
        Self {
            hire_option: self.hire_option.trim().to_string(),
        }
    }

    pub fn option(&self) -> Option<HireOption> {
        HireOption::parse(&self.hire_option)
    }
}

impl Validate for HireSubmission {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.option().is_none() {
            errors.insert(FIELD, "Please select a hire option.");
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_known_options() {
        let submission = HireSubmission { hire_option: " job ".to_string() }.normalized();
        assert_matches!(submission.option(), Some(HireOption::Job));
        assert!(submission.validate().is_empty());
        assert!(HireOption::Project.thank_you().contains("for a project"));
    }

    #[test]
    fn test_missing_option() {
        let errors = HireSubmission::default().validate();
        assert_eq!(errors.get(FIELD), Some("Please select a hire option."));

        let errors = HireSubmission { hire_option: "internship".to_string() }.validate();
        assert_eq!(errors.len(), 1);
    }
}
