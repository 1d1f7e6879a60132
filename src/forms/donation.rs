//! Donation form
//!
//! Donor details, the donation amount (with an optional recurring plan),
//! honorarium/memorial acknowledgement and contact preferences. Several rules
//! only apply when their trigger field is set:
//!
//! - `other_amount` is checked only when `amount` is `other`
//! - `monthly_amount` and `months` only when `recurring` is ticked
//! - the `ack_*` fields only when `honor` is `to_honor` or `in_memory`

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::validation::{check, FieldErrors, Validate};

/// US state codes offered in both state selects
pub const STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DC", "DE", "FL", "GA", "HI", "IA", "ID", "IL",
    "IN", "KS", "KY", "LA", "MA", "MD", "ME", "MI", "MN", "MO", "MS", "MT", "NC", "ND", "NE",
    "NH", "NJ", "NM", "NV", "NY", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VA", "VT", "WA", "WI", "WV", "WY",
];

pub const COUNTRIES: [&str; 4] = ["United States", "Canada", "United Kingdom", "Australia"];

/// Donation amount radio values and their labels
pub const AMOUNTS: [(&str, &str); 6] = [
    ("none", "None"),
    ("50", "$50"),
    ("75", "$75"),
    ("100", "$100"),
    ("250", "$250"),
    ("other", "Other"),
];

pub const AMOUNT_OTHER: &str = "other";

/// Honor radio values and their labels
pub const HONOR_OPTIONS: [(&str, &str); 2] = [("to_honor", "To Honor"), ("in_memory", "In Memory of")];

pub static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9+\-\t\n\x0B\x0C\r ().]{7,}$").expect("phone pattern compiles")
});

pub static ZIP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9\- ]{3,10}$").expect("zip pattern compiles")
});

/// Raw donation submission. Checkbox fields are `Some` when ticked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationSubmission {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub addr1: String,
    pub addr2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub phone: String,
    pub fax: String,
    pub email: String,
    pub amount: String,
    pub other_amount: String,
    pub recurring: Option<String>,
    pub monthly_amount: String,
    pub months: String,
    pub honor: String,
    pub ack_name: String,
    pub ack_addr: String,
    pub ack_city: String,
    pub ack_state: String,
    pub ack_zip: String,
    pub pub_name: String,
    pub anonymous: Option<String>,
    pub matching: Option<String>,
    pub no_thanks: Option<String>,
    pub comments: String,
    pub volunteer_with: String,
    pub contact_email: Option<String>,
    pub contact_postal: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_fax: Option<String>,
    pub newsletter_email: Option<String>,
    pub newsletter_postal: Option<String>,
}

impl DonationSubmission {
    /// Trim every text field
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.first_name,
            &mut self.last_name,
            &mut self.company,
            &mut self.addr1,
            &mut self.addr2,
            &mut self.city,
            &mut self.state,
            &mut self.zip,
            &mut self.country,
            &mut self.phone,
            &mut self.fax,
            &mut self.email,
            &mut self.amount,
            &mut self.other_amount,
            &mut self.monthly_amount,
            &mut self.months,
            &mut self.honor,
            &mut self.ack_name,
            &mut self.ack_addr,
            &mut self.ack_city,
            &mut self.ack_state,
            &mut self.ack_zip,
            &mut self.pub_name,
            &mut self.comments,
            &mut self.volunteer_with,
        ] {
            let trimmed = field.trim();
            if trimmed.len() != field.len() {
                *field = trimmed.to_string();
            }
        }
        self
    }

    pub fn is_recurring(&self) -> bool {
        self.recurring.is_some()
    }

    /// Whether an honorarium or memorial acknowledgement was requested
    pub fn wants_acknowledgement(&self) -> bool {
        HONOR_OPTIONS.iter().any(|(value, _)| *value == self.honor)
    }

    pub fn has_contact_method(&self) -> bool {
        self.contact_email.is_some()
            || self.contact_postal.is_some()
            || self.contact_phone.is_some()
            || self.contact_fax.is_some()
    }

    fn validate_donor(&self, errors: &mut FieldErrors) {
        check(errors, "first_name", &self.first_name).required("First name is required.");
        check(errors, "last_name", &self.last_name).required("Last name is required.");
        check(errors, "addr1", &self.addr1).required("Address 1 is required.");
        check(errors, "city", &self.city).required("City is required.");
        check(errors, "state", &self.state)
            .required("State is required.")
            .one_of(&STATES, "Select a valid state.");
        check(errors, "zip", &self.zip)
            .required("Zip code is required.")
            .matches(&ZIP_PATTERN, "Enter a valid zip/postal code.");
        check(errors, "country", &self.country)
            .required("Country is required.")
            .one_of(&COUNTRIES, "Select a valid country.");
        check(errors, "email", &self.email)
            .required("Email is required.")
            .email("Enter a valid email address.");

        check(errors, "phone", &self.phone)
            .optional()
            .matches(&PHONE_PATTERN, "Enter a valid phone number.");
        check(errors, "fax", &self.fax)
            .optional()
            .matches(&PHONE_PATTERN, "Enter a valid fax number.");
    }

    fn validate_amount(&self, errors: &mut FieldErrors) {
        let amounts: Vec<&str> = AMOUNTS.iter().map(|(value, _)| *value).collect();
        check(errors, "amount", &self.amount)
            .required("Select a donation amount or choose Other and specify.")
            .one_of(&amounts, "Select a donation amount or choose Other and specify.");

        if self.amount == AMOUNT_OTHER {
            check(errors, "other_amount", &self.other_amount)
                .required("Enter your other amount.")
                .positive_number("Other amount must be a positive number.");
        }

        if self.is_recurring() {
            check(errors, "monthly_amount", &self.monthly_amount)
                .positive_number("Monthly amount must be a positive number.");
            check(errors, "months", &self.months)
                .whole_number_at_least(1, "Enter number of months (1 or more).");
        }
    }

    fn validate_acknowledgement(&self, errors: &mut FieldErrors) {
        if !self.wants_acknowledgement() {
            return;
        }

        check(errors, "ack_name", &self.ack_name).required("Please enter a name to acknowledge.");
        check(errors, "ack_addr", &self.ack_addr).required("Please enter the address.");
        check(errors, "ack_city", &self.ack_city).required("Please enter the city.");
        check(errors, "ack_state", &self.ack_state)
            .required("Please select a state.")
            .one_of(&STATES, "Please select a state.");
        check(errors, "ack_zip", &self.ack_zip)
            .required("Please enter the zip.")
            .matches(&ZIP_PATTERN, "Enter a valid zip/postal code.");
    }
}

impl Validate for DonationSubmission {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        self.validate_donor(&mut errors);
        self.validate_amount(&mut errors);
        self.validate_acknowledgement(&mut errors);

        if !self.has_contact_method() {
            errors.insert("contact", "Select at least one contact method.");
        }

        errors
    }
}
