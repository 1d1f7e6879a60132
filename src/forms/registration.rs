//! Student registration form
//!
//! Text and select fields are validated here. The student photo travels in
//! the same multipart request and is checked by [`crate::uploads`].

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::utils::helpers::capitalize_first;
use crate::validation::{check, FieldErrors, Validate};

pub const DAY_PLACEHOLDER: &str = "Day";
pub const MONTH_PLACEHOLDER: &str = "Month";
pub const YEAR_PLACEHOLDER: &str = "Year";
pub const COURSE_PLACEHOLDER: &str =
    "------------------------ Select Current Course's ------------------------";

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Birth years offered in the year select
pub const BIRTH_YEARS: std::ops::RangeInclusive<i32> = 1997..=2008;

pub const COUNTRY_CODES: [&str; 4] = ["+91", "+1", "+44", "+61"];
pub const DEFAULT_COUNTRY_CODE: &str = "+91";

pub const GENDERS: [&str; 2] = ["male", "female"];
pub const DEPARTMENTS: [&str; 5] = ["CSE", "IT", "ECE", "Civil", "Mech"];
pub const COURSES: [&str; 5] = ["B.Tech", "M.Tech", "B.Sc", "M.Sc", "Diploma"];

pub const MIN_PASSWORD_BYTES: usize = 6;
pub const MIN_ADDRESS_BYTES: usize = 5;

static ROLL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\-/]{2,20}$").expect("roll pattern compiles"));

static STUDENT_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z\t\n\x0B\x0C\r .'-]{1,49}$").expect("student name pattern compiles")
});

static LONG_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z\t\n\x0B\x0C\r .'-]{1,60}$").expect("long name pattern compiles")
});

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6,15}$").expect("mobile pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationSubmission {
    pub roll: String,
    pub first_name: String,
    pub last_name: String,
    pub father: String,
    pub dob_day: String,
    pub dob_month: String,
    pub dob_year: String,
    pub cc: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub pwd: String,
    pub gender: String,
    pub dept: Vec<String>,
    pub course: String,
    pub city: String,
    pub address: String,
}

impl Default for RegistrationSubmission {
    fn default() -> Self {
        Self {
            roll: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            father: String::new(),
            dob_day: DAY_PLACEHOLDER.to_string(),
            dob_month: MONTH_PLACEHOLDER.to_string(),
            dob_year: YEAR_PLACEHOLDER.to_string(),
            cc: DEFAULT_COUNTRY_CODE.to_string(),
            phone: String::new(),
            email: String::new(),
            pwd: String::new(),
            gender: String::new(),
            dept: Vec::new(),
            course: COURSE_PLACEHOLDER.to_string(),
            city: String::new(),
            address: String::new(),
        }
    }
}

impl RegistrationSubmission {
    /// Assign one multipart text field by name. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "roll" => self.roll = value.trim().to_string(),
            "first_name" => self.first_name = value.trim().to_string(),
            "last_name" => self.last_name = value.trim().to_string(),
            "father" => self.father = value.trim().to_string(),
            "dob_day" => self.dob_day = value,
            "dob_month" => self.dob_month = value,
            "dob_year" => self.dob_year = value,
            "cc" => self.cc = value,
            "phone" => self.phone = value.trim().to_string(),
            "email" => self.email = value.trim().to_string(),
            "pwd" => self.pwd = value,
            "gender" => self.gender = value,
            "dept" | "dept[]" => self.dept.push(value),
            "course" => self.course = value,
            "city" => self.city = value.trim().to_string(),
            "address" => self.address = value.trim().to_string(),
            _ => {}
        }
    }

    /// The selected birth date, if it names a real calendar day
    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        let day = self.dob_day.parse::<u32>().ok()?;
        let month = MONTHS.iter().position(|m| *m == self.dob_month)? as u32 + 1;
        let year = self.dob_year.parse::<i32>().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    fn dob_incomplete(&self) -> bool {
        self.dob_day == DAY_PLACEHOLDER
            || self.dob_month == MONTH_PLACEHOLDER
            || self.dob_year == YEAR_PLACEHOLDER
    }

    /// Birth date as `DD-Mon-YYYY`
    pub fn formatted_dob(&self) -> String {
        match self.date_of_birth() {
            Some(date) => date.format("%d-%b-%Y").to_string(),
            None => format!("{}-{}-{}", self.dob_day, self.dob_month, self.dob_year),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn mobile(&self) -> String {
        format!("{} - {}", self.cc, self.phone)
    }

    pub fn display_gender(&self) -> String {
        capitalize_first(&self.gender)
    }

    pub fn departments(&self) -> String {
        self.dept.join(", ")
    }

    fn validate_dob(&self, errors: &mut FieldErrors) {
        if self.dob_incomplete() {
            errors.insert("dob", "Please select a complete date of birth.");
        } else if self.date_of_birth().is_none() {
            errors.insert("dob", "Date of birth is invalid.");
        }
    }

    fn validate_departments(&self, errors: &mut FieldErrors) {
        if self.dept.is_empty() {
            errors.insert("dept", "Select at least one department.");
        } else if self.dept.iter().any(|d| !DEPARTMENTS.contains(&d.as_str())) {
            errors.insert("dept", "Invalid department selected.");
        }
    }
}

impl Validate for RegistrationSubmission {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        check(&mut errors, "roll", &self.roll)
            .required("Roll number is required.")
            .matches(&ROLL_PATTERN, "Use 2–20 chars (letters, numbers, -, /).");

        check(&mut errors, "first_name", &self.first_name)
            .required("First name is required.")
            .matches(&STUDENT_NAME_PATTERN, "Enter a valid first name.");
        check(&mut errors, "last_name", &self.last_name)
            .required("Last name is required.")
            .matches(&STUDENT_NAME_PATTERN, "Enter a valid last name.");

        check(&mut errors, "father", &self.father)
            .required("Father's name is required.")
            .matches(&LONG_NAME_PATTERN, "Enter a valid father's name.");

        self.validate_dob(&mut errors);

        check(&mut errors, "cc", &self.cc).one_of(&COUNTRY_CODES, "Select a valid country code.");
        check(&mut errors, "phone", &self.phone)
            .required("Phone number is required.")
            .matches(&PHONE_PATTERN, "Digits only (6–15).");

        check(&mut errors, "email", &self.email)
            .required("Email is required.")
            .email("Email format is invalid.");

        check(&mut errors, "pwd", &self.pwd)
            .required("Password is required.")
            .min_bytes(MIN_PASSWORD_BYTES, "Use at least 6 characters.");

        check(&mut errors, "gender", &self.gender).one_of(&GENDERS, "Please choose your gender.");

        self.validate_departments(&mut errors);

        check(&mut errors, "course", &self.course)
            .not_placeholder(COURSE_PLACEHOLDER, "Please select a course.")
            .one_of(&COURSES, "Invalid course selected.");

        check(&mut errors, "city", &self.city)
            .required("City is required.")
            .matches(&LONG_NAME_PATTERN, "Enter a valid city.");

        check(&mut errors, "address", &self.address)
            .required("Address is required.")
            .min_bytes(MIN_ADDRESS_BYTES, "Address looks too short.");

        errors
    }
}
