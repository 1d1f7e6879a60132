//! Field check chains
//!
//! A [`FieldCheck`] runs rules against one field in order and records the
//! first failing rule's message. Later rules are skipped once a rule fails,
//! and [`FieldCheck::optional`] skips them for empty input.

use once_cell::sync::Lazy;
use regex::Regex;

use super::FieldErrors;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r##"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$"##,
    )
    .expect("email pattern compiles")
});

static NUMERIC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("numeric pattern compiles")
});

const MAX_EMAIL_LENGTH: usize = 320;
const MAX_EMAIL_LOCAL_LENGTH: usize = 64;

/// Check an email address: dotted local part, `@`, and a multi-label domain
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LENGTH {
        return false;
    }

    match email.rsplit_once('@') {
        Some((local, _)) if local.len() <= MAX_EMAIL_LOCAL_LENGTH => EMAIL_PATTERN.is_match(email),
        _ => false,
    }
}

/// Decimal or exponent notation with an optional sign
pub fn is_numeric(value: &str) -> bool {
    NUMERIC_PATTERN.is_match(value)
}

/// A numeric value strictly greater than zero
pub fn is_positive_number(value: &str) -> bool {
    is_numeric(value) && value.parse::<f64>().map(|n| n > 0.0).unwrap_or(false)
}

/// Non-empty and ASCII digits only
pub fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Start a check chain for one field
pub fn check<'a>(errors: &'a mut FieldErrors, field: &'static str, value: &'a str) -> FieldCheck<'a> {
    FieldCheck {
        errors,
        field,
        value,
        settled: false,
    }
}

/// Ordered rules for a single field value
pub struct FieldCheck<'a> {
    errors: &'a mut FieldErrors,
    field: &'static str,
    value: &'a str,
    settled: bool,
}

impl<'a> FieldCheck<'a> {
    /// Fail when the value is empty
    pub fn required(self, message: &str) -> Self {
        let empty = self.value.is_empty();
        self.rule(!empty, message)
    }

    /// Skip the remaining rules when the value is empty
    pub fn optional(mut self) -> Self {
        if self.value.is_empty() {
            self.settled = true;
        }
        self
    }

    pub fn matches(self, pattern: &Regex, message: &str) -> Self {
        let ok = pattern.is_match(self.value);
        self.rule(ok, message)
    }

    pub fn email(self, message: &str) -> Self {
        let ok = is_valid_email(self.value);
        self.rule(ok, message)
    }

    /// Exact, case-sensitive membership
    pub fn one_of(self, allowed: &[&str], message: &str) -> Self {
        let ok = allowed.contains(&self.value);
        self.rule(ok, message)
    }

    /// Fail when the value still equals a select's placeholder option
    pub fn not_placeholder(self, placeholder: &str, message: &str) -> Self {
        let ok = self.value != placeholder;
        self.rule(ok, message)
    }

    /// Minimum length in characters
    pub fn min_chars(self, min: usize, message: &str) -> Self {
        let ok = self.value.chars().count() >= min;
        self.rule(ok, message)
    }

    /// Minimum length in bytes
    pub fn min_bytes(self, min: usize, message: &str) -> Self {
        let ok = self.value.len() >= min;
        self.rule(ok, message)
    }

    pub fn positive_number(self, message: &str) -> Self {
        let ok = is_positive_number(self.value);
        self.rule(ok, message)
    }

    /// All digits and at least `min`
    pub fn whole_number_at_least(self, min: u64, message: &str) -> Self {
        let ok = is_digits(self.value)
            && self.value.parse::<u64>().map(|n| n >= min).unwrap_or(true);
        self.rule(ok, message)
    }

    /// Arbitrary predicate over the value
    pub fn satisfies(self, predicate: impl FnOnce(&str) -> bool, message: &str) -> Self {
        let ok = predicate(self.value);
        self.rule(ok, message)
    }

    /// Whether every rule so far has passed
    pub fn passed(&self) -> bool {
        !self.errors.contains(self.field)
    }

    fn rule(mut self, ok: bool, message: &str) -> Self {
        if !self.settled && !ok {
            self.errors.insert(self.field, message);
            self.settled = true;
        }
        self
    }
}
