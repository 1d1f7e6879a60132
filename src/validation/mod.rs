//! Shared form validation engine
//!
//! Forms describe their rules as [`rules::FieldCheck`] chains and collect
//! failures into [`FieldErrors`].

pub mod errors;
pub mod rules;

pub use errors::FieldErrors;
pub use rules::{check, is_valid_email, FieldCheck};

/// A submission that can validate itself
pub trait Validate {
    fn validate(&self) -> FieldErrors;
}
