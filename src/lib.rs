//! FormDesk
//!
//! Server-side validation for a small set of web forms: a contact form, a
//! donation form with conditional sections, a student registration form
//! with a photo upload, and a "hire me" choice. Each form is rendered as
//! HTML with sticky values and inline errors, or answered as JSON.

#![allow(non_snake_case)]

pub mod config;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod uploads;
pub mod utils;
pub mod validation;
pub mod views;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{FormDeskError, Result};

// Re-export main components for easy access
pub use forms::{FormKind, FormOutcome};
pub use handlers::AppState;
pub use server::build_router;
pub use validation::{FieldErrors, Validate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
