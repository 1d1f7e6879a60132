//! Test helpers module
//!
//! Shared setup for the router-level tests: a test context with a temporary
//! upload directory, request builders and form fixtures.

#![allow(dead_code)]

pub mod multipart;
pub mod test_context;
pub mod test_data;

pub use multipart::*;
pub use test_context::*;
pub use test_data::*;
