//! Server-rendered HTML pages
//!
//! Views only format what they are given. Validation happens before a view
//! is called.

pub mod components;
pub mod contact;
pub mod donation;
pub mod hire;
pub mod registration;
