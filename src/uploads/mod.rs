//! Photo uploads for the registration form

pub mod photo;
pub mod store;

pub use photo::{check_photo, AcceptedPhoto, ImageKind, PhotoRejection, PhotoUpload};
pub use store::{PhotoStore, StoredPhoto};
