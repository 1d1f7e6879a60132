//! Student photo checks
//!
//! The image type is sniffed from the leading bytes of the file. The client's
//! declared content type and file extension are ignored.

use axum::body::Bytes;

use crate::utils::helpers::format_bytes;

/// The photo part of a registration request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoUpload {
    /// No file part, or a file part with no name and no content
    Missing,
    /// The file part could not be read from the request
    Failed(String),
    Received { file_name: String, data: Bytes },
}

impl PhotoUpload {
    /// Classify a multipart file part
    pub fn from_part(file_name: Option<String>, data: Bytes) -> Self {
        let file_name = file_name.unwrap_or_default();
        if file_name.is_empty() && data.is_empty() {
            PhotoUpload::Missing
        } else {
            PhotoUpload::Received { file_name, data }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Webp,
}

impl ImageKind {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Png => "image/png",
            ImageKind::Webp => "image/webp",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageKind::Jpeg => "jpg",
            ImageKind::Png => "png",
            ImageKind::Webp => "webp",
        }
    }
}

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF];

/// Detect an accepted image type from magic bytes
pub fn sniff_image_kind(data: &[u8]) -> Option<ImageKind> {
    if data.starts_with(JPEG_SIGNATURE) {
        Some(ImageKind::Jpeg)
    } else if data.starts_with(PNG_SIGNATURE) {
        Some(ImageKind::Png)
    } else if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        Some(ImageKind::Webp)
    } else {
        None
    }
}

/// A photo that passed every check and can be stored
#[derive(Debug, Clone)]
pub struct AcceptedPhoto {
    pub original_name: String,
    pub kind: ImageKind,
    pub data: Bytes,
}

/// Why a photo was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoRejection {
    Missing,
    TransferFailed,
    TooLarge { limit: usize },
    UnsupportedType,
    SaveFailed,
}

impl PhotoRejection {
    pub fn message(&self) -> String {
        match self {
            PhotoRejection::Missing => "Please upload a student photo.".to_string(),
            PhotoRejection::TransferFailed => "File upload failed. Please try again.".to_string(),
            PhotoRejection::TooLarge { limit } => {
                format!("Max file size is {}.", format_bytes(*limit as u64))
            }
            PhotoRejection::UnsupportedType => "Allowed types: JPG, PNG, WEBP.".to_string(),
            PhotoRejection::SaveFailed => "Could not save uploaded file.".to_string(),
        }
    }
}

/// Check presence, size and sniffed type, in that order
pub fn check_photo(upload: &PhotoUpload, max_bytes: usize) -> Result<AcceptedPhoto, PhotoRejection> {
    let (file_name, data) = match upload {
        PhotoUpload::Missing => return Err(PhotoRejection::Missing),
        PhotoUpload::Failed(_) => return Err(PhotoRejection::TransferFailed),
        PhotoUpload::Received { file_name, data } => (file_name, data),
    };

    if data.len() > max_bytes {
        return Err(PhotoRejection::TooLarge { limit: max_bytes });
    }

    let kind = sniff_image_kind(data).ok_or(PhotoRejection::UnsupportedType)?;

    Ok(AcceptedPhoto {
        original_name: file_name.clone(),
        kind,
        data: data.clone(),
    })
}
