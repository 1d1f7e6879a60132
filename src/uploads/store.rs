//! Local directory storage for accepted photos

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tokio::{fs, io::AsyncWriteExt};
use tracing::debug;

use super::photo::{AcceptedPhoto, ImageKind};
use crate::config::UploadConfig;
use crate::utils::errors::{FormDeskError, Result};
use crate::utils::helpers::{generate_uuid, sanitize_file_stem};

/// Where a photo ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPhoto {
    pub file_name: String,
    pub path: PathBuf,
    pub public_url: String,
}

#[derive(Debug, Clone)]
pub struct PhotoStore {
    directory: PathBuf,
    public_prefix: String,
}

impl PhotoStore {
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            directory: PathBuf::from(&config.directory),
            public_prefix: config.public_prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn public_prefix(&self) -> &str {
        &self.public_prefix
    }

    /// Create the upload directory if it does not exist yet
    pub async fn ensure_directory(&self) -> Result<()> {
        fs::create_dir_all(&self.directory).await?;
        Ok(())
    }

    /// `<sanitized stem>_<unix seconds>.<ext>`, with `photo` for an empty stem
    pub fn stored_file_name(original_name: &str, kind: ImageKind, received_at: DateTime<Utc>) -> String {
        let stem = sanitize_file_stem(original_name);
        let stem = if stem.is_empty() { "photo".to_string() } else { stem };
        format!("{}_{}.{}", stem, received_at.timestamp(), kind.extension())
    }

    /// Write the photo without overwriting an existing file
    pub async fn save(&self, photo: &AcceptedPhoto) -> Result<StoredPhoto> {
        self.ensure_directory().await?;

        let mut file_name = Self::stored_file_name(&photo.original_name, photo.kind, Utc::now());
        let mut path = self.directory.join(&file_name);

        let mut file = match open_new(&path).await {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                let suffix = generate_uuid();
                file_name = format!(
                    "{}_{}.{}",
                    file_name.trim_end_matches(&format!(".{}", photo.kind.extension())),
                    &suffix[..8],
                    photo.kind.extension()
                );
                path = self.directory.join(&file_name);
                debug!(file_name = %file_name, "Upload name taken, using suffixed name");
                open_new(&path).await?
            }
            Err(e) => {
                return Err(FormDeskError::Upload(format!(
                    "Cannot create {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        file.write_all(&photo.data).await?;
        file.flush().await?;

        Ok(StoredPhoto {
            public_url: format!("{}/{}", self.public_prefix, file_name),
            file_name,
            path,
        })
    }
}

async fn open_new(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new().write(true).create_new(true).open(path).await
}
