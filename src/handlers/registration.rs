//! Student registration: multipart text fields plus the `photo` file part.
//!
//! The photo is checked alongside the text fields but only written to disk
//! once every other rule has passed.

use axum::{
    extract::{Multipart, State},
    http::HeaderMap,
    response::{Html, Response},
};
use serde::Serialize;
use tracing::error;

use super::{respond, AppState};
use crate::forms::{FormKind, FormOutcome, RegistrationSubmission};
use crate::uploads::{check_photo, PhotoRejection, PhotoUpload};
use crate::utils::errors::{FormDeskError, Result};
use crate::utils::logging::{log_upload_rejected, log_upload_stored};
use crate::validation::{FieldErrors, Validate};
use crate::views;

pub const PHOTO_FIELD: &str = "photo";

/// Echoed values for JSON clients. The password is never serialized.
#[derive(Debug, Serialize)]
pub struct RegistrationValues {
    #[serde(flatten)]
    pub student: RegistrationSubmission,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

pub async fn show() -> Html<String> {
    Html(views::registration::render(&RegistrationSubmission::default(), &FieldErrors::new(), None))
}

pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<Response> {
    let (submission, photo) = read_submission(multipart).await?;
    let mut errors = submission.validate();
    let form = FormKind::Registration.as_str();

    let stored = match check_photo(&photo, state.settings.uploads.max_photo_bytes) {
        Err(rejection) => {
            log_upload_rejected(form, &rejection.message());
            errors.insert(PHOTO_FIELD, rejection.message());
            None
        }
        Ok(accepted) if errors.is_empty() => match state.photos.save(&accepted).await {
            Ok(stored) => {
                log_upload_stored(form, &stored.file_name, accepted.data.len());
                Some(stored)
            }
            Err(e) => {
                error!(error = %e, "Failed to store registration photo");
                errors.insert(PHOTO_FIELD, PhotoRejection::SaveFailed.message());
                None
            }
        },
        Ok(_) => None,
    };

    let values = RegistrationValues {
        student: submission,
        photo_url: stored.as_ref().map(|photo| photo.public_url.clone()),
    };
    let mut outcome = FormOutcome::new(FormKind::Registration, values, errors);
    if outcome.valid {
        outcome = outcome.with_message("Registration successful.");
    }

    Ok(respond(&headers, outcome, |outcome| {
        views::registration::render(&outcome.values.student, &outcome.errors, stored.as_ref())
    }))
}

/// Collect text fields and the photo part from the request body.
///
/// A photo part that cannot be read ends the body; fields after it are
/// treated as absent. More than one photo part is rejected outright.
async fn read_submission(mut multipart: Multipart) -> Result<(RegistrationSubmission, PhotoUpload)> {
    let mut submission = RegistrationSubmission::default();
    let mut photo = PhotoUpload::Missing;
    let mut photo_seen = false;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == PHOTO_FIELD {
            if photo_seen {
                return Err(FormDeskError::InvalidInput(
                    "Only one photo may be uploaded".to_string(),
                ));
            }
            photo_seen = true;

            let file_name = field.file_name().map(str::to_string);
            match field.bytes().await {
                Ok(data) => photo = PhotoUpload::from_part(file_name, data),
                Err(e) => {
                    photo = PhotoUpload::Failed(e.to_string());
                    break;
                }
            }
        } else {
            let value = field.text().await?;
            submission.set_field(&name, value);
        }
    }

    Ok((submission, photo))
}

