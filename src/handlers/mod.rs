//! HTTP handlers module
//!
//! One module per form. Every form is served with `GET` and submitted with
//! `POST` on the same path. Responses are HTML unless the client asks for
//! JSON through its `Accept` header.

pub mod contact;
pub mod donation;
pub mod hire;
pub mod registration;

use std::sync::Arc;

use axum::{
    http::{header::ACCEPT, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::config::Settings;
use crate::forms::FormOutcome;
use crate::middleware::RateLimitMiddleware;
use crate::uploads::PhotoStore;
use crate::utils::helpers::format_timestamp;
use crate::utils::logging::log_submission;

/// State shared by every handler
#[derive(Clone, Debug)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub photos: PhotoStore,
    pub rate_limiter: RateLimitMiddleware,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let photos = PhotoStore::new(&settings.uploads);
        let rate_limiter = RateLimitMiddleware::from_settings(&settings.rate_limit);
        Self {
            settings: Arc::new(settings),
            photos,
            rate_limiter,
        }
    }
}

/// Whether the client prefers a JSON outcome over an HTML page
pub fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get_all(ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.contains("application/json"))
}

/// Log the outcome and answer with JSON or with the page built by `render`.
///
/// JSON answers are `200` for a valid submission and `422` otherwise; HTML
/// pages are always `200` with the errors inline.
pub fn respond<V, F>(headers: &HeaderMap, outcome: FormOutcome<V>, render: F) -> Response
where
    V: Serialize,
    F: FnOnce(&FormOutcome<V>) -> String,
{
    log_submission(outcome.form.as_str(), outcome.valid, outcome.errors.len());

    if wants_json(headers) {
        let status = if outcome.valid {
            StatusCode::OK
        } else {
            StatusCode::UNPROCESSABLE_ENTITY
        };
        return (status, Json(outcome)).into_response();
    }

    Html(render(&outcome)).into_response()
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": crate::NAME,
        "version": crate::VERSION,
        "time": format_timestamp(chrono::Utc::now()),
    }))
}
