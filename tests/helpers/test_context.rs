//! Test context for unified test setup
//!
//! Builds the application router against a temporary upload directory and
//! drives it in-process with `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use tempfile::TempDir;
use tower::ServiceExt;

use FormDesk::{build_router, config::Settings, AppState};

use super::multipart::MultipartBody;

const MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

/// Router plus the directory its uploads land in
pub struct TestContext {
    pub settings: Settings,
    pub upload_dir: TempDir,
    app: Router,
}

impl TestContext {
    /// Default settings with rate limiting off
    pub fn new() -> Self {
        Self::with_settings(|_| {})
    }

    /// Adjust the test settings before the router is built
    pub fn with_settings(configure: impl FnOnce(&mut Settings)) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");

        let mut settings = Settings::default();
        settings.uploads.directory = upload_dir.path().to_string_lossy().into_owned();
        settings.rate_limit.enabled = false;
        settings.logging.level = "debug".to_string();
        configure(&mut settings);

        let app = build_router(AppState::new(settings.clone()));

        Self {
            settings,
            upload_dir,
            app,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), MAX_RESPONSE_BYTES)
            .await
            .expect("Failed to read response body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&body).into_owned(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
    }

    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        self.send(form_request(uri, fields, false)).await
    }

    pub async fn post_form_json(&self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        self.send(form_request(uri, fields, true)).await
    }

    pub async fn post_multipart(&self, uri: &str, body: MultipartBody, json: bool) -> TestResponse {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, body.content_type());
        if json {
            builder = builder.header(header::ACCEPT, "application/json");
        }
        self.send(builder.body(Body::from(body.finish())).expect("Failed to build request"))
            .await
    }

    /// Names of the files currently in the upload directory
    pub fn stored_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.upload_dir.path())
            .expect("Failed to read upload dir")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// `application/x-www-form-urlencoded` POST
pub fn form_request(uri: &str, fields: &[(&str, &str)], json: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if json {
        builder = builder.header(header::ACCEPT, "application/json");
    }
    builder
        .body(Body::from(encode_form(fields)))
        .expect("Failed to build request")
}

pub fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{}={}", urlencoding::encode(name), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Buffered response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("Response is not JSON")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}
