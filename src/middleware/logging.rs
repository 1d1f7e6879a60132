//! Request logging middleware
//!
//! Every request gets a UUID request id, a span carrying it, and a completion
//! log line with status and latency.

use std::time::{Duration, Instant};

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::{debug, info, warn, Instrument};

use crate::utils::helpers::generate_uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Requests slower than this are warned about
pub const SLOW_REQUEST_THRESHOLD: Duration = Duration::from_secs(1);

/// Measures one request from arrival to response
pub struct RequestTracker {
    request_id: String,
    method: Method,
    path: String,
    start_time: Instant,
}

impl RequestTracker {
    pub fn new(request_id: String, method: Method, path: String) -> Self {
        Self {
            request_id,
            method,
            path,
            start_time: Instant::now(),
        }
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Log the finished request and return its latency
    pub fn complete(self, status: StatusCode) -> Duration {
        let duration = self.start_time.elapsed();
        let duration_ms = duration.as_millis();

        if status.is_server_error() {
            warn!(
                method = %self.method,
                path = %self.path,
                status = status.as_u16(),
                duration_ms = duration_ms,
                "Request failed"
            );
        } else {
            info!(
                method = %self.method,
                path = %self.path,
                status = status.as_u16(),
                duration_ms = duration_ms,
                "Request completed"
            );
        }

        if duration > SLOW_REQUEST_THRESHOLD {
            warn!(
                method = %self.method,
                path = %self.path,
                duration_ms = duration_ms,
                "Slow request detected"
            );
        }

        duration
    }
}

/// Axum middleware: tag the request with an id and log its outcome
pub async fn log_requests(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(generate_uuid);

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        request.headers_mut().insert(REQUEST_ID_HEADER.clone(), value);
    }

    let tracker = RequestTracker::new(
        request_id.clone(),
        request.method().clone(),
        request.uri().path().to_string(),
    );
    let span = tracing::info_span!("request", request_id = %tracker.request_id());

    debug!(parent: &span, method = %request.method(), uri = %request.uri(), "Request received");
    let mut response = next.run(request).instrument(span.clone()).await;

    let status = response.status();
    span.in_scope(|| tracker.complete(status));

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER.clone(), value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_reports_duration() {
        let tracker = RequestTracker::new("abc".to_string(), Method::POST, "/contact".to_string());
        assert_eq!(tracker.request_id(), "abc");
        std::thread::sleep(Duration::from_millis(5));
        let duration = tracker.complete(StatusCode::OK);
        assert!(duration >= Duration::from_millis(5));
    }

    #[test]
    fn test_request_id_header_name() {
        assert_eq!(REQUEST_ID_HEADER.as_str(), "x-request-id");
    }
}
