//! Router-wide behaviour: health, feature flags, rate limiting, request ids

mod helpers;

use axum::http::StatusCode;
use helpers::*;

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new();
    let response = ctx.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], FormDesk::VERSION);
}

#[tokio::test]
async fn test_disabled_forms_are_not_routed() {
    let ctx = TestContext::with_settings(|settings| {
        settings.features.donation_form = false;
        settings.features.hire_form = false;
    });

    assert_eq!(ctx.get("/donation").await.status, StatusCode::NOT_FOUND);
    assert_eq!(
        ctx.post_form("/hire", &[("hireOption", "job")]).await.status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(ctx.get("/contact").await.status, StatusCode::OK);
    assert_eq!(ctx.get("/registration").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let ctx = TestContext::new();
    assert_eq!(ctx.get("/admin").await.status, StatusCode::NOT_FOUND);
    assert_eq!(ctx.get("/uploads/missing.png").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_submissions_are_rate_limited() {
    let ctx = TestContext::with_settings(|settings| {
        settings.rate_limit.enabled = true;
        settings.rate_limit.requests_per_minute = 2;
        settings.rate_limit.burst = 0;
    });

    let fields = [("hireOption", "job")];
    assert_eq!(ctx.post_form("/hire", &fields).await.status, StatusCode::OK);
    assert_eq!(ctx.post_form("/hire", &fields).await.status, StatusCode::OK);
    assert_eq!(
        ctx.post_form("/hire", &fields).await.status,
        StatusCode::TOO_MANY_REQUESTS
    );

    // page loads are not limited
    assert_eq!(ctx.get("/hire").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_request_id_header() {
    let ctx = TestContext::new();

    let response = ctx.get("/health").await;
    let generated = response.header("x-request-id").expect("request id");
    assert_eq!(generated.len(), 36);

    let request = axum::http::Request::builder()
        .uri("/health")
        .header("x-request-id", "trace-me")
        .body(axum::body::Body::empty())
        .expect("request");
    let response = ctx.send(request).await;
    assert_eq!(response.header("x-request-id"), Some("trace-me"));
}

#[tokio::test]
async fn test_html_is_default_response() {
    let ctx = TestContext::new();
    let response = ctx.post_form("/hire", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .header("content-type")
        .unwrap_or_default()
        .starts_with("text/html"));
    assert!(response.body.contains("Please select a hire option."));
}
