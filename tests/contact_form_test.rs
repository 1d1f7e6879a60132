//! Contact form through the router

mod helpers;

use axum::http::StatusCode;
use helpers::*;

#[tokio::test]
async fn test_get_renders_blank_form() {
    let ctx = TestContext::new();
    let response = ctx.get("/contact").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .header("content-type")
        .unwrap_or_default()
        .starts_with("text/html"));
    assert!(response.body.contains("<form id=\"contactForm\""));
    assert!(!response.body.contains("class=\"error\""));
}

#[tokio::test]
async fn test_valid_submission_thanks_sender() {
    let ctx = TestContext::new();
    let response = ctx.post_form("/contact", &valid_contact()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .body
        .contains("Thanks, Ada Lovelace! Your message has been received."));
    assert!(!response.body.contains("class=\"error\""));
}

#[tokio::test]
async fn test_single_missing_field_reports_only_that_field() {
    let ctx = TestContext::new();
    let fields = with_field(valid_contact(), "email", "");
    let response = ctx.post_form_json("/contact", &fields).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json();
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"].as_object().map(|e| e.len()), Some(1));
    assert_eq!(json["errors"]["email"], "Email is required.");
}

#[tokio::test]
async fn test_absent_field_is_treated_as_empty() {
    let ctx = TestContext::new();
    let fields = without_field(valid_contact(), "service");
    let response = ctx.post_form_json("/contact", &fields).await;

    assert_eq!(response.json()["errors"]["service"], "Please select a service.");
}

#[tokio::test]
async fn test_values_are_escaped_and_sticky() {
    let ctx = TestContext::new();
    let fields = with_field(valid_contact(), "message", "<script>alert('x')</script>");
    let response = ctx.post_form("/contact", &fields).await;

    assert!(!response.body.contains("<script>alert"));
    assert!(response
        .body
        .contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
    assert!(response.body.contains("value=\"ada@example.org\""));
}

#[tokio::test]
async fn test_slashes_are_stripped_before_validation() {
    let ctx = TestContext::new();
    let fields = with_field(valid_contact(), "name", "O\\'Brien");
    let response = ctx.post_form_json("/contact", &fields).await;

    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    assert_eq!(json["values"]["name"], "O'Brien");
    assert_eq!(json["message"], "Thanks, O'Brien! Your message has been received.");
}

#[tokio::test]
async fn test_rule_messages() {
    let ctx = TestContext::new();
    let fields = vec![
        ("name", "A"),
        ("email", "not-an-email"),
        ("service", "Plumbing"),
        ("message", "too short"),
    ];
    let json = ctx.post_form_json("/contact", &fields).await.json();

    assert_eq!(
        json["errors"]["name"],
        "Please enter a valid name (letters, spaces, . ' -)."
    );
    assert_eq!(json["errors"]["email"], "Please enter a valid email address.");
    assert_eq!(json["errors"]["service"], "Invalid service selected.");
    assert_eq!(
        json["errors"]["message"],
        "Message should be at least 10 characters."
    );
}
