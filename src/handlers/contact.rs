use axum::{http::HeaderMap, response::{Html, Response}, Form};

use super::respond;
use crate::forms::{ContactSubmission, FormKind, FormOutcome};
use crate::validation::{FieldErrors, Validate};
use crate::views;

pub async fn show() -> Html<String> {
    Html(views::contact::render(&ContactSubmission::default(), &FieldErrors::new(), false))
}

pub async fn submit(headers: HeaderMap, Form(submission): Form<ContactSubmission>) -> Response {
    let submission = submission.normalized();
    let errors = submission.validate();

    let mut outcome = FormOutcome::new(FormKind::Contact, submission, errors);
    if outcome.valid {
        let message = outcome.values.success_message();
        outcome = outcome.with_message(message);
    }

    respond(&headers, outcome, |outcome| {
        views::contact::render(&outcome.values, &outcome.errors, outcome.valid)
    })
}
