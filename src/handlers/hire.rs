use axum::{http::HeaderMap, response::{Html, Response}, Form};

use super::respond;
use crate::forms::{FormKind, FormOutcome, HireSubmission};
use crate::validation::{FieldErrors, Validate};
use crate::views;

pub async fn show() -> Html<String> {
    Html(views::hire::render(&HireSubmission::default(), &FieldErrors::new()))
}

pub async fn submit(headers: HeaderMap, Form(submission): Form<HireSubmission>) -> Response {
    let submission = submission.normalized();
    let errors = submission.validate();
    let option = submission.option();

    let mut outcome = FormOutcome::new(FormKind::Hire, submission, errors);
    if let Some(option) = option.filter(|_| outcome.valid) {
        outcome = outcome.with_message(option.thank_you());
    }

    respond(&headers, outcome, |outcome| views::hire::render(&outcome.values, &outcome.errors))
}
