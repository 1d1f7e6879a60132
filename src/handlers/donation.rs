use axum::{
    extract::Query,
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use super::respond;
use crate::forms::{DonationSubmission, FormKind, FormOutcome};
use crate::validation::{FieldErrors, Validate};
use crate::views;
use crate::views::donation::SUCCESS_MESSAGE;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub reset: Option<String>,
}

/// Blank form. `?reset=...` redirects back to the bare path.
pub async fn show(Query(query): Query<PageQuery>) -> Response {
    if query.reset.is_some() {
        return Redirect::to(FormKind::Donation.path()).into_response();
    }
    Html(views::donation::render(&DonationSubmission::default(), &FieldErrors::new(), false)).into_response()
}

pub async fn submit(headers: HeaderMap, Form(submission): Form<DonationSubmission>) -> Response {
    let submission = submission.normalized();
    let errors = submission.validate();

    let mut outcome = FormOutcome::new(FormKind::Donation, submission, errors);
    if outcome.valid {
        outcome = outcome.with_message(SUCCESS_MESSAGE);
    }

    respond(&headers, outcome, |outcome| {
        views::donation::render(&outcome.values, &outcome.errors, outcome.valid)
    })
}
