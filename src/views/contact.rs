use super::components::{field_error, input, page, select, success_banner, textarea};
use crate::forms::contact::{ContactSubmission, SERVICES};
use crate::validation::FieldErrors;

/// Contact page with sticky values, inline errors and an optional thank-you
pub fn render(values: &ContactSubmission, errors: &FieldErrors, success: bool) -> String {
    let mut body = String::from("<section class=\"contact-form\">\n<h2>Contact Me</h2>\n");

    if success {
        body.push_str(&success_banner(&values.success_message()));
    }

    body.push_str("<form id=\"contactForm\" action=\"/contact\" method=\"post\" novalidate>\n");

    body.push_str(&group(
        "Name:",
        &input("text", "name", &values.name, errors.contains("name")),
        errors,
        "name",
    ));
    body.push_str(&group(
        "Email:",
        &input("email", "email", &values.email, errors.contains("email")),
        errors,
        "email",
    ));

    let mut services = vec![("", "-- Select a service --")];
    services.extend(SERVICES.iter().map(|s| (*s, *s)));
    body.push_str(&group(
        "What services do you want from me?",
        &select("service", &services, &values.service, errors.contains("service")),
        errors,
        "service",
    ));

    body.push_str(&group(
        "Message:",
        &textarea("message", &values.message, errors.contains("message")),
        errors,
        "message",
    ));

    body.push_str("<button type=\"submit\">Submit</button>\n</form>\n</section>\n");

    page("Contact", &body)
}

fn group(label: &str, control: &str, errors: &FieldErrors, field: &str) -> String {
    format!(
        "<div class=\"form-group\">\n<label for=\"{}\">{}</label>\n{}\n{}</div>\n",
        field,
        label,
        control,
        field_error(errors, field)
    )
}
