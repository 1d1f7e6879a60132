use super::components::{field_error, page, radio, success_banner};
use crate::forms::hire::{HireOption, HireSubmission, FIELD};
use crate::validation::FieldErrors;

pub fn render(values: &HireSubmission, errors: &FieldErrors) -> String {
    let mut body = String::from("<section class=\"hire\">\n<h2>Hire Me</h2>\n");

    if errors.is_empty() {
        if let Some(option) = values.option() {
            body.push_str(&success_banner(option.thank_you()));
        }
    }

    body.push_str("<form id=\"hireForm\" action=\"/hire\" method=\"post\">\n<div class=\"inline-group\">");
    for option in [HireOption::Project, HireOption::Job] {
        body.push_str(&radio(FIELD, option.as_str(), option.label(), values.hire_option == option.as_str()));
    }
    body.push_str("</div>\n");
    body.push_str(&field_error(errors, FIELD));
    body.push_str("<button type=\"submit\">Submit</button>\n</form>\n</section>\n");

    page("Hire Me", &body)
}
