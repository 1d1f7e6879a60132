use super::components::{checkbox, field_error, input, page, radio, row, select, success_banner, textarea};
use crate::forms::donation::{DonationSubmission, AMOUNTS, COUNTRIES, HONOR_OPTIONS, STATES};
use crate::validation::FieldErrors;

pub const SUCCESS_MESSAGE: &str = "All good! Your form is valid.";

/// Donation page. The form stays visible after a valid submission.
pub fn render(values: &DonationSubmission, errors: &FieldErrors, success: bool) -> String {
    let mut body = String::from(
        "<div class=\"wrapper\">\n<p class=\"req-note\"><span class=\"required\">*</span> Denotes Required Information</p>\n",
    );

    if success {
        body.push_str(&success_banner(SUCCESS_MESSAGE));
    }

    body.push_str("<form method=\"post\" action=\"/donation\">\n");
    body.push_str(&donor_section(values, errors));
    body.push_str(&honor_section(values, errors));
    body.push_str(&additional_section(values, errors));
    body.push_str(concat!(
        "<div class=\"controls\">",
        "<a href=\"/donation?reset=1\">Reset</a> ",
        "<input type=\"submit\" value=\"Continue\">",
        "</div>\n</form>\n</div>\n"
    ));

    page("Donation Form", &body)
}

fn text_row(label: &str, required: bool, name: &str, value: &str, errors: &FieldErrors) -> String {
    row(label, required, &input("text", name, value, errors.contains(name)), errors, name)
}

fn state_options(placeholder: &'static str) -> Vec<(&'static str, &'static str)> {
    let mut options = vec![("", placeholder)];
    options.extend(STATES.iter().map(|s| (*s, *s)));
    options
}

fn donor_section(values: &DonationSubmission, errors: &FieldErrors) -> String {
    let mut html = String::from("<section class=\"section\">\n<h2>Donor Information</h2>\n");

    html.push_str(&text_row("First Name", true, "first_name", &values.first_name, errors));
    html.push_str(&text_row("Last Name", true, "last_name", &values.last_name, errors));
    html.push_str(&text_row("Company", false, "company", &values.company, errors));
    html.push_str(&text_row("Address 1", true, "addr1", &values.addr1, errors));
    html.push_str(&text_row("Address 2", false, "addr2", &values.addr2, errors));
    html.push_str(&text_row("City", true, "city", &values.city, errors));
    html.push_str(&row(
        "State",
        true,
        &select("state", &state_options("Select a State"), &values.state, errors.contains("state")),
        errors,
        "state",
    ));
    html.push_str(&text_row("Zip Code", true, "zip", &values.zip, errors));

    let mut countries = vec![("", "Select a Country")];
    countries.extend(COUNTRIES.iter().map(|c| (*c, *c)));
    html.push_str(&row(
        "Country",
        true,
        &select("country", &countries, &values.country, errors.contains("country")),
        errors,
        "country",
    ));

    html.push_str(&row("Phone", false, &input("tel", "phone", &values.phone, errors.contains("phone")), errors, "phone"));
    html.push_str(&text_row("Fax", false, "fax", &values.fax, errors));
    html.push_str(&row("Email", true, &input("email", "email", &values.email, errors.contains("email")), errors, "email"));

    let mut amount = String::from("<div class=\"inline-group\">");
    for (value, label) in AMOUNTS {
        amount.push_str(&radio("amount", value, label, values.amount == value));
    }
    amount.push_str("</div>\n");
    amount.push_str(&field_error(errors, "amount"));
    amount.push_str("<div class=\"inline-note\">(Check a button or type in your amount)</div>\n");
    amount.push_str("<label for=\"other_amount\">Other Amount $</label> ");
    amount.push_str(&input("text", "other_amount", &values.other_amount, errors.contains("other_amount")));
    amount.push('\n');
    amount.push_str(&field_error(errors, "other_amount"));
    amount.push_str("<div class=\"checkbox-row\">");
    amount.push_str(&checkbox(
        "recurring",
        "on",
        "I am interested in giving on a regular basis.",
        values.is_recurring(),
    ));
    amount.push_str(" Monthly Credit Card $ ");
    amount.push_str(&input("text", "monthly_amount", &values.monthly_amount, errors.contains("monthly_amount")));
    amount.push_str(" For ");
    amount.push_str(&input("text", "months", &values.months, errors.contains("months")));
    amount.push_str(" Months</div>\n");
    amount.push_str(&field_error(errors, "monthly_amount"));
    amount.push_str(&field_error(errors, "months"));

    html.push_str(&format!(
        "<div class=\"form-row\"><span class=\"label\">Donation Amount<span class=\"required\">*</span></span>\n<div class=\"field\">{}</div></div>\n",
        amount
    ));

    html.push_str("</section>\n");
    html
}

fn honor_section(values: &DonationSubmission, errors: &FieldErrors) -> String {
    let mut html = String::from(
        "<section class=\"section\">\n<h2>Honorarium and Memorial Donation Information</h2>\n",
    );

    let mut choice = String::from("<div class=\"inline-group\">");
    for (value, label) in HONOR_OPTIONS {
        choice.push_str(&radio("honor", value, label, values.honor == value));
    }
    choice.push_str("</div>");
    html.push_str(&format!(
        "<div class=\"form-row\"><span class=\"label\">I would like to make this donation</span>\n<div class=\"field\">{}</div></div>\n",
        choice
    ));

    html.push_str(&text_row("Acknowledge Donation to", false, "ack_name", &values.ack_name, errors));
    html.push_str(&text_row("Address", false, "ack_addr", &values.ack_addr, errors));
    html.push_str(&text_row("City", false, "ack_city", &values.ack_city, errors));
    html.push_str(&row(
        "State",
        false,
        &select("ack_state", &state_options("Select a State"), &values.ack_state, errors.contains("ack_state")),
        errors,
        "ack_state",
    ));
    html.push_str(&text_row("Zip", false, "ack_zip", &values.ack_zip, errors));

    html.push_str("</section>\n");
    html
}

fn additional_section(values: &DonationSubmission, errors: &FieldErrors) -> String {
    let mut html = String::from(concat!(
        "<section class=\"section\">\n<h2>Additional Information</h2>\n",
        "<p class=\"help-text\">Please enter your name, company or organization as you would like it to appear in our publications:</p>\n",
    ));

    html.push_str(&text_row("Name", false, "pub_name", &values.pub_name, errors));

    html.push_str("<div class=\"checkbox-row\">");
    html.push_str(&checkbox(
        "anonymous",
        "on",
        "I would like my gift to remain anonymous.",
        values.anonymous.is_some(),
    ));
    html.push_str(&checkbox(
        "matching",
        "on",
        "My employer offers a matching gift program. I will mail the matching gift form.",
        values.matching.is_some(),
    ));
    html.push_str(&checkbox(
        "no_thanks",
        "on",
        "Please save the cost of acknowledging this gift by not mailing a thank you letter.",
        values.no_thanks.is_some(),
    ));
    html.push_str("</div>\n");

    html.push_str(&row("Comments", false, &textarea("comments", &values.comments, false), errors, "comments"));

    let contact = [
        checkbox("contact_email", "on", "E-mail", values.contact_email.is_some()),
        checkbox("contact_postal", "on", "Postal Mail", values.contact_postal.is_some()),
        checkbox("contact_phone", "on", "Telephone", values.contact_phone.is_some()),
        checkbox("contact_fax", "on", "Fax", values.contact_fax.is_some()),
    ]
    .concat();
    html.push_str(&format!(
        "<div class=\"form-row\"><span class=\"label\">How may we contact you?</span>\n<div class=\"field\"><div class=\"checkbox-row\">{}</div>\n{}</div></div>\n",
        contact,
        field_error(errors, "contact")
    ));

    let newsletter = [
        checkbox("newsletter_email", "on", "E-mail", values.newsletter_email.is_some()),
        checkbox("newsletter_postal", "on", "Postal Mail", values.newsletter_postal.is_some()),
    ]
    .concat();
    html.push_str(&format!(
        "<div class=\"form-row\"><span class=\"label\">I would like to receive newsletters and information about special events by:</span>\n<div class=\"field\"><div class=\"checkbox-row\">{}</div></div></div>\n",
        newsletter
    ));

    html.push_str(&text_row(
        "I would like information about volunteering with the",
        false,
        "volunteer_with",
        &values.volunteer_with,
        errors,
    ));

    html.push_str("</section>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_blank_form_has_no_errors_or_banner() {
        let html = render(&DonationSubmission::default(), &FieldErrors::new(), false);
        assert!(html.contains("Donor Information"));
        assert!(!html.contains(SUCCESS_MESSAGE));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_sticky_values_and_checkboxes() {
        let values = DonationSubmission {
            first_name: "<Ada>".to_string(),
            state: "NY".to_string(),
            amount: "other".to_string(),
            recurring: Some("on".to_string()),
            contact_phone: Some("on".to_string()),
            ..Default::default()
        };
        let errors = values.validate();
        let html = render(&values, &errors, false);

        assert!(html.contains("value=\"&lt;Ada&gt;\""));
        assert!(html.contains("<option value=\"NY\" selected>NY</option>"));
        assert!(html.contains("name=\"amount\" value=\"other\" checked"));
        assert!(html.contains("name=\"recurring\" value=\"on\" checked"));
        assert!(html.contains("name=\"contact_phone\" value=\"on\" checked"));
        assert!(html.contains("Enter your other amount."));
    }

    #[test]
    fn test_success_banner() {
        let html = render(&DonationSubmission::default(), &FieldErrors::new(), true);
        assert!(html.contains(SUCCESS_MESSAGE));
    }
}
