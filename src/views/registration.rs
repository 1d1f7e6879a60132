use super::components::{checkbox, field_error, input, page, radio, row, same_label, select, textarea};
use crate::forms::registration::{
    RegistrationSubmission, BIRTH_YEARS, COUNTRY_CODES, COURSES, COURSE_PLACEHOLDER, DAY_PLACEHOLDER,
    DEPARTMENTS, GENDERS, MONTHS, MONTH_PLACEHOLDER, YEAR_PLACEHOLDER,
};
use crate::uploads::StoredPhoto;
use crate::utils::helpers::{capitalize_first, escape_html};
use crate::validation::FieldErrors;

/// Registration page. A stored photo means the submission was accepted and
/// the details card is shown in place of the form.
pub fn render(values: &RegistrationSubmission, errors: &FieldErrors, stored: Option<&StoredPhoto>) -> String {
    let body = match stored {
        Some(photo) if errors.is_empty() => details_card(values, photo),
        _ => form(values, errors),
    };
    page("Student Registration", &body)
}

fn form(values: &RegistrationSubmission, errors: &FieldErrors) -> String {
    let mut html = String::from(concat!(
        "<section class=\"registration\">\n<h2>Student Registration Form</h2>\n",
        "<form action=\"/registration\" method=\"post\" enctype=\"multipart/form-data\" novalidate>\n",
    ));

    html.push_str(&text_row("Roll No", "roll", &values.roll, errors));
    html.push_str(&text_row("First Name", "first_name", &values.first_name, errors));
    html.push_str(&text_row("Last Name", "last_name", &values.last_name, errors));
    html.push_str(&text_row("Father's Name", "father", &values.father, errors));
    html.push_str(&dob_row(values, errors));

    let codes = same_label(&COUNTRY_CODES);
    let mobile = format!(
        "{} {}",
        select("cc", &codes, &values.cc, errors.contains("cc")),
        input("tel", "phone", &values.phone, errors.contains("phone"))
    );
    html.push_str(&format!(
        "<div class=\"form-row\"><label for=\"phone\">Mobile No<span class=\"required\">*</span></label>\n<div class=\"field\">{}\n{}{}</div></div>\n",
        mobile,
        field_error(errors, "cc"),
        field_error(errors, "phone")
    ));

    html.push_str(&row(
        "Email",
        true,
        &input("email", "email", &values.email, errors.contains("email")),
        errors,
        "email",
    ));
    // Never refilled
    html.push_str(&row("Password", true, &input("password", "pwd", "", errors.contains("pwd")), errors, "pwd"));

    let genders: String = GENDERS
        .iter()
        .map(|g| radio("gender", g, &capitalize_first(g), values.gender == *g))
        .collect();
    html.push_str(&group_row("Gender", &genders, errors, "gender"));

    let departments: String = DEPARTMENTS
        .iter()
        .map(|d| checkbox("dept[]", d, d, values.dept.iter().any(|v| v == d)))
        .collect();
    html.push_str(&group_row("Department", &departments, errors, "dept"));

    let mut courses = vec![(COURSE_PLACEHOLDER, COURSE_PLACEHOLDER)];
    courses.extend(same_label(&COURSES));
    html.push_str(&row(
        "Course",
        true,
        &select("course", &courses, &values.course, errors.contains("course")),
        errors,
        "course",
    ));

    html.push_str(&row(
        "Student Photo",
        true,
        &format!(
            "<input type=\"file\" id=\"photo\" name=\"photo\" accept=\"image/jpeg,image/png,image/webp\"{}>",
            if errors.contains("photo") { " class=\"invalid\"" } else { "" }
        ),
        errors,
        "photo",
    ));

    html.push_str(&text_row("City", "city", &values.city, errors));
    html.push_str(&row(
        "Address",
        true,
        &textarea("address", &values.address, errors.contains("address")),
        errors,
        "address",
    ));

    html.push_str(concat!(
        "<div class=\"controls\"><input type=\"reset\" value=\"Reset\"> ",
        "<input type=\"submit\" value=\"Register\"></div>\n</form>\n</section>\n"
    ));
    html
}

fn text_row(label: &str, name: &str, value: &str, errors: &FieldErrors) -> String {
    row(label, true, &input("text", name, value, errors.contains(name)), errors, name)
}

fn group_row(label: &str, controls: &str, errors: &FieldErrors, field: &str) -> String {
    format!(
        "<div class=\"form-row\"><span class=\"label\">{}<span class=\"required\">*</span></span>\n<div class=\"field\"><div class=\"inline-group\">{}</div>\n{}</div></div>\n",
        escape_html(label),
        controls,
        field_error(errors, field)
    )
}

fn dob_row(values: &RegistrationSubmission, errors: &FieldErrors) -> String {
    let days: Vec<String> = (1..=31).map(|d| format!("{:02}", d)).collect();
    let mut day_options = vec![(DAY_PLACEHOLDER, DAY_PLACEHOLDER)];
    day_options.extend(days.iter().map(|d| (d.as_str(), d.as_str())));

    let mut month_options = vec![(MONTH_PLACEHOLDER, MONTH_PLACEHOLDER)];
    month_options.extend(same_label(&MONTHS));

    let years: Vec<String> = BIRTH_YEARS.map(|y| y.to_string()).collect();
    let mut year_options = vec![(YEAR_PLACEHOLDER, YEAR_PLACEHOLDER)];
    year_options.extend(years.iter().map(|y| (y.as_str(), y.as_str())));

    let invalid = errors.contains("dob");
    let controls = [
        select("dob_day", &day_options, &values.dob_day, invalid),
        select("dob_month", &month_options, &values.dob_month, invalid),
        select("dob_year", &year_options, &values.dob_year, invalid),
    ]
    .join(" ");

    format!(
        "<div class=\"form-row\"><label for=\"dob_day\">Date of Birth<span class=\"required\">*</span></label>\n<div class=\"field\">{}\n{}</div></div>\n",
        controls,
        field_error(errors, "dob")
    )
}

fn details_card(values: &RegistrationSubmission, photo: &StoredPhoto) -> String {
    let details = [
        ("Roll No", values.roll.clone()),
        ("Name", values.full_name()),
        ("Father's Name", values.father.clone()),
        ("Date of Birth", values.formatted_dob()),
        ("Mobile", values.mobile()),
        ("Email", values.email.clone()),
        ("Gender", values.display_gender()),
        ("Department", values.departments()),
        ("Course", values.course.clone()),
        ("City", values.city.clone()),
        ("Address", values.address.clone()),
    ];

    let mut html = String::from(
        "<section class=\"card success\">\n<h2>Registration Successful</h2>\n<dl>\n",
    );
    for (label, value) in details {
        html.push_str(&format!(
            "<dt>{}</dt><dd>{}</dd>\n",
            escape_html(label),
            escape_html(&value)
        ));
    }
    html.push_str(&format!(
        "</dl>\n<img class=\"photo\" src=\"{}\" alt=\"Student photo\">\n<p><a href=\"/registration\">Register another student</a></p>\n</section>\n",
        escape_html(&photo.public_url)
    ));
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;
    use std::path::PathBuf;

    fn accepted() -> RegistrationSubmission {
        RegistrationSubmission {
            roll: "CS-21/7".to_string(),
            first_name: "Priya".to_string(),
            last_name: "O'Neil".to_string(),
            father: "Rajesh".to_string(),
            dob_day: "07".to_string(),
            dob_month: "Mar".to_string(),
            dob_year: "2001".to_string(),
            phone: "9876543210".to_string(),
            email: "priya@example.in".to_string(),
            pwd: "hunter22".to_string(),
            gender: "female".to_string(),
            dept: vec!["CSE".to_string(), "ECE".to_string()],
            course: "B.Sc".to_string(),
            city: "Pune".to_string(),
            address: "42 MG Road".to_string(),
            ..Default::default()
        }
    }

    fn stored() -> StoredPhoto {
        StoredPhoto {
            file_name: "me_1700000000.png".to_string(),
            path: PathBuf::from("uploads/me_1700000000.png"),
            public_url: "/uploads/me_1700000000.png".to_string(),
        }
    }

    #[test]
    fn test_blank_form_has_placeholders_selected() {
        let html = render(&RegistrationSubmission::default(), &FieldErrors::new(), None);
        assert!(html.contains("<option value=\"Day\" selected>Day</option>"));
        assert!(html.contains("<option value=\"+91\" selected>+91</option>"));
        assert!(html.contains("<option value=\"2008\">2008</option>"));
        assert!(html.contains("enctype=\"multipart/form-data\""));
    }

    #[test]
    fn test_password_is_not_refilled() {
        let values = accepted();
        let mut errors = values.validate();
        errors.insert("photo", "Please upload a student photo.");
        let html = render(&values, &errors, None);
        assert!(!html.contains("hunter22"));
        assert!(html.contains("Please upload a student photo."));
        assert!(html.contains("name=\"dept[]\" value=\"ECE\" checked"));
    }

    #[test]
    fn test_details_card() {
        let values = accepted();
        let html = render(&values, &FieldErrors::new(), Some(&stored()));
        assert!(html.contains("<dd>Priya O&#039;Neil</dd>"));
        assert!(html.contains("<dd>07-Mar-2001</dd>"));
        assert!(html.contains("<dd>+91 - 9876543210</dd>"));
        assert!(html.contains("<dd>Female</dd>"));
        assert!(html.contains("<dd>CSE, ECE</dd>"));
        assert!(html.contains("src=\"/uploads/me_1700000000.png\""));
        assert!(!html.contains("hunter22"));
        assert!(!html.contains("<form"));
    }
}
