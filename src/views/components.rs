//! Reusable HTML fragments
//!
//! Every value and message passes through [`escape_html`] before it is
//! written into markup.

use crate::utils::helpers::escape_html;
use crate::validation::FieldErrors;

/// Full HTML document around a page body
pub fn page(title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "  <meta charset=\"UTF-8\">\n",
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
            "  <title>{title}</title>\n",
            "  <style>.error{{color:#c1121f;display:block}}.invalid{{border-color:#c1121f}}",
            ".success{{color:#0f5132}}</style>\n",
            "</head>\n",
            "<body>\n",
            "<main>\n",
            "{body}",
            "</main>\n",
            "</body>\n",
            "</html>\n"
        ),
        title = escape_html(title),
        body = body
    )
}

/// Inline error for a field, or nothing
pub fn field_error(errors: &FieldErrors, field: &str) -> String {
    match errors.get(field) {
        Some(message) => format!(
            "<span class=\"error\" data-field=\"{}\">{}</span>\n",
            escape_html(field),
            escape_html(message)
        ),
        None => String::new(),
    }
}

pub fn success_banner(message: &str) -> String {
    format!("<div class=\"success\">{}</div>\n", escape_html(message))
}

pub fn input(kind: &str, name: &str, value: &str, invalid: bool) -> String {
    format!(
        "<input type=\"{}\" id=\"{}\" name=\"{}\" value=\"{}\"{}>",
        kind,
        name,
        name,
        escape_html(value),
        invalid_class(invalid)
    )
}

pub fn textarea(name: &str, value: &str, invalid: bool) -> String {
    format!(
        "<textarea id=\"{}\" name=\"{}\"{}>{}</textarea>",
        name,
        name,
        invalid_class(invalid),
        escape_html(value)
    )
}

/// `<select>` from `(value, label)` pairs
pub fn select(name: &str, options: &[(&str, &str)], selected: &str, invalid: bool) -> String {
    let mut html = format!("<select id=\"{}\" name=\"{}\"{}>", name, name, invalid_class(invalid));
    for (value, label) in options {
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            escape_html(value),
            selected_attr(*value == selected),
            escape_html(label)
        ));
    }
    html.push_str("</select>");
    html
}

pub fn radio(name: &str, value: &str, label: &str, checked: bool) -> String {
    format!(
        "<label><input type=\"radio\" name=\"{}\" value=\"{}\"{}> {}</label>",
        name,
        escape_html(value),
        checked_attr(checked),
        escape_html(label)
    )
}

pub fn checkbox(name: &str, value: &str, label: &str, checked: bool) -> String {
    format!(
        "<label><input type=\"checkbox\" name=\"{}\" value=\"{}\"{}> {}</label>",
        name,
        escape_html(value),
        checked_attr(checked),
        escape_html(label)
    )
}

/// Labelled row holding a control and the field's inline error
pub fn row(label: &str, required: bool, control: &str, errors: &FieldErrors, field: &str) -> String {
    format!(
        "<div class=\"form-row\"><label for=\"{}\">{}{}</label>\n<div class=\"field\">{}\n{}</div></div>\n",
        field,
        escape_html(label),
        if required { "<span class=\"required\">*</span>" } else { "" },
        control,
        field_error(errors, field)
    )
}

/// Options where the value doubles as the label
pub fn same_label<'a>(values: &[&'a str]) -> Vec<(&'a str, &'a str)> {
    values.iter().map(|v| (*v, *v)).collect()
}

fn invalid_class(invalid: bool) -> &'static str {
    if invalid { " class=\"invalid\"" } else { "" }
}

fn selected_attr(selected: bool) -> &'static str {
    if selected { " selected" } else { "" }
}

fn checked_attr(checked: bool) -> &'static str {
    if checked { " checked" } else { "" }
}
