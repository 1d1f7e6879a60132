//! Valid submissions and sample files
//!
//! Each fixture returns owned pairs so tests can replace or drop a field
//! before sending.

pub type Fields = Vec<(&'static str, &'static str)>;

/// Replace (or add) one field
pub fn with_field(mut fields: Fields, name: &'static str, value: &'static str) -> Fields {
    match fields.iter_mut().find(|(n, _)| *n == name) {
        Some(entry) => entry.1 = value,
        None => fields.push((name, value)),
    }
    fields
}

/// Drop every occurrence of a field
pub fn without_field(mut fields: Fields, name: &str) -> Fields {
    fields.retain(|(n, _)| *n != name);
    fields
}

pub fn valid_contact() -> Fields {
    vec![
        ("name", "Ada Lovelace"),
        ("email", "ada@example.org"),
        ("service", "Web Development"),
        ("message", "I would like a new portfolio site."),
    ]
}

pub fn valid_donation() -> Fields {
    vec![
        ("first_name", "Grace"),
        ("last_name", "Hopper"),
        ("addr1", "1 Navy Way"),
        ("city", "Arlington"),
        ("state", "VA"),
        ("zip", "22201"),
        ("country", "United States"),
        ("email", "grace@example.org"),
        ("amount", "75"),
        ("contact_email", "on"),
    ]
}

pub fn valid_registration() -> Fields {
    vec![
        ("roll", "CS-2021/042"),
        ("first_name", "Priya"),
        ("last_name", "Sharma"),
        ("father", "Rajesh Sharma"),
        ("dob_day", "07"),
        ("dob_month", "Mar"),
        ("dob_year", "2001"),
        ("cc", "+91"),
        ("phone", "9876543210"),
        ("email", "priya@example.in"),
        ("pwd", "s3cret-pass"),
        ("gender", "female"),
        ("dept[]", "CSE"),
        ("dept[]", "IT"),
        ("course", "B.Tech"),
        ("city", "Pune"),
        ("address", "42 MG Road, Pune"),
    ]
}

/// PNG signature followed by filler
pub fn png_bytes(len: usize) -> Vec<u8> {
    let mut data = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    data.resize(len.max(data.len()), 0);
    data
}

pub fn jpeg_bytes(len: usize) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0];
    data.resize(len.max(data.len()), 0);
    data
}
