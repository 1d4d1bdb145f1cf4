//! Parsing of freeform "first,last,phone" lines for bulk insert.
//!
//! A line is accepted only when it has exactly three comma-separated fields
//! and the trimmed phone is ten ASCII digits. Rejected lines are reported
//! verbatim; the reason is not distinguished.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::NewContact;

/// Longest first or last name the store accepts.
pub const MAX_NAME_LEN: usize = 50;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

/// True when `phone` is exactly ten digits.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// A bulk-insert line that could not be turned into a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLine(pub String);

/// Parse one bulk-insert line into a contact ready for upsert.
pub fn parse_line(line: &str) -> Result<NewContact, InvalidLine> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(InvalidLine(line.to_string()));
    }

    NewContact::new(fields[0], Some(fields[1]), fields[2])
        .map_err(|_| InvalidLine(line.to_string()))
}

/// Split a batch into parsed contacts (input order kept) and rejected lines.
pub fn partition_lines<S: AsRef<str>>(lines: &[S]) -> (Vec<NewContact>, Vec<String>) {
    let mut valid = Vec::new();
    let mut invalid = Vec::new();

    for line in lines {
        match parse_line(line.as_ref()) {
            Ok(contact) => valid.push(contact),
            Err(InvalidLine(text)) => invalid.push(text),
        }
    }

    (valid, invalid)
}
