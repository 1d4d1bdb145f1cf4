use chrono::Local;

use crate::models::Contact;

const ID_W: usize = 5;
const NAME_W: usize = 15;
const PHONE_W: usize = 12;

/// Column header plus underline, optionally including the creation time.
pub fn table_header(with_created: bool) -> String {
    let mut header = format!(
        "{:<id_w$} {:<name_w$} {:<name_w$} {:<phone_w$}",
        "ID",
        "FIRST",
        "LAST",
        "PHONE",
        id_w = ID_W,
        name_w = NAME_W,
        phone_w = PHONE_W
    );
    if with_created {
        header.push_str(" CREATED");
    }
    let rule = "-".repeat(header.chars().count().max(60));
    format!("{}\n{}", header.trim_end(), rule)
}

pub fn format_contact_row(contact: &Contact, with_created: bool) -> String {
    let mut line = format!(
        "{:<id_w$} {:<name_w$} {:<name_w$} {:<phone_w$}",
        contact.id,
        truncate(&contact.first_name, NAME_W),
        truncate(contact.last_name.as_deref().unwrap_or(""), NAME_W),
        contact.phone,
        id_w = ID_W,
        name_w = NAME_W,
        phone_w = PHONE_W
    );
    if with_created {
        let created = contact.created_at.with_timezone(&Local);
        line.push(' ');
        line.push_str(&created.format("%Y-%m-%d %H:%M").to_string());
    }
    line.trim_end().to_string()
}

pub fn print_contact_table(contacts: &[Contact], with_created: bool) {
    println!("{}", table_header(with_created));
    for contact in contacts {
        println!("{}", format_contact_row(contact, with_created));
    }
}

/// One-line summary used in delete previews: `#3 Ann Lee (1234567890)`
pub fn format_contact_summary(contact: &Contact) -> String {
    format!("#{} {} ({})", contact.id, contact.full_name(), contact.phone)
}

/// Heading for a listing page, e.g. `Contacts 5 to 6 of 6`.
pub fn page_heading(offset: u32, shown: usize, total: u32) -> String {
    let first = u64::from(offset) + 1;
    let last = u64::from(offset) + shown as u64;
    format!("Contacts {} to {} of {}", first, last, total)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn contact(first: &str, last: Option<&str>) -> Contact {
        Contact {
            id: 7,
            first_name: first.to_string(),
            last_name: last.map(str::to_string),
            phone: "1234567890".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_format_row_without_last_name() {
        let row = format_contact_row(&contact("Bob", None), false);
        assert!(row.starts_with("7     Bob"));
        assert!(row.ends_with("1234567890"));
    }

    #[test]
    fn test_format_row_truncates_long_names() {
        let row = format_contact_row(&contact("Maximilianopolous", Some("Lee")), false);
        assert!(row.contains("Maximilianop..."));
        assert!(!row.contains("Maximilianopolous"));
    }

    #[test]
    fn test_header_with_created() {
        assert!(table_header(true).lines().next().unwrap().ends_with("CREATED"));
        assert!(!table_header(false).contains("CREATED"));
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            format_contact_summary(&contact("Ann", Some("Lee"))),
            "#7 Ann Lee (1234567890)"
        );
    }

    #[test]
    fn test_page_heading() {
        assert_eq!(page_heading(4, 1, 5), "Contacts 5 to 5 of 5");
        assert_eq!(page_heading(0, 2, 5), "Contacts 1 to 2 of 5");
    }
}
