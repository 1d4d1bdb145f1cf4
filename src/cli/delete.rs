use anyhow::{anyhow, Result};

use crate::cli::display::format_contact_summary;
use crate::cli::ui::confirm;
use crate::db::Database;

/// Execute the delete command.
///
/// Shows every match, asks for confirmation unless `yes`, then deletes
/// exactly the contacts that were shown.
pub fn run_delete(db: &Database, term: &str, yes: bool) -> Result<()> {
    let term = term.trim();
    if term.is_empty() {
        return Err(anyhow!("Search term cannot be empty."));
    }

    let matches = db.find_matching(term)?;
    if matches.is_empty() {
        println!("No contacts found matching the search term.");
        return Ok(());
    }

    println!("The following contacts will be deleted:");
    for contact in &matches {
        println!("  {}", format_contact_summary(contact));
    }
    println!();

    if !yes && !confirm(&format!("Delete {} contact(s)?", matches.len()))? {
        println!("Deletion cancelled.");
        return Ok(());
    }

    let ids: Vec<i64> = matches.iter().map(|c| c.id).collect();
    let deleted = db.delete_contacts(&ids)?;
    println!("Deleted {} contact(s).", deleted);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewContact;

    fn setup_test_db() -> Database {
        let db = Database::open_memory().unwrap();
        for (first, last, phone) in [
            ("John", "Smith", "5550000001"),
            ("Jane", "Smith", "5550000002"),
            ("Carol", "King", "5550000003"),
        ] {
            db.upsert(&NewContact::new(first, Some(last), phone).unwrap())
                .unwrap();
        }
        db
    }

    #[test]
    fn test_delete_with_yes() {
        let db = setup_test_db();

        run_delete(&db, "SMITH", true).unwrap();

        assert!(db.search("smith").unwrap().is_empty());
        assert_eq!(db.count().unwrap(), 1);
    }

    #[test]
    fn test_delete_no_match() {
        let db = setup_test_db();

        run_delete(&db, "zzz", true).unwrap();
        assert_eq!(db.count().unwrap(), 3);
    }

    #[test]
    fn test_delete_empty_term_rejected() {
        let db = setup_test_db();

        assert!(run_delete(&db, "   ", true).is_err());
        assert_eq!(db.count().unwrap(), 3);
    }
}
