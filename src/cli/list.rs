use anyhow::Result;

use crate::cli::display::{page_heading, print_contact_table};
use crate::db::Database;

/// Execute the list command for one page
pub fn run_list(db: &Database, limit: u32, offset: u32, json: bool) -> Result<()> {
    let contacts = db.list_page(limit, offset)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&contacts)?);
        return Ok(());
    }

    if contacts.is_empty() {
        println!("No contacts found in this range.");
        return Ok(());
    }

    let total = db.count()?;
    println!("{}\n", page_heading(offset, contacts.len(), total));
    print_contact_table(&contacts, false);
    Ok(())
}
