use anyhow::Result;

use crate::cli::display::print_contact_table;
use crate::db::Database;

/// Execute the search command
pub fn run_search(db: &Database, pattern: &str, json: bool) -> Result<()> {
    let results = db.search(pattern.trim())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No contacts found matching the pattern.");
        return Ok(());
    }

    println!("Search results ({})\n", results.len());
    print_contact_table(&results, true);
    Ok(())
}
