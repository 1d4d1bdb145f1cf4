use anyhow::{anyhow, Result};

use crate::cli::ui::{prompt_text, stdin_is_terminal};
use crate::db::Database;
use crate::models::NewContact;

/// Execute the add command: insert a contact or rename the one holding `phone`.
pub fn run_add(
    db: &Database,
    first: Option<String>,
    last: Option<String>,
    phone: Option<String>,
) -> Result<()> {
    let interactive = first.is_none() && phone.is_none();
    let (first, last, phone) = if interactive {
        match interactive_mode()? {
            Some(fields) => fields,
            None => {
                println!("Cancelled.");
                return Ok(());
            }
        }
    } else {
        let first = first.ok_or_else(|| anyhow!("--first is required."))?;
        let phone = phone.ok_or_else(|| anyhow!("--phone is required."))?;
        (first, last, phone)
    };

    let input = NewContact::new(&first, last.as_deref(), &phone)?;
    let outcome = db.upsert_outcome(&input)?;

    let verb = if outcome.created { "Created" } else { "Updated" };
    println!(
        "{}: {} ({})",
        verb,
        outcome.contact.full_name(),
        outcome.contact.phone
    );
    Ok(())
}

fn interactive_mode() -> Result<Option<(String, Option<String>, String)>> {
    if !stdin_is_terminal() {
        return Err(anyhow!("Pass --first and --phone, or run in a terminal."));
    }

    let Some(first) = prompt_text("first name: ")? else {
        return Ok(None);
    };
    let Some(last) = prompt_text("last name (optional): ")? else {
        return Ok(None);
    };
    let Some(phone) = prompt_text("phone: ")? else {
        return Ok(None);
    };

    let last = if last.is_empty() { None } else { Some(last) };
    Ok(Some((first, last, phone)))
}
