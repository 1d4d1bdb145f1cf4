//! Interactive main menu
//!
//! Uses inquire for terminal interaction. Each choice maps onto one of the
//! subcommands; errors are shown and the menu keeps running.

use anyhow::{anyhow, Result};
use inquire::Select;

use crate::cli::import::print_report;
use crate::cli::ui::{
    clear_screen, minimal_render_config, prompt_text, prompt_u32, stdin_is_terminal,
    wait_for_continue,
};
use crate::cli::{run_add, run_delete, run_list, run_search};
use crate::config::Config;
use crate::db::Database;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Search,
    Upsert,
    InsertMany,
    Page,
    Delete,
    Exit,
}

impl MenuOption {
    const ALL: &'static [MenuOption] = &[
        MenuOption::Search,
        MenuOption::Upsert,
        MenuOption::InsertMany,
        MenuOption::Page,
        MenuOption::Delete,
        MenuOption::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuOption::Search => "Search contacts by pattern",
            MenuOption::Upsert => "Insert/update contact",
            MenuOption::InsertMany => "Insert multiple contacts",
            MenuOption::Page => "View contacts with pagination",
            MenuOption::Delete => "Delete contacts by name or phone",
            MenuOption::Exit => "Exit",
        }
    }

    fn from_label(s: &str) -> Option<MenuOption> {
        MenuOption::ALL.iter().find(|opt| opt.label() == s).copied()
    }
}

/// Run the interactive main menu
pub fn run_menu(db: &Database, config: &Config) -> Result<()> {
    if !stdin_is_terminal() {
        return Err(anyhow!(
            "Interactive menu requires a terminal. Use subcommands for non-interactive use:\n  \
            phonebook search <pattern>\n  \
            phonebook import <file>\n  \
            phonebook list --limit 20 --offset 0\n  \
            Run 'phonebook --help' for all options."
        ));
    }

    let menu_labels: Vec<&str> = MenuOption::ALL.iter().map(|opt| opt.label()).collect();

    loop {
        let _ = clear_screen();

        let selection = Select::new("phonebook", menu_labels.clone())
            .with_render_config(minimal_render_config())
            .with_page_size(menu_labels.len())
            .with_vim_mode(true)
            .prompt_skippable();

        // Ctrl+C or terminal failure ends the session
        let Ok(Some(choice_label)) = selection else {
            return Ok(());
        };
        let Some(choice) = MenuOption::from_label(choice_label) else {
            continue;
        };
        if choice == MenuOption::Exit {
            return Ok(());
        }

        let _ = clear_screen();

        if let Err(e) = execute_command(db, config, choice) {
            tracing::debug!(error = %e, choice = choice.label(), "menu command failed");
            eprintln!("\nError: {}", e);
        }
        wait_for_continue();
    }
}

fn execute_command(db: &Database, config: &Config, choice: MenuOption) -> Result<()> {
    match choice {
        MenuOption::Search => {
            let Some(pattern) = prompt_text("pattern: ")? else {
                return Ok(());
            };
            run_search(db, &pattern, false)
        }
        MenuOption::Upsert => run_add(db, None, None, None),
        MenuOption::InsertMany => {
            println!("Enter contacts as first_name,last_name,phone (one per line).");
            println!("Enter 'done' when finished.");
            let mut lines = Vec::new();
            while let Some(line) = prompt_text("> ")? {
                if line.eq_ignore_ascii_case("done") {
                    break;
                }
                if !line.is_empty() {
                    lines.push(line);
                }
            }
            let report = db.bulk_insert(&lines)?;
            print_report(&report);
            Ok(())
        }
        MenuOption::Page => {
            let Some(limit) = prompt_u32("contacts per page", config.page_size)? else {
                return Ok(());
            };
            let Some(offset) = prompt_u32("offset", 0)? else {
                return Ok(());
            };
            run_list(db, limit, offset, false)
        }
        MenuOption::Delete => {
            let Some(term) = prompt_text("name or phone: ")? else {
                return Ok(());
            };
            run_delete(db, &term, false)
        }
        MenuOption::Exit => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_option_roundtrip() {
        for opt in MenuOption::ALL {
            let label = opt.label();
            let recovered = MenuOption::from_label(label);
            assert_eq!(recovered, Some(*opt), "Failed roundtrip for {:?}", opt);
        }
    }

    #[test]
    fn test_menu_option_from_invalid_label() {
        assert_eq!(MenuOption::from_label("Invalid"), None);
        assert_eq!(MenuOption::from_label(""), None);
    }

    #[test]
    fn test_menu_offers_six_choices() {
        assert_eq!(MenuOption::ALL.len(), 6);
        assert_eq!(MenuOption::ALL.last(), Some(&MenuOption::Exit));
    }
}
