use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod add;
pub mod delete;
pub mod display;
pub mod import;
pub mod list;
pub mod menu;
pub mod search;
pub mod ui;

pub use add::run_add;
pub use delete::run_delete;
pub use import::run_import;
pub use list::run_list;
pub use menu::run_menu;
pub use search::run_search;

use crate::config::ENV_DB_PATH;

#[derive(Parser)]
#[command(name = "phonebook")]
#[command(about = "Phone book contact manager for the command line")]
#[command(version)]
pub struct Cli {
    /// Path to the contacts database
    #[arg(long, global = true, env = ENV_DB_PATH, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Log store operations to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search contacts by name or phone (case-insensitive substring)
    Search(SearchArgs),
    /// Insert a contact, or update the name on an existing phone number
    Add(AddArgs),
    /// Insert many "first,last,phone" lines from a file or stdin
    Import(ImportArgs),
    /// List contacts ordered by name, one page at a time
    List(ListArgs),
    /// Delete contacts whose name or phone contains a term
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct SearchArgs {
    /// Substring to look for; empty matches everything
    #[arg(default_value = "")]
    pub pattern: String,
    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(short, long)]
    pub first: Option<String>,
    #[arg(short, long)]
    pub last: Option<String>,
    /// Ten-digit phone number
    #[arg(short, long)]
    pub phone: Option<String>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// File with one contact per line; reads stdin when omitted
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Page size (defaults to 20)
    #[arg(short, long)]
    pub limit: Option<u32>,
    #[arg(short, long, default_value = "0")]
    pub offset: u32,
    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Name or phone substring
    pub term: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}
