use clap::Parser;
use phonebook::cli::{run_add, run_delete, run_import, run_list, run_menu, run_search, Cli, Commands};
use phonebook::config::Config;
use phonebook::db::Database;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.db, cli.verbose)?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .init();

    // Unreachable store is fatal; everything after this reports and continues
    let db = Database::open_at(&config.db_path)?;
    tracing::debug!(path = %config.db_path.display(), "using contact store");

    match cli.command {
        None => {
            run_menu(&db, &config)?;
        }
        Some(Commands::Search(args)) => {
            run_search(&db, &args.pattern, args.json)?;
        }
        Some(Commands::Add(args)) => {
            run_add(&db, args.first, args.last, args.phone)?;
        }
        Some(Commands::Import(args)) => {
            run_import(&db, args.file.as_deref())?;
        }
        Some(Commands::List(args)) => {
            let limit = args.limit.unwrap_or(config.page_size);
            run_list(&db, limit, args.offset, args.json)?;
        }
        Some(Commands::Delete(args)) => {
            run_delete(&db, &args.term, args.yes)?;
        }
    }

    Ok(())
}
