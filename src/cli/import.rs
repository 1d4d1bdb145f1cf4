use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::db::{BulkInsertReport, Database};

/// Line that ends interactive entry.
const END_MARKER: &str = "done";

/// Read bulk-insert lines until EOF or a line reading `done`.
///
/// Blank lines are skipped. Other lines are kept as typed (minus the line
/// terminator) so rejected input can be echoed back unchanged.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        let line = line.strip_suffix('\r').unwrap_or(&line).to_string();

        if line.trim().eq_ignore_ascii_case(END_MARKER) {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Execute the import command, reading from `file` or stdin.
pub fn run_import(db: &Database, file: Option<&Path>) -> Result<()> {
    let lines = match file {
        Some(path) => {
            if !path.exists() {
                bail!("File not found: {}", path.display());
            }
            let reader = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            read_lines(BufReader::new(reader))?
        }
        None => {
            if crate::cli::ui::stdin_is_terminal() {
                println!("Enter contacts as first_name,last_name,phone (one per line).");
                println!("Enter '{}' when finished.", END_MARKER);
            }
            read_lines(io::stdin().lock())?
        }
    };

    let report = db.bulk_insert(&lines)?;
    print_report(&report);
    Ok(())
}

pub fn print_report(report: &BulkInsertReport) {
    println!("Saved {} contact(s).", report.applied.len());

    if !report.is_clean() {
        println!("\nInvalid data that wasn't inserted:");
        for line in &report.invalid {
            println!("- {}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_read_lines_stops_at_done() {
        let input = "Ann,Lee,1234567890\nDONE\nBo,Kim,0987654321\n";
        let lines = read_lines(Cursor::new(input)).unwrap();
        assert_eq!(lines, vec!["Ann,Lee,1234567890".to_string()]);
    }

    #[test]
    fn test_read_lines_skips_blank_and_keeps_text() {
        let input = "  Ann , Lee,1234567890\r\n\n   \nbad,line\n";
        let lines = read_lines(Cursor::new(input)).unwrap();
        assert_eq!(
            lines,
            vec!["  Ann , Lee,1234567890".to_string(), "bad,line".to_string()]
        );
    }

    #[test]
    fn test_run_import_from_file() {
        let db = Database::open_memory().unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Ann,Lee,1234567890").unwrap();
        writeln!(file, "bad,line").unwrap();
        writeln!(file, "Bo,Kim,0987654321").unwrap();

        run_import(&db, Some(file.path())).unwrap();

        assert_eq!(db.count().unwrap(), 2);
    }

    #[test]
    fn test_run_import_missing_file() {
        let db = Database::open_memory().unwrap();
        let result = run_import(&db, Some(Path::new("/nonexistent/contacts.txt")));
        assert!(result.is_err());
    }
}
