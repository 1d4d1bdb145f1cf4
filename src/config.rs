//! Runtime settings resolved from flags, environment and platform defaults.

use std::path::PathBuf;

use crate::db::Database;
use crate::error::Result;

/// Environment variable naming the database file.
pub const ENV_DB_PATH: &str = "PHONEBOOK_DB";

pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub page_size: u32,
    pub verbose: bool,
}

impl Config {
    /// Resolve settings. `db_path` already reflects `--db` or `PHONEBOOK_DB`
    /// (clap reads both); without it the per-user config directory is used.
    pub fn resolve(db_path: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let db_path = match db_path {
            Some(path) => path,
            None => Database::default_path()?,
        };

        Ok(Self {
            db_path,
            page_size: DEFAULT_PAGE_SIZE,
            verbose,
        })
    }

    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let config = Config::resolve(Some(PathBuf::from("/tmp/pb.db")), false).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/pb.db"));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_verbose_logs_debug() {
        let config = Config::resolve(Some(PathBuf::from("x.db")), true).unwrap();
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
    }
}
