use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ContactError, Result};

mod contacts;
mod schema;

pub use contacts::{BulkInsertReport, UpsertOutcome};
pub use schema::SCHEMA_VERSION;

/// How long a connection waits on another process's write lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Owned handle to the contact store. Every operation borrows it explicitly.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at the default location, creating it if needed
    pub fn open() -> Result<Self> {
        Self::open_at(Self::default_path()?)
    }

    pub fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ContactError::Connectivity(format!("{}: {}", parent.display(), e))
            })?;
        }

        let conn = Connection::open(path)
            .map_err(|e| ContactError::Connectivity(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), "opened contact store");
        Self::init(conn)
    }

    /// Open in-memory database for testing
    pub fn open_memory() -> Result<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| ContactError::Connectivity(e.to_string()))?;
        Self::init(conn)
    }

    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ContactError::Connectivity("could not find config directory".to_string())
        })?;
        Ok(config_dir.join("phonebook").join("contacts.db"))
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(|e| ContactError::Connectivity(e.to_string()))?;

        let db = Self { conn };
        db.migrate()
            .map_err(|e| ContactError::Connectivity(format!("schema setup failed: {}", e)))?;
        Ok(db)
    }

    fn migrate(&self) -> rusqlite::Result<()> {
        let version = self.get_schema_version()?;

        if version == 0 {
            self.conn
                .execute_batch(&format!("BEGIN IMMEDIATE; {} COMMIT;", schema::SCHEMA_V1))?;
            self.set_schema_version(SCHEMA_VERSION)?;
            tracing::debug!(version = SCHEMA_VERSION, "created contacts schema");
        }

        Ok(())
    }

    fn get_schema_version(&self) -> rusqlite::Result<i32> {
        let result: rusqlite::Result<i32> =
            self.conn
                .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                    row.get(0)
                });

        match result {
            Ok(v) => Ok(v),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            // Fresh database: the version table itself does not exist yet
            Err(rusqlite::Error::SqliteFailure(_, Some(ref msg)))
                if msg.contains("no such table") =>
            {
                Ok(0)
            }
            Err(e) => Err(e),
        }
    }

    fn set_schema_version(&self, version: i32) -> rusqlite::Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO schema_version (id, version) VALUES (1, ?)",
            [version],
        )?;
        Ok(())
    }

    /// Run `f` inside a `BEGIN IMMEDIATE` transaction, rolling back on error.
    ///
    /// IMMEDIATE takes the write lock up front, so reads made inside `f` see
    /// the same rows the writes act on.
    fn write_transaction<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        self.conn.execute_batch("BEGIN IMMEDIATE")?;

        match f(&self.conn) {
            Ok(value) => {
                if let Err(e) = self.conn.execute_batch("COMMIT") {
                    let _ = self.conn.execute_batch("ROLLBACK");
                    return Err(e.into());
                }
                Ok(value)
            }
            Err(e) => {
                tracing::warn!(error = %e, "rolling back transaction");
                let _ = self.conn.execute_batch("ROLLBACK");
                Err(e)
            }
        }
    }
}
