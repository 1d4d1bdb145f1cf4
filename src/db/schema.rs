pub const SCHEMA_VERSION: i32 = 1;

/// V1: contacts table keyed by an autoincrement id, phone unique.
///
/// `*_lc` columns hold the Unicode-lowercased names (set from Rust, since
/// SQLite's own case folding covers ASCII only). Search and ordering use them.
pub const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL CHECK (length(first_name) BETWEEN 1 AND 50),
    last_name TEXT CHECK (last_name IS NULL OR length(last_name) <= 50),
    first_name_lc TEXT NOT NULL,
    last_name_lc TEXT,
    phone TEXT NOT NULL UNIQUE
        CHECK (length(phone) = 10 AND phone NOT GLOB '*[^0-9]*'),
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_contacts_name ON contacts(first_name_lc, last_name_lc);
"#;
