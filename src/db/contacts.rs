use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

use super::Database;
use crate::error::Result;
use crate::models::{Contact, NewContact};
use crate::validation::partition_lines;

const CONTACT_COLUMNS: &str = "id, first_name, last_name, phone, created_at";

/// Outcome of a bulk insert: contacts written and lines rejected verbatim.
#[derive(Debug, Default, Clone)]
pub struct BulkInsertReport {
    pub applied: Vec<Contact>,
    pub invalid: Vec<String>,
}

/// Stored row from an upsert and whether the upsert created it.
#[derive(Debug, Clone)]
pub struct UpsertOutcome {
    pub contact: Contact,
    pub created: bool,
}

impl BulkInsertReport {
    /// True when every line was applied.
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }
}

impl Database {
    // ==================== READ ====================

    /// Contacts whose first name, last name or phone contains `pattern`,
    /// ignoring case. An empty pattern matches every contact.
    pub fn search(&self, pattern: &str) -> Result<Vec<Contact>> {
        let contacts = select_matching(&self.conn, pattern)?;
        tracing::debug!(pattern, found = contacts.len(), "search");
        Ok(contacts)
    }

    /// The set `delete_matching` would remove for `term`, without removing it.
    ///
    /// Callers that want to confirm before deleting pass the ids of this
    /// result to `delete_contacts`.
    pub fn find_matching(&self, term: &str) -> Result<Vec<Contact>> {
        select_matching(&self.conn, term)
    }

    pub fn get_by_phone(&self, phone: &str) -> Result<Option<Contact>> {
        let sql = format!("SELECT {} FROM contacts WHERE phone = ?", CONTACT_COLUMNS);
        let result = self.conn.query_row(&sql, [phone], row_to_contact);

        match result {
            Ok(contact) => Ok(Some(contact)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn count(&self) -> Result<u32> {
        let count: u32 = self
            .conn
            .query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
        Ok(count)
    }

    /// One page of contacts ordered by first name, then last name.
    ///
    /// Contacts without a last name sort after those with one; id breaks
    /// remaining ties so pages never overlap.
    pub fn list_page(&self, limit: u32, offset: u32) -> Result<Vec<Contact>> {
        let sql = format!(
            r#"SELECT {} FROM contacts
               ORDER BY first_name_lc ASC,
                        last_name_lc IS NULL ASC,
                        last_name_lc ASC,
                        id ASC
               LIMIT ? OFFSET ?"#,
            CONTACT_COLUMNS
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let contacts = stmt
            .query_map([limit, offset], row_to_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!(limit, offset, returned = contacts.len(), "list page");
        Ok(contacts)
    }

    // ==================== WRITE ====================

    /// Insert a contact, or rename the existing contact with the same phone.
    ///
    /// Resolution happens in a single statement, so concurrent upserts of one
    /// phone cannot produce two rows. Id and creation time of an existing
    /// contact are left untouched.
    pub fn upsert(&self, contact: &NewContact) -> Result<Contact> {
        Ok(self.upsert_outcome(contact)?.contact)
    }

    /// Like `upsert`, also reporting whether a new contact was created.
    pub fn upsert_outcome(&self, contact: &NewContact) -> Result<UpsertOutcome> {
        let outcome = upsert_with(&self.conn, contact)?;
        tracing::debug!(
            id = outcome.contact.id,
            phone = %outcome.contact.phone,
            created = outcome.created,
            "upsert"
        );
        Ok(outcome)
    }

    /// Validate each line and upsert the valid ones in input order.
    ///
    /// Invalid lines never stop the batch. A store failure rolls back every
    /// upsert made by this call.
    pub fn bulk_insert<S: AsRef<str>>(&self, lines: &[S]) -> Result<BulkInsertReport> {
        let (valid, invalid) = partition_lines(lines);

        let applied = if valid.is_empty() {
            Vec::new()
        } else {
            self.write_transaction(|conn| {
                valid
                    .iter()
                    .map(|contact| upsert_with(conn, contact).map(|o| o.contact))
                    .collect::<Result<Vec<_>>>()
            })?
        };

        tracing::debug!(
            applied = applied.len(),
            rejected = invalid.len(),
            "bulk insert"
        );
        Ok(BulkInsertReport { applied, invalid })
    }

    // ==================== DELETE ====================

    /// Delete every contact matching `term` and return how many were removed.
    ///
    /// The match set is computed and deleted under one write lock, so the rows
    /// removed are exactly the rows that matched.
    pub fn delete_matching(&self, term: &str) -> Result<usize> {
        let deleted = self.write_transaction(|conn| {
            let ids: Vec<i64> = select_matching(conn, term)?
                .into_iter()
                .map(|c| c.id)
                .collect();
            delete_ids(conn, &ids)
        })?;

        tracing::debug!(term, deleted, "delete matching");
        Ok(deleted)
    }

    /// Delete exactly the contacts with the given ids.
    ///
    /// Ids that no longer exist are skipped and not counted; nothing outside
    /// `ids` is touched.
    pub fn delete_contacts(&self, ids: &[i64]) -> Result<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let deleted = self.write_transaction(|conn| delete_ids(conn, ids))?;
        tracing::debug!(requested = ids.len(), deleted, "delete contacts");
        Ok(deleted)
    }
}

fn select_matching(conn: &Connection, pattern: &str) -> Result<Vec<Contact>> {
    // Names are matched against their lowercased copies; phones are digits
    let like = format!("%{}%", escape_like(&pattern.to_lowercase()));
    let sql = format!(
        r#"SELECT {} FROM contacts
           WHERE first_name_lc LIKE ?1 ESCAPE '\'
              OR last_name_lc LIKE ?1 ESCAPE '\'
              OR phone LIKE ?1 ESCAPE '\'
           ORDER BY id ASC"#,
        CONTACT_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let contacts = stmt
        .query_map([like], row_to_contact)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(contacts)
}

/// A conflicting row keeps its `created_at`, so the returned timestamp equals
/// the bound one only when this statement inserted the row.
fn upsert_with(conn: &Connection, contact: &NewContact) -> Result<UpsertOutcome> {
    let sql = format!(
        r#"INSERT INTO contacts
               (first_name, last_name, first_name_lc, last_name_lc, phone, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)
           ON CONFLICT(phone) DO UPDATE SET
               first_name = excluded.first_name,
               last_name = excluded.last_name,
               first_name_lc = excluded.first_name_lc,
               last_name_lc = excluded.last_name_lc
           RETURNING {}"#,
        CONTACT_COLUMNS
    );

    let now = Utc::now().to_rfc3339();
    let (stored, stored_created_at) = conn.query_row(
        &sql,
        params![
            contact.first_name,
            contact.last_name,
            contact.first_name.to_lowercase(),
            contact.last_name.as_deref().map(str::to_lowercase),
            contact.phone,
            now,
        ],
        |row| Ok((row_to_contact(row)?, row.get::<_, String>("created_at")?)),
    )?;

    Ok(UpsertOutcome {
        contact: stored,
        created: stored_created_at == now,
    })
}

fn delete_ids(conn: &Connection, ids: &[i64]) -> Result<usize> {
    let mut stmt = conn.prepare("DELETE FROM contacts WHERE id = ?")?;
    let mut deleted = 0;
    for id in ids {
        deleted += stmt.execute([id])?;
    }
    Ok(deleted)
}

/// Escape LIKE metacharacters (% _ \)
fn escape_like(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' | '_' | '\\' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

fn row_to_contact(row: &Row) -> rusqlite::Result<Contact> {
    let created_at: String = row.get("created_at")?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(Contact {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        phone: row.get("phone")?,
        created_at,
    })
}
