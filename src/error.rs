use thiserror::Error;

/// Failures surfaced by the contact store and its operations.
#[derive(Error, Debug)]
pub enum ContactError {
    /// The database could not be opened or bootstrapped.
    #[error("could not connect to contact store: {0}")]
    Connectivity(String),

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Single-contact input rejected before reaching the store.
    #[error("invalid contact: {0}")]
    InvalidContact(String),

    #[error("query failed: {0}")]
    Query(String),
}

pub type Result<T> = std::result::Result<T, ContactError>;

impl From<rusqlite::Error> for ContactError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                ContactError::ConstraintViolation(err.to_string())
            }
            _ => ContactError::Query(err.to_string()),
        }
    }
}
