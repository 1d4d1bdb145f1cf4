use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ContactError, Result};
use crate::validation::{is_valid_phone, MAX_NAME_LEN};

/// A stored phone book entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// "First Last", or just the first name when there is no last name.
    pub fn full_name(&self) -> String {
        match self.last_name.as_deref() {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }
}

/// Input to an upsert. Fields are trimmed and checked on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: String,
}

impl NewContact {
    pub fn new(first: &str, last: Option<&str>, phone: &str) -> Result<Self> {
        let first_name = first.trim();
        let last_name = last.map(str::trim).filter(|l| !l.is_empty());
        let phone = phone.trim();

        if first_name.is_empty() {
            return Err(ContactError::InvalidContact(
                "first name is required".to_string(),
            ));
        }
        if first_name.chars().count() > MAX_NAME_LEN {
            return Err(ContactError::InvalidContact(format!(
                "first name longer than {} characters",
                MAX_NAME_LEN
            )));
        }
        if let Some(l) = last_name {
            if l.chars().count() > MAX_NAME_LEN {
                return Err(ContactError::InvalidContact(format!(
                    "last name longer than {} characters",
                    MAX_NAME_LEN
                )));
            }
        }
        if !is_valid_phone(phone) {
            return Err(ContactError::InvalidContact(format!(
                "phone must be exactly 10 digits: {}",
                phone
            )));
        }

        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.map(str::to_string),
            phone: phone.to_string(),
        })
    }
}
