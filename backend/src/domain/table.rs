//! Banquet tables.
//!
//! Tables form a fixed catalogue seeded at start-up. The registry never
//! creates or deletes them; it only resolves ids and reports membership.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors returned when constructing table values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableValidationError {
    /// The table id was blank.
    #[error("table id must not be empty")]
    EmptyId,
}

/// Table identifier, for example `table1`.
///
/// Ids are trimmed but otherwise kept verbatim. Deserialisation accepts any
/// string so imported snapshots load as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(String);

impl TableId {
    /// Validate and trim a raw table id.
    ///
    /// # Examples
    /// ```
    /// use seating::domain::TableId;
    ///
    /// let id = TableId::parse(" table7 ").expect("valid id");
    /// assert_eq!(id.as_str(), "table7");
    /// ```
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, TableValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TableValidationError::EmptyId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub(crate) fn from_stored(raw: String) -> Self {
        Self(raw)
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for TableId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A table in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    id: TableId,
    #[serde(default)]
    name: String,
}

impl Table {
    /// Build a catalogue entry.
    pub fn new(id: TableId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Table identifier.
    pub fn id(&self) -> &TableId {
        &self.id
    }

    /// Display label shown to attendees.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
