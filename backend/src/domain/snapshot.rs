//! Registry snapshot: the unit of persistence, export, and import.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::{Attendee, AttendeeId, Table, TableId, TableMember};

/// Errors raised when decoding a snapshot document.
#[derive(Debug, Error)]
pub enum SnapshotFormatError {
    /// The payload is not JSON or does not match the record layout.
    #[error("snapshot is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    /// A required top-level sequence is absent or not an array.
    #[error("snapshot field `{field}` must be an array")]
    MissingSequence {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Attendees, tables, and the fallback id cursor.
///
/// Serialises as `{ "attendees": [...], "tables": [...], "lastId": n }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySnapshot {
    attendees: Vec<Attendee>,
    tables: Vec<Table>,
    #[serde(default)]
    last_id: u64,
}

impl RegistrySnapshot {
    /// Assemble a snapshot from its parts.
    pub fn new(attendees: Vec<Attendee>, tables: Vec<Table>, last_id: u64) -> Self {
        Self {
            attendees,
            tables,
            last_id,
        }
    }

    /// Decode a snapshot document.
    ///
    /// Both `attendees` and `tables` must be arrays. Records inside them are
    /// accepted as-is; a missing `lastId` decodes as `0`.
    ///
    /// # Examples
    /// ```
    /// use seating::domain::RegistrySnapshot;
    ///
    /// let snapshot = RegistrySnapshot::from_json(br#"{"attendees": [], "tables": []}"#)
    ///     .expect("valid document");
    /// assert_eq!(snapshot.last_id(), 0);
    ///
    /// assert!(RegistrySnapshot::from_json(br#"{"attendees": 1, "tables": []}"#).is_err());
    /// ```
    pub fn from_json(bytes: &[u8]) -> Result<Self, SnapshotFormatError> {
        let value: Value = serde_json::from_slice(bytes)?;
        for field in ["attendees", "tables"] {
            if !value.get(field).is_some_and(Value::is_array) {
                return Err(SnapshotFormatError::MissingSequence { field });
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Encode the snapshot as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(self)
    }

    /// Attendees in insertion order.
    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    /// Tables in display order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Fallback id cursor.
    pub fn last_id(&self) -> u64 {
        self.last_id
    }

    pub(crate) fn set_last_id(&mut self, last_id: u64) {
        self.last_id = last_id;
    }

    /// Raise the cursor to at least `floor`.
    pub(crate) fn raise_cursor_to(&mut self, floor: u64) {
        self.last_id = self.last_id.max(floor);
    }

    /// Find an attendee by exact id.
    pub fn find_attendee(&self, id: &AttendeeId) -> Option<&Attendee> {
        self.attendees.iter().find(|attendee| attendee.id() == id)
    }

    pub(crate) fn find_attendee_mut(&mut self, id: &AttendeeId) -> Option<&mut Attendee> {
        self.attendees.iter_mut().find(|attendee| attendee.id() == id)
    }

    pub(crate) fn push_attendee(&mut self, attendee: Attendee) {
        self.attendees.push(attendee);
    }

    /// Find a table by id.
    pub fn find_table(&self, id: &TableId) -> Option<&Table> {
        self.tables.iter().find(|table| table.id() == id)
    }

    /// Whether `id` is held by an assigned attendee.
    pub fn is_id_taken(&self, id: &AttendeeId) -> bool {
        self.attendees
            .iter()
            .any(|attendee| attendee.is_assigned() && attendee.id() == id)
    }

    /// Assigned attendees at `table_id`, reduced to `{id, name}`, in registry
    /// order.
    pub fn members_of(&self, table_id: &TableId) -> Vec<TableMember> {
        self.attendees
            .iter()
            .filter(|attendee| attendee.is_seated_at(table_id))
            .map(Attendee::as_member)
            .collect()
    }
}
