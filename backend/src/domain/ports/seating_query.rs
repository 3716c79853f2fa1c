//! Driving port for read-only seating operations.
//!
//! The [`SeatingQuery`] trait is what attendee-facing adapters call to find a
//! table, and what the admin surface calls to list the registry.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Attendee, Error, Table, TableMember};

/// Result of looking up an attendee's table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableLookup {
    /// The table the attendee sits at.
    pub table: Table,
    /// The attendee's own name.
    pub attendee_name: String,
    /// Everyone assigned to the table, in registry order.
    pub members: Vec<TableMember>,
}

/// A table together with its assigned members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRoster {
    /// Catalogue entry.
    pub table: Table,
    /// Assigned attendees at the table, in registry order.
    pub members: Vec<TableMember>,
}

/// Which attendees a listing returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttendeeFilter {
    /// Every record in the pool.
    #[default]
    All,
    /// Only attendees currently seated.
    AssignedOnly,
}

impl AttendeeFilter {
    /// Whether `attendee` passes the filter.
    pub fn admits(self, attendee: &Attendee) -> bool {
        match self {
            Self::All => true,
            Self::AssignedOnly => attendee.is_assigned(),
        }
    }
}

/// Read-only seating use cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeatingQuery: Send + Sync {
    /// Find the table, name, and tablemates for a registration number.
    ///
    /// # Errors
    ///
    /// - `invalid_request` when the id is blank.
    /// - `not_found` when the attendee is absent, unassigned, or seated at a
    ///   table missing from the catalogue.
    async fn lookup_table(&self, attendee_id: &str) -> Result<TableLookup, Error>;

    /// List attendees in registry order.
    async fn list_attendees(&self, filter: AttendeeFilter) -> Result<Vec<Attendee>, Error>;

    /// List the table catalogue in display order.
    async fn list_tables(&self) -> Result<Vec<Table>, Error>;

    /// Every table with its assigned members.
    async fn table_roster(&self) -> Result<Vec<TableRoster>, Error>;

    /// Serialise the visible snapshot as pretty-printed JSON.
    async fn export_snapshot(&self) -> Result<Vec<u8>, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AttendeeId, AttendeeName, TableId};
    use rstest::rstest;

    #[rstest]
    fn assigned_only_filter_drops_placeholders() {
        let placeholder = Attendee::placeholder(AttendeeId::from_number("CHI-IHE", 1));
        let seated = Attendee::seated(
            AttendeeId::from_number("CHI-IHE", 2),
            AttendeeName::parse("Ada Lovelace").expect("name"),
            TableId::parse("table1").expect("table id"),
        );

        assert!(AttendeeFilter::All.admits(&placeholder));
        assert!(!AttendeeFilter::AssignedOnly.admits(&placeholder));
        assert!(AttendeeFilter::AssignedOnly.admits(&seated));
    }
}
