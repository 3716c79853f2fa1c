//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod seating_command;
mod seating_query;
mod snapshot_store;

#[cfg(test)]
pub use seating_command::MockSeatingCommand;
pub use seating_command::{AssignRequest, EnrollRequest, MoveRequest, SeatingCommand};
#[cfg(test)]
pub use seating_query::MockSeatingQuery;
pub use seating_query::{AttendeeFilter, SeatingQuery, TableLookup, TableRoster};
#[cfg(test)]
pub use snapshot_store::MockSnapshotStore;
pub use snapshot_store::{SnapshotStore, SnapshotStoreError};
