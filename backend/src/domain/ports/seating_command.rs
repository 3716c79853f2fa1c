//! Driving port for seating mutations.
//!
//! Every method persists through the snapshot store before returning. A
//! failed save leaves the visible registry unchanged.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Attendee, AttendeeId, Error, RegistrySnapshot};

/// Request to seat an attendee, creating the record when the id is new.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    /// Registration number; normalised before use.
    pub attendee_id: String,
    /// Display name; trimmed before use.
    pub name: String,
    /// Target table.
    pub table_id: String,
}

/// Request to allocate an id and seat a new attendee in one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    /// Display name; trimmed before use.
    pub name: String,
    /// Target table.
    pub table_id: String,
}

/// Request to move a seated attendee to another table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    /// Registration number; normalised before use.
    pub attendee_id: String,
    /// Destination table.
    pub new_table_id: String,
}

/// Seating mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeatingCommand: Send + Sync {
    /// Seat an attendee (upsert).
    ///
    /// # Errors
    ///
    /// `invalid_request` when a field is blank or the table is unknown;
    /// `storage_unavailable` when the save fails.
    async fn assign(&self, request: AssignRequest) -> Result<Attendee, Error>;

    /// Allocate a fresh id and seat the attendee atomically.
    async fn enroll(&self, request: EnrollRequest) -> Result<Attendee, Error>;

    /// Release an attendee's seat, clearing name and table.
    ///
    /// # Errors
    ///
    /// `not_found` when the id is absent.
    async fn unassign(&self, attendee_id: &str) -> Result<Attendee, Error>;

    /// Change an attendee's table without touching name or assignment.
    ///
    /// # Errors
    ///
    /// `not_found` when the attendee is absent; `invalid_request` when the
    /// table is unknown.
    async fn move_attendee(&self, request: MoveRequest) -> Result<Attendee, Error>;

    /// Suggest the next registration number without reserving it.
    async fn generate_id(&self) -> Result<AttendeeId, Error>;

    /// Restore the seed snapshot.
    async fn reset_all(&self) -> Result<RegistrySnapshot, Error>;

    /// Reload from the store, seeding it when empty.
    async fn initialize(&self) -> Result<RegistrySnapshot, Error>;

    /// Replace the registry with an exported document.
    ///
    /// # Errors
    ///
    /// `invalid_format` when the payload is not JSON or lacks the `attendees`
    /// or `tables` arrays.
    async fn import_snapshot(&self, payload: &[u8]) -> Result<RegistrySnapshot, Error>;
}
