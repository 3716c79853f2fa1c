//! Domain primitives, ports, and the seating registry service.
//!
//! Purpose: model attendees, tables, and registry snapshots with their
//! invariants, and implement the seating use cases over an injected
//! [`ports::SnapshotStore`]. Nothing here depends on actix, cap-std, or any
//! adapter module.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Attendee, Table, RegistrySnapshot: the persisted data model.
//! - SeedCatalog: initial registry contents.
//! - SeatingRegistry: implementation of the driving ports.

pub mod attendee;
pub mod error;
pub mod id_allocation;
pub mod ports;
pub mod registry;
pub mod seed;
pub mod snapshot;
pub mod table;
pub mod trace_id;

pub use self::attendee::{
    Attendee, AttendeeId, AttendeeName, AttendeeValidationError, TableMember,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::id_allocation::{IdAllocationPolicy, UnknownPolicyError};
pub use self::registry::SeatingRegistry;
pub use self::seed::{DEFAULT_ID_PREFIX, DEFAULT_POOL_SIZE, SeedCatalog};
pub use self::snapshot::{RegistrySnapshot, SnapshotFormatError};
pub use self::table::{Table, TableId, TableValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use seating::domain::{ApiResult, Error};
///
/// fn lookup(id: &str) -> ApiResult<String> {
///     if id.trim().is_empty() {
///         return Err(Error::invalid_request("registration number is required"));
///     }
///     Ok(id.to_uppercase())
/// }
/// assert!(lookup(" ").is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
