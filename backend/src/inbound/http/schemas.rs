//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers here mirror their serialised shape and live in the inbound
//! adapter where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// A field is missing or references an unknown table.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The attendee or its table does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An imported snapshot has the wrong structure.
    #[schema(rename = "invalid_format")]
    InvalidFormat,
    /// The snapshot store could not be read or written.
    #[schema(rename = "storage_unavailable")]
    StorageUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "table table999 does not exist")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details such as `{field, code}`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Attendee`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Attendee, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AttendeeSchema {
    /// Registration number.
    #[schema(example = "CHI-IHE000101")]
    id: String,
    /// Display name; empty while unassigned.
    #[schema(example = "Ada Lovelace")]
    name: String,
    /// Table id; empty while unassigned.
    #[schema(example = "table1")]
    table_id: String,
    /// Whether the attendee occupies a table.
    assigned: bool,
}

/// OpenAPI schema for [`crate::domain::Table`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Table)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TableSchema {
    /// Table identifier.
    #[schema(example = "table1")]
    id: String,
    /// Display label.
    #[schema(example = "Eternity Table")]
    name: String,
}

/// OpenAPI schema for [`crate::domain::TableMember`].
#[derive(ToSchema)]
#[schema(as = crate::domain::TableMember)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TableMemberSchema {
    /// Registration number.
    #[schema(example = "CHI-IHE000101")]
    id: String,
    /// Display name.
    #[schema(example = "Ada Lovelace")]
    name: String,
}

/// OpenAPI schema for [`crate::domain::ports::TableRoster`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::TableRoster)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TableRosterSchema {
    /// Catalogue entry.
    table: TableSchema,
    /// Assigned attendees at the table.
    members: Vec<TableMemberSchema>,
}

/// OpenAPI schema for [`crate::domain::RegistrySnapshot`].
#[derive(ToSchema)]
#[schema(as = crate::domain::RegistrySnapshot, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SnapshotSchema {
    /// Attendees in insertion order.
    attendees: Vec<AttendeeSchema>,
    /// Tables in display order.
    tables: Vec<TableSchema>,
    /// Fallback id cursor.
    #[schema(example = 350)]
    last_id: u64,
}
