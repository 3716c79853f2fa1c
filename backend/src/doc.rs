//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every seating endpoint, the health probes, and the
//! schema wrappers from [`crate::inbound::http::schemas`]. The document backs
//! Swagger UI in debug builds and is printed by `cargo run --bin openapi-dump`.

use crate::inbound::http::attendees::{
    AssignRequestBody, EnrollRequestBody, MoveRequestBody, NextIdResponse, UnassignResponse,
};
use crate::inbound::http::lookup::LookupResponse;
use crate::inbound::http::schemas::{
    AttendeeSchema, ErrorCodeSchema, ErrorSchema, SnapshotSchema, TableMemberSchema,
    TableRosterSchema, TableSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Seating registry API",
        description = "Table lookup for attendees and seat administration for organisers.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::attendees::list_attendees,
        crate::inbound::http::attendees::next_id,
        crate::inbound::http::attendees::assign,
        crate::inbound::http::attendees::enroll,
        crate::inbound::http::attendees::unassign,
        crate::inbound::http::attendees::move_attendee,
        crate::inbound::http::attendees::reset,
        crate::inbound::http::tables::list_tables,
        crate::inbound::http::tables::table_roster,
        crate::inbound::http::lookup::lookup,
        crate::inbound::http::snapshot::export_snapshot,
        crate::inbound::http::snapshot::import_snapshot,
        crate::inbound::http::snapshot::initialize,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AttendeeSchema,
        TableSchema,
        TableMemberSchema,
        TableRosterSchema,
        SnapshotSchema,
        ErrorSchema,
        ErrorCodeSchema,
        AssignRequestBody,
        EnrollRequestBody,
        MoveRequestBody,
        NextIdResponse,
        UnassignResponse,
        LookupResponse,
    )),
    tags(
        (name = "attendees", description = "Seat administration"),
        (name = "tables", description = "Table listings and rosters"),
        (name = "lookup", description = "Attendee-facing table lookup"),
        (name = "snapshot", description = "Registry export, import, and reload"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
