//! Attendee administration handlers.
//!
//! ```text
//! GET   /attendees[?assigned=true]
//! GET   /attendees/next-id
//! POST  /attendees/assign
//! POST  /attendees/enroll
//! PATCH /attendees/{id}/unassign
//! PATCH /attendees/{id}/move
//! POST  /attendees/reset
//! ```

use actix_web::{HttpResponse, get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{AssignRequest, AttendeeFilter, EnrollRequest, MoveRequest};
use crate::domain::{Attendee, RegistrySnapshot};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{AttendeeSchema, ErrorSchema, SnapshotSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::require;

/// Query string for attendee listings.
#[derive(Debug, Default, Deserialize)]
pub struct ListAttendeesQuery {
    /// Only return seated attendees when `true`.
    pub assigned: Option<bool>,
}

/// Request payload for seating an attendee.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequestBody {
    /// Registration number, case-insensitive.
    #[schema(example = "CHI-IHE000001")]
    pub attendee_id: Option<String>,
    /// Display name.
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    /// Target table id.
    #[schema(example = "table1")]
    pub table_id: Option<String>,
}

/// Request payload for enrolling a new attendee under a generated id.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequestBody {
    /// Display name.
    #[schema(example = "Grace Hopper")]
    pub name: Option<String>,
    /// Target table id.
    #[schema(example = "table2")]
    pub table_id: Option<String>,
}

/// Request payload for moving an attendee.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequestBody {
    /// Destination table id.
    #[schema(example = "table4")]
    pub new_table_id: Option<String>,
}

/// Suggested registration number.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NextIdResponse {
    /// Next free registration number; not reserved.
    #[schema(example = "CHI-IHE000001")]
    pub attendee_id: String,
}

/// Response for an unassignment.
#[derive(Debug, Serialize, ToSchema)]
pub struct UnassignResponse {
    /// Confirmation text.
    #[schema(example = "Attendee CHI-IHE000001 unassigned")]
    pub message: String,
    /// Updated record.
    #[schema(value_type = AttendeeSchema)]
    pub attendee: Attendee,
}

/// List attendees, optionally only those currently seated.
#[utoipa::path(
    get,
    path = "/attendees",
    params(
        ("assigned" = Option<bool>, Query, description = "Only seated attendees when true")
    ),
    responses(
        (status = 200, description = "Attendees in registry order", body = [AttendeeSchema])
    ),
    tags = ["attendees"],
    operation_id = "listAttendees"
)]
#[get("/attendees")]
pub async fn list_attendees(
    state: web::Data<HttpState>,
    query: web::Query<ListAttendeesQuery>,
) -> ApiResult<web::Json<Vec<Attendee>>> {
    let filter = if query.assigned.unwrap_or(false) {
        AttendeeFilter::AssignedOnly
    } else {
        AttendeeFilter::All
    };
    let attendees = state.query.list_attendees(filter).await?;
    Ok(web::Json(attendees))
}

/// Suggest the next registration number.
#[utoipa::path(
    get,
    path = "/attendees/next-id",
    responses(
        (status = 200, description = "Suggested id", body = NextIdResponse),
        (status = 503, description = "Snapshot store unavailable", body = ErrorSchema)
    ),
    tags = ["attendees"],
    operation_id = "nextAttendeeId"
)]
#[get("/attendees/next-id")]
pub async fn next_id(state: web::Data<HttpState>) -> ApiResult<web::Json<NextIdResponse>> {
    let id = state.command.generate_id().await?;
    Ok(web::Json(NextIdResponse {
        attendee_id: id.to_string(),
    }))
}

/// Seat an attendee, creating the record for unknown ids.
#[utoipa::path(
    post,
    path = "/attendees/assign",
    request_body = AssignRequestBody,
    responses(
        (status = 200, description = "Seated attendee", body = AttendeeSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Snapshot store unavailable", body = ErrorSchema)
    ),
    tags = ["attendees"],
    operation_id = "assignAttendee"
)]
#[post("/attendees/assign")]
pub async fn assign(
    state: web::Data<HttpState>,
    payload: web::Json<AssignRequestBody>,
) -> ApiResult<web::Json<Attendee>> {
    let body = payload.into_inner();
    let request = AssignRequest {
        attendee_id: require(body.attendee_id, "attendeeId")?,
        name: require(body.name, "name")?,
        table_id: require(body.table_id, "tableId")?,
    };
    let attendee = state.command.assign(request).await?;
    Ok(web::Json(attendee))
}

/// Allocate an id and seat a new attendee in one step.
#[utoipa::path(
    post,
    path = "/attendees/enroll",
    request_body = EnrollRequestBody,
    responses(
        (status = 201, description = "Enrolled attendee", body = AttendeeSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Snapshot store unavailable", body = ErrorSchema)
    ),
    tags = ["attendees"],
    operation_id = "enrollAttendee"
)]
#[post("/attendees/enroll")]
pub async fn enroll(
    state: web::Data<HttpState>,
    payload: web::Json<EnrollRequestBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let request = EnrollRequest {
        name: require(body.name, "name")?,
        table_id: require(body.table_id, "tableId")?,
    };
    let attendee = state.command.enroll(request).await?;
    Ok(HttpResponse::Created().json(attendee))
}

/// Release an attendee's seat.
#[utoipa::path(
    patch,
    path = "/attendees/{id}/unassign",
    params(("id" = String, Path, description = "Registration number")),
    responses(
        (status = 200, description = "Attendee unassigned", body = UnassignResponse),
        (status = 404, description = "Attendee not found", body = ErrorSchema),
        (status = 503, description = "Snapshot store unavailable", body = ErrorSchema)
    ),
    tags = ["attendees"],
    operation_id = "unassignAttendee"
)]
#[patch("/attendees/{id}/unassign")]
pub async fn unassign(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UnassignResponse>> {
    let attendee = state.command.unassign(&path.into_inner()).await?;
    Ok(web::Json(UnassignResponse {
        message: format!("Attendee {} unassigned", attendee.id()),
        attendee,
    }))
}

/// Move an attendee to another table.
#[utoipa::path(
    patch,
    path = "/attendees/{id}/move",
    params(("id" = String, Path, description = "Registration number")),
    request_body = MoveRequestBody,
    responses(
        (status = 200, description = "Moved attendee", body = AttendeeSchema),
        (status = 400, description = "Unknown table", body = ErrorSchema),
        (status = 404, description = "Attendee not found", body = ErrorSchema),
        (status = 503, description = "Snapshot store unavailable", body = ErrorSchema)
    ),
    tags = ["attendees"],
    operation_id = "moveAttendee"
)]
#[patch("/attendees/{id}/move")]
pub async fn move_attendee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<MoveRequestBody>,
) -> ApiResult<web::Json<Attendee>> {
    let request = MoveRequest {
        attendee_id: path.into_inner(),
        new_table_id: require(payload.into_inner().new_table_id, "newTableId")?,
    };
    let attendee = state.command.move_attendee(request).await?;
    Ok(web::Json(attendee))
}

/// Restore the seed snapshot.
#[utoipa::path(
    post,
    path = "/attendees/reset",
    responses(
        (status = 200, description = "Seeded snapshot", body = SnapshotSchema),
        (status = 503, description = "Snapshot store unavailable", body = ErrorSchema)
    ),
    tags = ["attendees"],
    operation_id = "resetRegistry"
)]
#[post("/attendees/reset")]
pub async fn reset(state: web::Data<HttpState>) -> ApiResult<web::Json<RegistrySnapshot>> {
    let snapshot = state.command.reset_all().await?;
    Ok(web::Json(snapshot))
}
