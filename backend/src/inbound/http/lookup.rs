//! Attendee-facing table lookup.
//!
//! ```text
//! GET /lookup/{id}
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::TableMember;
use crate::domain::ports::TableLookup;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, TableMemberSchema};
use crate::inbound::http::state::HttpState;

/// Where an attendee sits and who sits with them.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    /// Display label of the table.
    #[schema(example = "Eternity Table")]
    pub table_name: String,
    /// The attendee's own name.
    #[schema(example = "Ada Lovelace")]
    pub attendee_name: String,
    /// Everyone seated at the table, in registry order.
    #[schema(value_type = Vec<TableMemberSchema>)]
    pub members: Vec<TableMember>,
}

impl From<TableLookup> for LookupResponse {
    fn from(value: TableLookup) -> Self {
        Self {
            table_name: value.table.name().to_owned(),
            attendee_name: value.attendee_name,
            members: value.members,
        }
    }
}

/// Look up an attendee's table by registration number.
#[utoipa::path(
    get,
    path = "/lookup/{id}",
    params(("id" = String, Path, description = "Registration number, case-insensitive")),
    responses(
        (status = 200, description = "Table assignment", body = LookupResponse),
        (status = 400, description = "Blank registration number", body = ErrorSchema),
        (status = 404, description = "No table assignment found", body = ErrorSchema)
    ),
    tags = ["lookup"],
    operation_id = "lookupTable"
)]
#[get("/lookup/{id}")]
pub async fn lookup(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<LookupResponse>> {
    let found = state.query.lookup_table(&path.into_inner()).await?;
    Ok(web::Json(LookupResponse::from(found)))
}
