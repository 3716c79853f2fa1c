//! Snapshot export, import, and reload handlers.
//!
//! ```text
//! GET  /snapshot
//! PUT  /snapshot
//! POST /initialize
//! ```

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, post, put, web};

use crate::domain::RegistrySnapshot;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, SnapshotSchema};
use crate::inbound::http::state::HttpState;

/// Export the registry as a pretty-printed snapshot document.
#[utoipa::path(
    get,
    path = "/snapshot",
    responses((status = 200, description = "Snapshot document", body = SnapshotSchema)),
    tags = ["snapshot"],
    operation_id = "exportSnapshot"
)]
#[get("/snapshot")]
pub async fn export_snapshot(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let document = state.query.export_snapshot().await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(document))
}

/// Replace the registry with an exported document.
///
/// The raw body is parsed by the registry so structural problems surface as
/// `invalid_format` rather than a generic body error.
#[utoipa::path(
    put,
    path = "/snapshot",
    request_body(content = SnapshotSchema, content_type = "application/json"),
    responses(
        (status = 204, description = "Snapshot imported"),
        (status = 400, description = "Malformed snapshot", body = ErrorSchema),
        (status = 503, description = "Snapshot store unavailable", body = ErrorSchema)
    ),
    tags = ["snapshot"],
    operation_id = "importSnapshot"
)]
#[put("/snapshot")]
pub async fn import_snapshot(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    state.command.import_snapshot(&body).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Reload the registry from the store, seeding it when empty.
#[utoipa::path(
    post,
    path = "/initialize",
    responses(
        (status = 200, description = "Visible snapshot", body = SnapshotSchema),
        (status = 503, description = "Snapshot store unavailable", body = ErrorSchema)
    ),
    tags = ["snapshot"],
    operation_id = "initializeRegistry"
)]
#[post("/initialize")]
pub async fn initialize(state: web::Data<HttpState>) -> ApiResult<web::Json<RegistrySnapshot>> {
    Ok(web::Json(state.command.initialize().await?))
}
