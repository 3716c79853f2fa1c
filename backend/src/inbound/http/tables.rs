//! Table catalogue handlers.
//!
//! ```text
//! GET /tables
//! GET /tables/roster
//! ```

use actix_web::{get, web};

use crate::domain::Table;
use crate::domain::ports::TableRoster;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{TableRosterSchema, TableSchema};
use crate::inbound::http::state::HttpState;

/// List the table catalogue in display order.
#[utoipa::path(
    get,
    path = "/tables",
    responses((status = 200, description = "Table catalogue", body = [TableSchema])),
    tags = ["tables"],
    operation_id = "listTables"
)]
#[get("/tables")]
pub async fn list_tables(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Table>>> {
    Ok(web::Json(state.query.list_tables().await?))
}

/// Every table with its seated attendees.
#[utoipa::path(
    get,
    path = "/tables/roster",
    responses((status = 200, description = "Tables with members", body = [TableRosterSchema])),
    tags = ["tables"],
    operation_id = "tableRoster"
)]
#[get("/tables/roster")]
pub async fn table_roster(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<TableRoster>>> {
    Ok(web::Json(state.query.table_roster().await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockSeatingCommand, MockSeatingQuery};
    use crate::domain::{AttendeeId, SeedCatalog, TableMember};
    use crate::inbound::http::test_utils::mock_app;
    use actix_web::test as actix_test;
    use serde_json::Value;

    #[actix_web::test]
    async fn roster_lists_members_per_table() {
        let mut query = MockSeatingQuery::new();
        query.expect_table_roster().return_once(|| {
            let tables = SeedCatalog::reference().tables().to_vec();
            Ok(tables
                .into_iter()
                .take(2)
                .enumerate()
                .map(|(index, table)| TableRoster {
                    table,
                    members: if index == 0 {
                        vec![TableMember {
                            id: AttendeeId::from_number("CHI-IHE", 1),
                            name: "Ada Lovelace".into(),
                        }]
                    } else {
                        Vec::new()
                    },
                })
                .collect())
        });
        let app = actix_test::init_service(mock_app(query, MockSeatingCommand::new())).await;

        let request = actix_test::TestRequest::get().uri("/tables/roster").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body[0]["table"]["id"], "table1");
        assert_eq!(body[0]["members"][0]["name"], "Ada Lovelace");
        assert_eq!(body[1]["members"], Value::Array(Vec::new()));
    }

    #[actix_web::test]
    async fn tables_keep_display_order() {
        let mut query = MockSeatingQuery::new();
        query
            .expect_list_tables()
            .return_once(|| Ok(SeedCatalog::reference().tables().to_vec()));
        let app = actix_test::init_service(mock_app(query, MockSeatingCommand::new())).await;

        let request = actix_test::TestRequest::get().uri("/tables").to_request();
        let body: Vec<Value> = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body.len(), 25);
        assert_eq!(body[24]["name"], "Giorgio Table");
    }
}
