//! HTTP inbound adapter exposing the seating REST surface.

pub mod attendees;
pub mod error;
pub mod health;
pub mod lookup;
pub mod schemas;
pub mod snapshot;
pub mod state;
pub mod tables;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register every seating endpoint and the JSON body error handler.
///
/// Health probes are registered separately because they depend on
/// [`health::HealthState`] rather than the seating ports.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(attendees::list_attendees)
        .service(attendees::next_id)
        .service(attendees::assign)
        .service(attendees::enroll)
        .service(attendees::unassign)
        .service(attendees::move_attendee)
        .service(attendees::reset)
        .service(tables::list_tables)
        .service(tables::table_roster)
        .service(lookup::lookup)
        .service(snapshot::export_snapshot)
        .service(snapshot::import_snapshot)
        .service(snapshot::initialize);
}
