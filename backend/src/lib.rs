//! Seating registry: attendee table lookup and seat administration.
//!
//! The crate follows a hexagonal layout. [`domain`] owns the data model, the
//! registry service, and its ports; [`inbound::http`] exposes the REST
//! surface; [`outbound::persistence`] stores snapshots on disk or in memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
pub use settings::{SeatingSettings, SettingsError};
