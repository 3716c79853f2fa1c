//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{MockSeatingCommand, MockSeatingQuery};
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;

/// Build an app wiring every seating route to the given mocks.
///
/// Unconfigured mock methods panic when called, so each test only sets the
/// expectations it exercises.
pub fn mock_app(
    query: MockSeatingQuery,
    command: MockSeatingCommand,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(query), Arc::new(command));
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure)
}
