//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::Error;

/// Error returned when a required body field is absent.
pub(crate) fn missing_field_error(field: &str) -> Error {
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

/// Unwrap an optional body field or report it as missing.
pub(crate) fn require(value: Option<String>, field: &str) -> Result<String, Error> {
    value.ok_or_else(|| missing_field_error(field))
}
