//! Terminal responses produced by the routing layer itself.
//!
//! Resources format their own responses; these helpers cover the few cases
//! where the router answers on their behalf (no route, wrong verb, path
//! redirects) and give resources a plain status-text reply.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// Methods a resource route accepts, as sent in `Allow`.
pub const RESOURCE_METHODS: &str = "GET, POST, PUT, DELETE";

/// Reply with `status` and its canonical reason phrase as the body.
pub fn error(status: StatusCode) -> Response {
    (status, status.canonical_reason().unwrap_or_default()).into_response()
}

/// `404 page not found`.
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404 page not found").into_response()
}

pub fn method_not_allowed() -> Response {
    let status = StatusCode::METHOD_NOT_ALLOWED;
    (
        status,
        [(header::ALLOW, HeaderValue::from_static(RESOURCE_METHODS))],
        status.canonical_reason().unwrap_or_default(),
    )
        .into_response()
}

/// `301` to `location`. An unrepresentable location becomes `400`.
pub fn moved_permanently(location: &str) -> Response {
    match HeaderValue::try_from(location) {
        Ok(value) => (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, value)]).into_response(),
        Err(_) => error(StatusCode::BAD_REQUEST),
    }
}
