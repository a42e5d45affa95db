//! Registration and dispatch errors.

use axum::{
    http::Method,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::http::response;

/// Errors that can occur when registering a route.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RouteError {
    /// Patterns must be non-empty and rooted at `/`.
    #[error("invalid route pattern {pattern:?}: patterns must begin with '/'")]
    InvalidPattern { pattern: String },

    /// The pattern is already registered.
    #[error("multiple registrations for {pattern}")]
    Conflict { pattern: String },
}

impl RouteError {
    pub(crate) fn invalid(pattern: &str) -> Self {
        RouteError::InvalidPattern {
            pattern: pattern.to_string(),
        }
    }

    pub(crate) fn conflict(pattern: &str) -> Self {
        RouteError::Conflict {
            pattern: pattern.to_string(),
        }
    }
}

/// Why a resource handler refused a request.
///
/// Neither case invokes the resource.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DispatchError {
    /// The path is outside the resource prefix.
    #[error("path is not under the resource prefix")]
    NotFound,

    /// The verb has no resource operation.
    #[error("method {0} is not allowed on a resource route")]
    MethodNotAllowed(Method),
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        match self {
            DispatchError::NotFound => response::not_found(),
            DispatchError::MethodNotAllowed(_) => response::method_not_allowed(),
        }
    }
}
