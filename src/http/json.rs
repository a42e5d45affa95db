//! JSON request and response bodies for resource implementations.

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::http::response;

/// Upper bound on a buffered request body (2MB).
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("failed to read request body: {0}")]
    Body(#[source] axum::Error),

    #[error("invalid JSON body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode JSON: {0}")]
    Encode(#[source] serde_json::Error),
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        match self {
            JsonError::Body(_) | JsonError::Decode(_) => response::error(StatusCode::BAD_REQUEST),
            JsonError::Encode(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
        }
    }
}

/// Decode the request body as JSON.
pub async fn read_json<T: DeserializeOwned>(req: Request<Body>) -> Result<T, JsonError> {
    read_json_with_limit(req, DEFAULT_BODY_LIMIT).await
}

/// Like [`read_json`] with a custom body size limit in bytes.
pub async fn read_json_with_limit<T: DeserializeOwned>(
    req: Request<Body>,
    limit: usize,
) -> Result<T, JsonError> {
    let bytes = axum::body::to_bytes(req.into_body(), limit)
        .await
        .map_err(JsonError::Body)?;
    serde_json::from_slice(&bytes).map_err(JsonError::Decode)
}

/// Encode `data` as indented JSON with a JSON content type.
pub fn write_json<T: Serialize + ?Sized>(data: &T) -> Result<Response, JsonError> {
    let output = serde_json::to_vec_pretty(data).map_err(JsonError::Encode)?;

    let mut res = Response::new(Body::from(output));
    res.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Ok(res)
}
