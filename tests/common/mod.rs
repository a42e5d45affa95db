//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use resource_router::{write_json, Handler, RouteParams};
use serde::{Deserialize, Serialize};

/// What an echoing handler saw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Echo {
    pub operation: String,
    pub method: String,
    pub path: String,
    pub params: Option<RouteParams>,
}

/// Reply with an [`Echo`] of `req`.
pub fn echo(operation: &str, req: &Request<Body>) -> Response {
    let echo = Echo {
        operation: operation.to_string(),
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        params: RouteParams::from_request(req).cloned(),
    };
    write_json(&echo).unwrap_or_else(IntoResponse::into_response)
}

/// A resource that echoes every call and counts invocations.
#[derive(Clone, Default)]
pub struct EchoResource {
    pub calls: Arc<AtomicUsize>,
}

impl EchoResource {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self, operation: &str, req: &Request<Body>) -> Response {
        self.calls.fetch_add(1, Ordering::SeqCst);
        echo(operation, req)
    }
}

impl resource_router::Resource for EchoResource {
    async fn index(&self, req: Request<Body>) -> Response {
        self.hit("index", &req)
    }

    async fn create(&self, req: Request<Body>) -> Response {
        self.hit("create", &req)
    }

    async fn show(&self, req: Request<Body>) -> Response {
        self.hit("show", &req)
    }

    async fn update(&self, req: Request<Body>) -> Response {
        self.hit("update", &req)
    }

    async fn destroy(&self, req: Request<Body>) -> Response {
        self.hit("destroy", &req)
    }
}

/// Send one request through `handler` and decode the echo on success.
pub async fn send<H: Handler>(
    handler: &H,
    method: Method,
    path: &str,
    body: &str,
) -> (StatusCode, Option<Echo>) {
    let req = Request::builder()
        .method(method)
        .uri(path)
        .body(Body::from(body.to_string()))
        .unwrap();
    let res = handler.serve(req).await;
    let status = res.status();

    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let echo = if status == StatusCode::OK {
        serde_json::from_slice(&bytes).ok()
    } else {
        None
    };
    (status, echo)
}
