//! Route registration and dispatch.
//!
//! # Responsibilities
//! - Register plain handlers and functions on the multiplexer
//! - Register resources under their collection path and its subtree
//! - Serve requests by delegating to the multiplexer
//!
//! # Design Decisions
//! - Cheap to clone: the route table sits behind an `Arc` and is only
//!   copied if registration happens after the router has been shared
//! - A resource registration either adds both routes or neither

use std::convert::Infallible;
use std::future::Future;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{
    body::Body,
    http::Request,
    response::{IntoResponse, Response},
};
use futures_util::future::{BoxFuture, FutureExt};
use tower::Service;

use crate::http::{handler_fn, BoxHandler, Handler};
use crate::routing::error::RouteError;
use crate::routing::mux::Mux;
use crate::routing::resource::{Resource, ResourceHandler};

/// Dispatches request paths to handlers and resources.
///
/// ```rust
/// use resource_router::Router;
/// use axum::{body::Body, http::Request};
///
/// let mut router = Router::new();
/// router
///     .handle_fn("/health", |_req: Request<Body>| async { "ok" })
///     .unwrap();
/// ```
#[derive(Clone, Default)]
pub struct Router {
    mux: Arc<Mux>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a pattern.
    ///
    /// Patterns ending in `/` match the whole subtree below them; any other
    /// pattern matches only that exact path.
    pub fn handle<H: Handler>(&mut self, pattern: &str, handler: H) -> Result<(), RouteError> {
        Arc::make_mut(&mut self.mux).insert(pattern, Arc::new(handler))?;
        tracing::debug!(pattern, "registered handler");
        Ok(())
    }

    /// Register an async function for a pattern.
    pub fn handle_fn<F, Fut, R>(&mut self, pattern: &str, f: F) -> Result<(), RouteError>
    where
        F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse,
    {
        self.handle(pattern, handler_fn(f))
    }

    /// Register a resource at `pattern`.
    ///
    /// The pattern (trailing `/`s dropped) is registered both as an exact
    /// path and as a subtree, so `/posts`, `/posts/` and `/posts/1` all reach
    /// the same [`ResourceHandler`].
    pub fn handle_resource<R: Resource>(
        &mut self,
        pattern: &str,
        resource: R,
    ) -> Result<(), RouteError> {
        let prefix = pattern.trim_end_matches('/');
        if prefix.is_empty() {
            return Err(RouteError::invalid(pattern));
        }
        let subtree = format!("{prefix}/");

        let mux = Arc::make_mut(&mut self.mux);
        mux.check(prefix)?;
        mux.check(&subtree)?;

        let handler: BoxHandler = Arc::new(ResourceHandler::new(prefix, resource));
        mux.insert(prefix, Arc::clone(&handler))?;
        mux.insert(&subtree, handler)?;

        tracing::debug!(prefix, "registered resource");
        Ok(())
    }
}

impl Handler for Router {
    fn serve(&self, req: Request<Body>) -> BoxFuture<'static, Response> {
        self.mux.dispatch(req)
    }
}

impl Service<Request<Body>> for Router {
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        self.mux.dispatch(req).map(Ok).boxed()
    }
}
