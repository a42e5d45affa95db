//! The handler capability stored by the multiplexer.

use std::future::Future;
use std::sync::Arc;

use axum::{
    body::Body,
    http::Request,
    response::{IntoResponse, Response},
};
use futures_util::future::BoxFuture;

/// Something that turns a request into a response.
///
/// Implemented by [`Router`](crate::routing::Router),
/// [`ResourceHandler`](crate::routing::ResourceHandler) and [`HandlerFn`],
/// so any of them can be registered on a router.
pub trait Handler: Send + Sync + 'static {
    fn serve(&self, req: Request<Body>) -> BoxFuture<'static, Response>;
}

/// A shared, type-erased handler.
pub type BoxHandler = Arc<dyn Handler>;

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn serve(&self, req: Request<Body>) -> BoxFuture<'static, Response> {
        (**self).serve(req)
    }
}

/// Adapts an async function into a [`Handler`].
#[derive(Clone, Copy, Debug)]
pub struct HandlerFn<F> {
    f: F,
}

/// Wrap `f` so it can be registered as a handler.
///
/// ```rust
/// use resource_router::http::handler_fn;
/// use axum::{body::Body, http::Request};
///
/// let health = handler_fn(|_req: Request<Body>| async { "ok" });
/// # let _ = health;
/// ```
pub fn handler_fn<F>(f: F) -> HandlerFn<F> {
    HandlerFn { f }
}

impl<F, Fut, R> Handler for HandlerFn<F>
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse,
{
    fn serve(&self, req: Request<Body>) -> BoxFuture<'static, Response> {
        let fut = (self.f)(req);
        Box::pin(async move { fut.await.into_response() })
    }
}
