//! REST resources and the verb dispatch table.
//!
//! For a `photos` resource:
//!
//! ```text
//!  Operation   HTTP Method   Path           Used For
//!  ---------   -----------   ------------   ---------------------------
//!  index       GET           /photos        display list of all photos
//!  create      POST          /photos        create a new photo
//!  show        GET           /photos/:id    display specific photo
//!  update      PUT           /photos/:id    update a specific photo
//!  destroy     DELETE        /photos/:id    delete a specific photo
//! ```
//!
//! # Design Decisions
//! - GET is the only verb that branches on the item segment; POST, PUT and
//!   DELETE each map to one operation whatever follows the prefix
//! - Only the first segment after the prefix is read as `id`; deeper
//!   segments (`/posts/23/comments`) are tolerated and ignored
//! - The handler never writes a body itself except for the two refusals
//!   (not found, method not allowed)

use std::fmt;
use std::future::{self, Future};
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request},
    response::{IntoResponse, Response},
};
use futures_util::future::BoxFuture;

use crate::http::Handler;
use crate::routing::error::DispatchError;
use crate::routing::params::{self, match_pattern, RouteParams};
use crate::routing::path::trim_trailing_slash;

/// Name of the item parameter attached for show, update and destroy.
pub const ID_PARAM: &str = "id";

/// The five operations of a REST resource.
///
/// Each operation receives the request with any matched [`RouteParams`]
/// attached and produces the full response, including its own error
/// replies.
pub trait Resource: Send + Sync + 'static {
    /// `GET /prefix`
    fn index(&self, req: Request<Body>) -> impl Future<Output = Response> + Send;

    /// `POST /prefix`
    fn create(&self, req: Request<Body>) -> impl Future<Output = Response> + Send;

    /// `GET /prefix/:id`
    fn show(&self, req: Request<Body>) -> impl Future<Output = Response> + Send;

    /// `PUT /prefix/:id`
    fn update(&self, req: Request<Body>) -> impl Future<Output = Response> + Send;

    /// `DELETE /prefix/:id`
    fn destroy(&self, req: Request<Body>) -> impl Future<Output = Response> + Send;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Operation {
    Index,
    Create,
    Show,
    Update,
    Destroy,
}

impl Operation {
    async fn invoke<R: Resource>(self, resource: &R, req: Request<Body>) -> Response {
        match self {
            Operation::Index => resource.index(req).await,
            Operation::Create => resource.create(req).await,
            Operation::Show => resource.show(req).await,
            Operation::Update => resource.update(req).await,
            Operation::Destroy => resource.destroy(req).await,
        }
    }
}

/// The outcome of routing one request against a resource prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispatch {
    pub operation: Operation,
    /// Parameters to attach. `None` for index and create.
    pub params: Option<RouteParams>,
}

/// Terminal handler binding one path prefix to a [`Resource`].
pub struct ResourceHandler<R> {
    prefix: String,
    item_pattern: String,
    resource: Arc<R>,
}

impl<R: Resource> ResourceHandler<R> {
    /// Create a handler for `resource` mounted at `prefix`.
    ///
    /// Trailing `/`s on the prefix are dropped.
    pub fn new(prefix: &str, resource: R) -> Self {
        Self::from_arc(prefix, Arc::new(resource))
    }

    /// Like [`ResourceHandler::new`] for a resource that is also used elsewhere.
    pub fn from_arc(prefix: &str, resource: Arc<R>) -> Self {
        let prefix = prefix.trim_end_matches('/').to_string();
        let item_pattern = format!("{prefix}/:{ID_PARAM}");
        Self {
            prefix,
            item_pattern,
            resource,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn resource(&self) -> &Arc<R> {
        &self.resource
    }

    /// Decide which operation serves `method` on `path`, and with which
    /// parameters, without invoking anything.
    pub fn route(&self, method: &Method, path: &str) -> Result<Dispatch, DispatchError> {
        let sub_path = self
            .sub_path(trim_trailing_slash(path))
            .ok_or(DispatchError::NotFound)?;

        let dispatch = match *method {
            Method::GET if sub_path.is_empty() => Dispatch {
                operation: Operation::Index,
                params: None,
            },
            Method::GET => Dispatch {
                operation: Operation::Show,
                params: Some(match_pattern(&self.item_pattern, path)),
            },
            Method::POST => Dispatch {
                operation: Operation::Create,
                params: None,
            },
            Method::PUT => Dispatch {
                operation: Operation::Update,
                params: Some(self.item_params(path)),
            },
            Method::DELETE => Dispatch {
                operation: Operation::Destroy,
                params: Some(self.item_params(path)),
            },
            _ => return Err(DispatchError::MethodNotAllowed(method.clone())),
        };
        Ok(dispatch)
    }

    /// Text after the prefix with its leading `/` removed, or `None` when the
    /// path is not under the prefix.
    ///
    /// The prefix must end on a segment boundary: `/posts` does not own
    /// `/postsfoo`, unlike a plain string-prefix test.
    fn sub_path<'a>(&self, path: &'a str) -> Option<&'a str> {
        let rest = path.strip_prefix(self.prefix.as_str())?;
        if rest.is_empty() {
            return Some(rest);
        }
        rest.strip_prefix('/')
    }

    /// Update and destroy always carry an `id`, empty when the path stops at
    /// the prefix.
    fn item_params(&self, path: &str) -> RouteParams {
        let mut params = match_pattern(&self.item_pattern, path);
        if !params.contains(ID_PARAM) {
            params.insert(ID_PARAM, "");
        }
        params
    }
}

impl<R: Resource> Handler for ResourceHandler<R> {
    fn serve(&self, mut req: Request<Body>) -> BoxFuture<'static, Response> {
        let dispatch = match self.route(req.method(), req.uri().path()) {
            Ok(dispatch) => dispatch,
            Err(err) => return Box::pin(future::ready(err.into_response())),
        };

        if let Some(params) = dispatch.params {
            params::attach(&mut req, params);
        }

        let resource = Arc::clone(&self.resource);
        let operation = dispatch.operation;
        Box::pin(async move { operation.invoke(&*resource, req).await })
    }
}

impl<R> fmt::Debug for ResourceHandler<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceHandler")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::sync::Mutex;

    /// Records each invocation as (operation, params).
    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(Operation, Option<RouteParams>)>>,
    }

    impl Recorder {
        fn record(&self, operation: Operation, req: &Request<Body>) -> Response {
            let params = RouteParams::from_request(req).cloned();
            self.calls.lock().unwrap().push((operation, params));
            StatusCode::OK.into_response()
        }
    }

    impl Resource for Recorder {
        async fn index(&self, req: Request<Body>) -> Response {
            self.record(Operation::Index, &req)
        }

        async fn create(&self, req: Request<Body>) -> Response {
            self.record(Operation::Create, &req)
        }

        async fn show(&self, req: Request<Body>) -> Response {
            self.record(Operation::Show, &req)
        }

        async fn update(&self, req: Request<Body>) -> Response {
            self.record(Operation::Update, &req)
        }

        async fn destroy(&self, req: Request<Body>) -> Response {
            self.record(Operation::Destroy, &req)
        }
    }

    fn id(value: &str) -> Option<RouteParams> {
        Some([(ID_PARAM, value)].into_iter().collect())
    }

    fn handler() -> ResourceHandler<Recorder> {
        ResourceHandler::new("/posts", Recorder::default())
    }

    fn request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_prefix_is_normalized() {
        assert_eq!(ResourceHandler::new("/posts/", Recorder::default()).prefix(), "/posts");
        assert_eq!(ResourceHandler::new("/posts//", Recorder::default()).prefix(), "/posts");
        assert_eq!(handler().prefix(), "/posts");
    }

    #[test]
    fn test_route_table() {
        let h = handler();
        let cases = [
            (Method::GET, "/posts", Operation::Index, None),
            (Method::GET, "/posts/", Operation::Index, None),
            (Method::GET, "/posts/1", Operation::Show, id("1")),
            (Method::GET, "/posts/1/", Operation::Show, id("1")),
            (Method::GET, "/posts/23/comments", Operation::Show, id("23")),
            (Method::GET, "/posts/23/foo", Operation::Show, id("23")),
            (Method::POST, "/posts", Operation::Create, None),
            (Method::POST, "/posts/9/ignored", Operation::Create, None),
            (Method::PUT, "/posts/1", Operation::Update, id("1")),
            (Method::PUT, "/posts", Operation::Update, id("")),
            (Method::DELETE, "/posts/1", Operation::Destroy, id("1")),
            (Method::DELETE, "/posts/", Operation::Destroy, id("")),
        ];

        for (method, path, operation, params) in cases {
            let dispatch = h.route(&method, path).unwrap();
            assert_eq!(dispatch.operation, operation, "{method} {path}");
            assert_eq!(dispatch.params, params, "{method} {path}");
        }
    }

    #[test]
    fn test_route_rejects_foreign_paths() {
        let h = handler();
        for path in ["/other", "/", "/post", "/postsfoo"] {
            assert_eq!(h.route(&Method::GET, path), Err(DispatchError::NotFound), "{path}");
        }
    }

    #[test]
    fn test_route_rejects_unsupported_verbs() {
        let h = handler();
        for method in [Method::PATCH, Method::HEAD, Method::OPTIONS, Method::TRACE] {
            assert_eq!(
                h.route(&method, "/posts/1"),
                Err(DispatchError::MethodNotAllowed(method.clone()))
            );
        }
    }

    #[test]
    fn test_nested_prefix() {
        let h = ResourceHandler::new("/api/v1/posts", Recorder::default());
        let dispatch = h.route(&Method::GET, "/api/v1/posts/7").unwrap();
        assert_eq!(dispatch.operation, Operation::Show);
        assert_eq!(dispatch.params, id("7"));
    }

    #[test]
    fn test_root_prefix_owns_every_path() {
        let h = ResourceHandler::new("/", Recorder::default());
        assert_eq!(h.prefix(), "");
        assert_eq!(h.route(&Method::GET, "/").unwrap().operation, Operation::Index);

        let dispatch = h.route(&Method::GET, "/42").unwrap();
        assert_eq!(dispatch.operation, Operation::Show);
        assert_eq!(dispatch.params, id("42"));
    }

    #[tokio::test]
    async fn test_serve_attaches_params() {
        let h = handler();
        h.serve(request(Method::GET, "/posts")).await;
        h.serve(request(Method::GET, "/posts/5")).await;
        h.serve(request(Method::POST, "/posts")).await;

        let calls = h.resource().calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![
                (Operation::Index, None),
                (Operation::Show, id("5")),
                (Operation::Create, None),
            ]
        );
    }

    #[tokio::test]
    async fn test_serve_decodes_id() {
        let h = handler();
        h.serve(request(Method::GET, "/posts/John%20Doe")).await;
        h.serve(request(Method::DELETE, "/posts/a%2Fb")).await;

        let calls = h.resource().calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![
                (Operation::Show, id("John Doe")),
                (Operation::Destroy, id("a/b")),
            ]
        );
    }

    #[tokio::test]
    async fn test_serve_refusals_skip_resource() {
        let h = handler();

        let res = h.serve(request(Method::GET, "/other")).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let res = h.serve(request(Method::PATCH, "/posts/1")).await;
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

        assert!(h.resource().calls.lock().unwrap().is_empty());
    }
}
