//! REST resource routing for Axum/Tower services.
//!
//! A [`Router`] maps conventional verb + path combinations onto the five
//! operations of a [`Resource`] (index, create, show, update, destroy) and
//! hands the matched `:id` to the operation through [`RouteParams`].
//!
//! ```rust,no_run
//! use resource_router::{Resource, RouteParams, Router};
//! use axum::{body::Body, http::Request, response::{IntoResponse, Response}};
//!
//! struct Posts;
//!
//! impl Resource for Posts {
//!     async fn index(&self, _req: Request<Body>) -> Response {
//!         "all posts".into_response()
//!     }
//!     async fn create(&self, _req: Request<Body>) -> Response {
//!         "created".into_response()
//!     }
//!     async fn show(&self, req: Request<Body>) -> Response {
//!         let id = RouteParams::from_request(&req).and_then(|p| p.get("id")).unwrap_or_default();
//!         format!("post {id}").into_response()
//!     }
//!     async fn update(&self, _req: Request<Body>) -> Response {
//!         "updated".into_response()
//!     }
//!     async fn destroy(&self, _req: Request<Body>) -> Response {
//!         "destroyed".into_response()
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut router = Router::new();
//!     router.handle_resource("/posts", Posts)?;
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, axum::Router::new().fallback_service(router)).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod demo;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::ServerConfig;
pub use http::{handler_fn, read_json, write_json, Handler, HttpServer};
pub use lifecycle::Shutdown;
pub use routing::{match_pattern, Resource, ResourceHandler, RouteError, RouteParams, Router};
