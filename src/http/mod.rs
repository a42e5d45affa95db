//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing, timeout)
//!     → [routing layer picks handler / resource operation]
//!     → handler.rs (Handler trait, async fn adapters)
//!     → json.rs (resource bodies in and out)
//!     → response.rs (router-generated replies)
//!     → Send to client
//! ```

pub mod handler;
pub mod json;
pub mod response;
pub mod server;

pub use handler::{handler_fn, BoxHandler, Handler, HandlerFn};
pub use json::{read_json, read_json_with_limit, write_json, JsonError, DEFAULT_BODY_LIMIT};
pub use server::HttpServer;
