//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (facade, tower Service)
//!     → mux.rs (clean path, exact match, else longest subtree)
//!     → resource.rs (prefix check, verb table)
//!     → params.rs (extract :id, attach to request)
//!     → Resource::{index, create, show, update, destroy}
//!
//! Registration (at startup):
//!     Router::handle_resource("/posts", resource)
//!     → one ResourceHandler
//!     → mux entries "/posts" and "/posts/"
//! ```
//!
//! # Design Decisions
//! - Routes registered at startup, immutable while serving
//! - Matching is pure string work: no locks, no shared mutable state
//! - Parameters travel with the request, never through the router

pub mod error;
pub mod mux;
pub mod params;
pub mod path;
pub mod resource;
pub mod router;

pub use error::{DispatchError, RouteError};
pub use params::{attach, match_pattern, RouteParams};
pub use resource::{Dispatch, Operation, Resource, ResourceHandler, ID_PARAM};
pub use router::Router;
