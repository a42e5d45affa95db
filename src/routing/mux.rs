//! Exact and subtree path multiplexer.
//!
//! # Responsibilities
//! - Store handlers under exact paths (`/status`) and rooted subtrees
//!   (`/posts/`)
//! - Select the handler for a request path
//! - Redirect non-canonical paths to their cleaned form
//!
//! # Design Decisions
//! - Exact patterns are checked first, then the longest matching subtree
//! - `/tree` redirects to `/tree/` when only the subtree is registered
//! - Duplicate registrations are rejected, never overwritten
//! - Built once, read-only while serving

use std::collections::HashMap;
use std::future;

use axum::{
    body::Body,
    http::{Method, Request},
    response::Response,
};
use futures_util::future::BoxFuture;

use crate::http::{response, BoxHandler, Handler};
use crate::routing::error::RouteError;
use crate::routing::path::clean_path;

#[derive(Clone, Default)]
pub struct Mux {
    exact: HashMap<String, BoxHandler>,
    /// Subtree patterns, longest first.
    subtrees: Vec<(String, BoxHandler)>,
}

/// Result of a path lookup.
pub enum Lookup<'a> {
    Found(&'a BoxHandler),
    Redirect(String),
    NotFound,
}

impl Mux {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that `pattern` is well-formed and not yet registered.
    pub fn check(&self, pattern: &str) -> Result<(), RouteError> {
        if !pattern.starts_with('/') {
            return Err(RouteError::invalid(pattern));
        }
        if self.is_registered(pattern) {
            return Err(RouteError::conflict(pattern));
        }
        Ok(())
    }

    pub fn is_registered(&self, pattern: &str) -> bool {
        if pattern.ends_with('/') {
            self.subtrees.iter().any(|(p, _)| p == pattern)
        } else {
            self.exact.contains_key(pattern)
        }
    }

    /// Register `handler` under `pattern`.
    pub fn insert(&mut self, pattern: &str, handler: BoxHandler) -> Result<(), RouteError> {
        self.check(pattern)?;

        if pattern.ends_with('/') {
            self.subtrees.push((pattern.to_string(), handler));
            self.subtrees.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        } else {
            self.exact.insert(pattern.to_string(), handler);
        }
        Ok(())
    }

    /// Find the handler for an already-clean `path`.
    pub fn lookup(&self, path: &str) -> Lookup<'_> {
        if let Some(handler) = self.exact.get(path) {
            return Lookup::Found(handler);
        }

        if !path.ends_with('/') {
            let subtree = format!("{path}/");
            if self.is_registered(&subtree) {
                return Lookup::Redirect(subtree);
            }
        }

        self.subtrees
            .iter()
            .find(|(pattern, _)| path.starts_with(pattern.as_str()))
            .map_or(Lookup::NotFound, |(_, handler)| Lookup::Found(handler))
    }

    /// Route `req` to its handler.
    pub fn dispatch(&self, req: Request<Body>) -> BoxFuture<'static, Response> {
        let path = req.uri().path();

        if req.method() != Method::CONNECT {
            let cleaned = clean_path(path);
            if cleaned != path {
                return ready(response::moved_permanently(&with_query(cleaned, &req)));
            }
        }

        match self.lookup(path) {
            Lookup::Found(handler) => handler.serve(req),
            Lookup::Redirect(location) => {
                ready(response::moved_permanently(&with_query(location, &req)))
            }
            Lookup::NotFound => ready(response::not_found()),
        }
    }
}

fn ready(res: Response) -> BoxFuture<'static, Response> {
    Box::pin(future::ready(res))
}

fn with_query<B>(mut location: String, req: &Request<B>) -> String {
    if let Some(query) = req.uri().query() {
        location.push('?');
        location.push_str(query);
    }
    location
}
