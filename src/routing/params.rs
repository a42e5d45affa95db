//! Route parameter extraction and request-scoped attachment.
//!
//! # Responsibilities
//! - Match a `/`-delimited pattern against a request path, collecting the
//!   values of `:name` segments
//! - Carry the collected values with the request so resource operations can
//!   read them back
//!
//! # Design Decisions
//! - Matching only extracts; literal segments are never compared here
//! - Values are percent-decoded after the path is split, so `%2F` stays
//!   inside one value; a value that does not decode to UTF-8 is kept as sent
//! - Parameters live in the request's extensions, keyed by type, so each
//!   in-flight request owns its own copy

use std::borrow::Cow;
use std::collections::hash_map;
use std::collections::HashMap;
use std::ops::Index;

use axum::http::{Extensions, Request};
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

/// Matched parameter names mapped to the values found in the request path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteParams(HashMap<String, String>);

impl RouteParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Returns the parameters attached to `req`, if any.
    ///
    /// `None` means nothing was attached for this request (e.g. a collection
    /// request); callers that do not need an id should treat it as "no
    /// parameters" rather than an error.
    pub fn from_request<B>(req: &Request<B>) -> Option<&RouteParams> {
        Self::from_extensions(req.extensions())
    }

    pub fn from_extensions(extensions: &Extensions) -> Option<&RouteParams> {
        extensions.get::<RouteParams>()
    }
}

impl<K, V> FromIterator<(K, V)> for RouteParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Panics when `name` is absent, like `HashMap` indexing.
impl Index<&str> for RouteParams {
    type Output = str;

    fn index(&self, name: &str) -> &str {
        &self.0[name]
    }
}

impl<'a> IntoIterator for &'a RouteParams {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Extract the `:name` segments of `pattern` from `path`.
///
/// Both strings are split on `/` and walked pairwise up to the shorter of the
/// two. A path with fewer segments than the pattern yields a partial (or
/// empty) result, never an error. Captured values are percent-decoded.
pub fn match_pattern(pattern: &str, path: &str) -> RouteParams {
    pattern
        .split('/')
        .zip(path.split('/'))
        .filter_map(|(pat, seg)| pat.strip_prefix(':').map(|name| (name, decode_segment(seg))))
        .collect()
}

fn decode_segment(segment: &str) -> Cow<'_, str> {
    percent_decode_str(segment)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(segment))
}

/// Attach `params` to the request, replacing anything attached before.
pub fn attach<B>(req: &mut Request<B>, params: RouteParams) {
    req.extensions_mut().insert(params);
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn params(pairs: &[(&str, &str)]) -> RouteParams {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_match_single_param() {
        assert_eq!(match_pattern("/posts/:id", "/posts/1"), params(&[("id", "1")]));
    }

    #[test]
    fn test_match_ignores_trailing_segments() {
        assert_eq!(
            match_pattern("/posts/:id", "/posts/23/comments"),
            params(&[("id", "23")])
        );
    }

    #[test]
    fn test_match_short_path_is_partial() {
        assert!(match_pattern("/posts/:id", "/posts").is_empty());
        assert_eq!(
            match_pattern("/a/:x/:y", "/a/1"),
            params(&[("x", "1")])
        );
    }

    #[test]
    fn test_match_does_not_validate_literals() {
        // literal segments are the caller's concern
        assert_eq!(match_pattern("/posts/:id", "/other/7"), params(&[("id", "7")]));
    }

    #[test]
    fn test_match_multiple_params() {
        assert_eq!(
            match_pattern("/blog/:category/:post", "/blog/rust/routers"),
            params(&[("category", "rust"), ("post", "routers")])
        );
    }

    #[test]
    fn test_match_trailing_slash_gives_empty_value() {
        assert_eq!(match_pattern("/posts/:id", "/posts/"), params(&[("id", "")]));
    }

    #[test]
    fn test_match_without_placeholders() {
        assert!(match_pattern("/posts", "/posts").is_empty());
        assert!(match_pattern("", "/posts/1").is_empty());
    }

    #[test]
    fn test_match_decodes_values() {
        assert_eq!(
            match_pattern("/employees/:id", "/employees/John%20Doe"),
            params(&[("id", "John Doe")])
        );
        assert_eq!(
            match_pattern("/employees/:id", "/employees/caf%C3%A9"),
            params(&[("id", "café")])
        );
    }

    #[test]
    fn test_match_encoded_slash_stays_in_value() {
        assert_eq!(
            match_pattern("/files/:id", "/files/a%2Fb/rest"),
            params(&[("id", "a/b")])
        );
    }

    #[test]
    fn test_match_keeps_undecodable_value_as_sent() {
        // %FF alone is not UTF-8
        assert_eq!(match_pattern("/posts/:id", "/posts/%FF"), params(&[("id", "%FF")]));
        assert_eq!(match_pattern("/posts/:id", "/posts/100%"), params(&[("id", "100%")]));
    }

    #[test]
    fn test_iterate_params() {
        let p = params(&[("category", "rust"), ("post", "routers")]);

        let mut pairs: Vec<_> = p.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        pairs.sort();
        assert_eq!(pairs, vec![("category", "rust"), ("post", "routers")]);

        let mut names = Vec::new();
        for (name, _) in &p {
            names.push(name.clone());
        }
        names.sort();
        assert_eq!(names, ["category", "post"]);
    }

    #[test]
    fn test_attach_and_retrieve() {
        let mut req = Request::builder().uri("/posts/1").body(Body::empty()).unwrap();
        assert!(RouteParams::from_request(&req).is_none());

        attach(&mut req, params(&[("id", "1")]));
        let found = RouteParams::from_request(&req).expect("params attached");
        assert_eq!(found.get("id"), Some("1"));
        assert_eq!(&found["id"], "1");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_params_serialize_as_map() {
        let json = serde_json::to_value(params(&[("id", "9")])).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "9" }));
    }
}
