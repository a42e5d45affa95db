//! Path normalization helpers shared by the multiplexer and resource handlers.

/// Drops a single trailing `/`.
///
/// `"/posts/"` becomes `"/posts"`, `"/"` becomes `""`. Applied to resource
/// prefixes at registration and to request paths on entry so that both
/// entry points of a resource agree on the same prefix.
pub fn trim_trailing_slash(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

/// Returns the canonical form of a URL path.
///
/// The following rules are applied:
///  1. Multiple slashes collapse into one.
///  2. Each `.` element is removed.
///  3. Each `..` element is removed along with the element preceding it.
///  4. `..` elements at the root are dropped.
///
/// The result is always rooted. A trailing slash on the input is kept unless
/// the cleaned path is the root itself.
pub fn clean_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    let mut cleaned = String::with_capacity(path.len() + 1);
    for segment in &segments {
        cleaned.push('/');
        cleaned.push_str(segment);
    }

    if segments.is_empty() || path.ends_with('/') {
        cleaned.push('/');
    }
    cleaned
}
