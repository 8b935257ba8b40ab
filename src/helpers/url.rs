//! URL helper functions

use std::path::{Component, Path};

/// Canonical absolute URL of a post: `origin + "/" + link`
///
/// # Examples
/// ```ignore
/// canonical_url("https://example.com", "blog/hello") // -> "https://example.com/blog/hello"
/// ```
pub fn canonical_url(origin: &str, link: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), link)
}

/// Derive a post slug from its path relative to the content root: the
/// trailing extension is removed, components are joined with `/` and the
/// result is placed under `prefix`
///
/// # Examples
/// ```ignore
/// link_from_path("blog", Path::new("2020/hello.markdown")) // -> "blog/2020/hello"
/// ```
pub fn link_from_path(prefix: &str, relative: &Path) -> String {
    let stem = relative.with_extension("");
    let mut parts: Vec<String> = Vec::new();

    let prefix = prefix.trim_matches('/');
    if !prefix.is_empty() {
        parts.push(prefix.to_string());
    }

    for component in stem.components() {
        if let Component::Normal(part) = component {
            parts.push(part.to_string_lossy().into_owned());
        }
    }

    parts.join("/")
}
