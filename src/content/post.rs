//! Post model

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use crate::helpers::{canonical_url, post_timestamp};

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Publication date as written in the header (`YYYY-MM-DD`)
    pub date: String,

    /// URL slug derived from the source path
    pub link: String,

    /// Short description used by RSS and Atom
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Raw markdown body, header stripped
    #[serde(skip)]
    pub body: String,

    /// Rendered HTML body
    #[serde(rename = "body")]
    pub body_html: String,

    /// File the post was loaded from
    #[serde(skip)]
    pub source: PathBuf,
}

impl Post {
    /// Publication timestamp; unparsable dates degrade to the earliest
    /// possible timestamp
    pub fn timestamp(&self) -> DateTime<Utc> {
        post_timestamp(&self.date)
    }

    /// Absolute URL of this post under `origin`
    pub fn url(&self, origin: &str) -> String {
        canonical_url(origin, &self.link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::fallback_timestamp;

    fn post(date: &str) -> Post {
        Post {
            title: "Hello".to_string(),
            date: date.to_string(),
            link: "blog/hello".to_string(),
            summary: None,
            body: "hi".to_string(),
            body_html: "<p>hi</p>\n".to_string(),
            source: PathBuf::from("blog/hello.md"),
        }
    }

    #[test]
    fn test_url() {
        assert_eq!(
            post("2020-01-01").url("https://example.com"),
            "https://example.com/blog/hello"
        );
    }

    #[test]
    fn test_timestamp_fallback() {
        assert_eq!(post("yesterday").timestamp(), fallback_timestamp());
    }

    #[test]
    fn test_serialize_hides_raw_body() {
        let json = serde_json::to_value(post("2020-01-01")).unwrap();
        assert_eq!(json["body"], "<p>hi</p>\n");
        assert_eq!(json["link"], "blog/hello");
        assert!(json.get("summary").is_none());
        assert!(json.get("source").is_none());
    }
}
