//! Generator module - projects the post index into syndication feeds
//!
//! All three feeds read the same [`PostIndex`] and [`FeedMeta`] and map each
//! post the same way: the id is `origin + "/" + link`, the title is the post
//! title and the timestamp is the parsed post date. The feeds are built once
//! and served as-is until the process restarts.

mod atom;
mod json_feed;
mod rss;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::config::SiteConfig;
use crate::content::PostIndex;
use crate::helpers::fallback_timestamp;
use crate::i18n::{Locale, LocaleError};

pub use self::atom::build_atom;
pub use self::json_feed::build_json_feed;
pub use self::rss::build_rss;

/// Feed serialization errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("atom serialization failed: {0}")]
    Atom(#[from] atom_syndication::Error),

    #[error("json feed serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("feed is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// The syndication formats the site publishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum FeedFormat {
    Rss,
    Atom,
    Json,
}

impl FeedFormat {
    pub const ALL: [FeedFormat; 3] = [FeedFormat::Rss, FeedFormat::Atom, FeedFormat::Json];

    /// HTTP content type the feed is served with
    pub fn content_type(self) -> &'static str {
        match self {
            FeedFormat::Rss => "application/rss+xml",
            FeedFormat::Atom => "application/atom+xml",
            FeedFormat::Json => "application/json",
        }
    }

    /// File extension of the feed route, e.g. `/blog.rss`
    pub fn extension(self) -> &'static str {
        match self {
            FeedFormat::Rss => "rss",
            FeedFormat::Atom => "atom",
            FeedFormat::Json => "json",
        }
    }
}

/// Site-level metadata shared by every feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedMeta {
    pub title: String,
    pub description: String,
    pub copyright: String,
    pub user_comment: String,
    pub author_name: String,
    pub author_email: String,
    pub icon: String,
    /// Scheme and host item URLs are built from
    pub origin: String,
    pub home_page_url: String,
    pub blog_url: String,
    pub json_feed_url: String,
}

impl FeedMeta {
    /// Collect feed metadata from the configuration and a locale
    ///
    /// Every localized value is required; a missing one fails the build.
    pub fn from_locale(config: &SiteConfig, locale: &Locale) -> Result<Self, LocaleError> {
        Ok(Self {
            title: locale.value("blog", "title")?.to_string(),
            description: locale.value("blog", "description")?.to_string(),
            copyright: locale.value("meta", "rss_copyright")?.to_string(),
            user_comment: locale.value("meta", "json_feed")?.to_string(),
            author_name: locale.value("header", "name")?.to_string(),
            author_email: config.author_email.clone(),
            icon: config.icon.clone(),
            origin: config.origin().to_string(),
            home_page_url: config.origin().to_string(),
            blog_url: config.blog_url(),
            json_feed_url: config.json_feed_url(),
        })
    }
}

/// The serialized feeds of one build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feeds {
    rss: String,
    atom: String,
    json: String,
}

impl Feeds {
    /// Serialize every feed format from the same index and metadata
    pub fn build(index: &PostIndex, meta: &FeedMeta) -> Result<Self, FeedError> {
        let missing_summaries = index.iter().filter(|p| p.summary.is_none()).count();
        if missing_summaries > 0 {
            tracing::warn!(
                "{} of {} posts have no summary; their RSS and Atom descriptions are empty",
                missing_summaries,
                index.len()
            );
        }

        Ok(Self {
            rss: build_rss(index, meta),
            atom: build_atom(index, meta)?,
            json: build_json_feed(index, meta)?,
        })
    }

    /// The serialized document for one format
    pub fn get(&self, format: FeedFormat) -> &str {
        match format {
            FeedFormat::Rss => &self.rss,
            FeedFormat::Atom => &self.atom,
            FeedFormat::Json => &self.json,
        }
    }
}

/// Feed-level "updated" time: the newest post's date
///
/// Derived from the input rather than the clock so that rebuilding the same
/// content yields byte-identical feeds.
fn last_updated(index: &PostIndex) -> DateTime<Utc> {
    index
        .posts()
        .first()
        .map(|post| post.timestamp())
        .unwrap_or_else(fallback_timestamp)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::content::Post;
    use std::path::PathBuf;

    pub(crate) fn meta() -> FeedMeta {
        FeedMeta {
            title: "Test Blog".to_string(),
            description: "Posts & notes".to_string(),
            copyright: "CC-BY-SA".to_string(),
            user_comment: "Subscribe!".to_string(),
            author_name: "Test Author".to_string(),
            author_email: "me@example.com".to_string(),
            icon: "https://example.com/icon.png".to_string(),
            origin: "https://example.com".to_string(),
            home_page_url: "https://example.com".to_string(),
            blog_url: "https://example.com/blog".to_string(),
            json_feed_url: "https://example.com/blog.json".to_string(),
        }
    }

    pub(crate) fn index() -> PostIndex {
        let post = |link: &str, date: &str, summary: Option<&str>| Post {
            title: format!("Title of {}", link),
            date: date.to_string(),
            link: format!("blog/{}", link),
            summary: summary.map(String::from),
            body: String::new(),
            body_html: format!("<p>{} <em>body</em></p>\n", link),
            source: PathBuf::from(format!("{}.md", link)),
        };
        PostIndex::new(vec![
            post("older", "2020-01-01", None),
            post("newer", "2020-09-19", Some("A summary")),
            post("broken", "someday", None),
        ])
        .unwrap()
    }

    #[test]
    fn test_content_types() {
        assert_eq!(FeedFormat::Rss.content_type(), "application/rss+xml");
        assert_eq!(FeedFormat::Atom.content_type(), "application/atom+xml");
        assert_eq!(FeedFormat::Json.content_type(), "application/json");
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = Feeds::build(&index(), &meta()).unwrap();
        let second = Feeds::build(&index(), &meta()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_last_updated_is_newest_post() {
        assert_eq!(last_updated(&index()), crate::helpers::post_timestamp("2020-09-19"));
        assert_eq!(
            last_updated(&PostIndex::new(Vec::new()).unwrap()),
            fallback_timestamp()
        );
    }

    #[test]
    fn test_meta_from_locale_requires_every_key() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("en.json"),
            r#"{"blog": {"title": "T", "description": "D"},
                "meta": {"rss_copyright": "C", "json_feed": "J"},
                "header": {"name": "N"}}"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("tp.json"), r#"{"blog": {"title": "T"}}"#).unwrap();
        let store = crate::i18n::LocaleStore::load(dir.path(), &["en", "tp"]).unwrap();
        let config = SiteConfig::default();

        let meta = FeedMeta::from_locale(&config, store.locale("en").unwrap()).unwrap();
        assert_eq!(meta.title, "T");
        assert_eq!(meta.author_name, "N");
        assert_eq!(meta.json_feed_url, "https://christine.website/blog.json");

        assert!(matches!(
            FeedMeta::from_locale(&config, store.locale("tp").unwrap()),
            Err(LocaleError::MissingKey { .. })
        ));
    }
}
