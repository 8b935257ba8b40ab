//! JSON Feed (version 1) generation.

use serde::Serialize;

use super::{FeedError, FeedMeta};
use crate::content::{Post, PostIndex};
use crate::helpers::date_rfc3339;

const VERSION: &str = "https://jsonfeed.org/version/1";

#[derive(Debug, Serialize)]
struct JsonFeed<'a> {
    version: &'static str,
    title: &'a str,
    home_page_url: &'a str,
    feed_url: &'a str,
    description: &'a str,
    user_comment: &'a str,
    icon: &'a str,
    favicon: &'a str,
    author: Author<'a>,
    items: Vec<Item<'a>>,
}

#[derive(Debug, Serialize)]
struct Author<'a> {
    name: &'a str,
    avatar: &'a str,
}

#[derive(Debug, Serialize)]
struct Item<'a> {
    id: String,
    url: String,
    title: &'a str,
    content_html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a str>,
    date_published: String,
}

impl<'a> Item<'a> {
    fn new(post: &'a Post, meta: &FeedMeta) -> Self {
        let url = post.url(&meta.origin);
        Self {
            id: url.clone(),
            url,
            title: &post.title,
            content_html: &post.body_html,
            summary: post.summary.as_deref(),
            date_published: date_rfc3339(&post.timestamp()),
        }
    }
}

/// Build the JSON Feed document
pub fn build_json_feed(index: &PostIndex, meta: &FeedMeta) -> Result<String, FeedError> {
    let feed = JsonFeed {
        version: VERSION,
        title: &meta.title,
        home_page_url: &meta.home_page_url,
        feed_url: &meta.json_feed_url,
        description: &meta.description,
        user_comment: &meta.user_comment,
        icon: &meta.icon,
        favicon: &meta.icon,
        author: Author {
            name: &meta.author_name,
            avatar: &meta.icon,
        },
        items: index.iter().map(|post| Item::new(post, meta)).collect(),
    };

    tracing::debug!(count = feed.items.len(), "generating JSON feed");

    Ok(serde_json::to_string_pretty(&feed)?)
}
