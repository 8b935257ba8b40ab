//! RSS 2.0 feed generation.

use rss::{ChannelBuilder, GuidBuilder, Item, ItemBuilder};

use super::{last_updated, FeedMeta};
use crate::content::{Post, PostIndex};
use crate::helpers::date_rfc2822;

/// Build the RSS channel XML
pub fn build_rss(index: &PostIndex, meta: &FeedMeta) -> String {
    let items: Vec<Item> = index.iter().map(|post| post_to_item(post, meta)).collect();
    let updated = date_rfc2822(&last_updated(index));

    tracing::debug!(count = items.len(), "generating RSS feed");

    ChannelBuilder::default()
        .title(meta.title.as_str())
        .link(meta.blog_url.as_str())
        .description(meta.description.as_str())
        .copyright(Some(meta.copyright.clone()))
        .managing_editor(Some(format!("{} ({})", meta.author_email, meta.author_name)))
        .pub_date(Some(updated.clone()))
        .last_build_date(Some(updated))
        .items(items)
        .build()
        .to_string()
}

/// Convert a post to an RSS item
fn post_to_item(post: &Post, meta: &FeedMeta) -> Item {
    let url = post.url(&meta.origin);

    ItemBuilder::default()
        .title(Some(post.title.clone()))
        .link(Some(url.clone()))
        .guid(Some(GuidBuilder::default().permalink(true).value(url).build()))
        .description(post.summary.clone())
        .pub_date(Some(date_rfc2822(&post.timestamp())))
        .build()
}
