//! Support for creating Atom feeds from the post index.

use atom_syndication::{Entry, Feed, FixedDateTime, Link, Person, Text};

use super::{last_updated, FeedError, FeedMeta};
use crate::content::{Post, PostIndex};

/// Build the Atom feed XML
pub fn build_atom(index: &PostIndex, meta: &FeedMeta) -> Result<String, FeedError> {
    let mut feed = Feed::default();

    feed.set_title(meta.title.as_str());
    feed.set_id(meta.blog_url.as_str());
    feed.set_updated(FixedDateTime::from(last_updated(index)));
    feed.set_subtitle(Some(Text::plain(meta.description.as_str())));
    feed.set_rights(Some(Text::plain(meta.copyright.as_str())));
    feed.set_icon(Some(meta.icon.clone()));
    feed.set_authors(vec![author(meta)]);
    feed.set_links(vec![alternate_link(&meta.blog_url)]);
    feed.set_entries(index.iter().map(|post| post_to_entry(post, meta)).collect::<Vec<_>>());

    tracing::debug!(count = feed.entries().len(), "generating Atom feed");

    let xml = feed.write_to(Vec::new())?;
    Ok(String::from_utf8(xml)?)
}

/// Convert a post to an Atom entry
fn post_to_entry(post: &Post, meta: &FeedMeta) -> Entry {
    let url = post.url(&meta.origin);
    let published = FixedDateTime::from(post.timestamp());

    let mut entry = Entry::default();
    entry.set_id(url.as_str());
    entry.set_title(post.title.as_str());
    entry.set_updated(published);
    entry.set_published(Some(published));
    entry.set_links(vec![alternate_link(&url)]);
    entry.set_summary(post.summary.as_deref().map(Text::plain));
    entry
}

fn alternate_link(href: &str) -> Link {
    let mut link = Link::default();
    link.set_href(href);
    link.set_rel("alternate");
    link
}

fn author(meta: &FeedMeta) -> Person {
    let mut person = Person::default();
    person.set_name(meta.author_name.as_str());
    person.set_email(Some(meta.author_email.clone()));
    person
}
