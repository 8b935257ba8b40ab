//! Post index - newest-first ordering plus slug lookup

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

use super::Post;
use crate::helpers::parse_post_date;

/// Two source files mapped to the same slug
#[derive(Debug, Error)]
#[error("{first:?} and {second:?} both map to link {link:?}")]
pub struct DuplicateLink {
    pub link: String,
    pub first: PathBuf,
    pub second: PathBuf,
}

/// No post has the requested slug
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no post with link {0:?}")]
pub struct PostNotFound(pub String);

/// Orders posts newest first
///
/// Posts whose date does not parse compare as the earliest possible date.
pub fn newest_first(a: &Post, b: &Post) -> Ordering {
    b.timestamp().cmp(&a.timestamp())
}

/// Immutable, newest-first view of every post
#[derive(Debug, Clone, Default)]
pub struct PostIndex {
    posts: Vec<Post>,
    by_link: HashMap<String, usize>,
}

impl PostIndex {
    /// Build the index from loader output
    ///
    /// The sort is stable: posts sharing a date keep their discovery order.
    pub fn new(mut posts: Vec<Post>) -> Result<Self, DuplicateLink> {
        for post in &posts {
            if parse_post_date(&post.date).is_none() {
                tracing::warn!(
                    "Post {:?} has unparsable date {:?}; sorting it as the oldest post",
                    post.source,
                    post.date
                );
            }
        }

        posts.sort_by(newest_first);

        let mut by_link = HashMap::with_capacity(posts.len());
        for (i, post) in posts.iter().enumerate() {
            if let Some(prev) = by_link.insert(post.link.clone(), i) {
                return Err(DuplicateLink {
                    link: post.link.clone(),
                    first: posts[prev].source.clone(),
                    second: post.source.clone(),
                });
            }
        }

        Ok(Self { posts, by_link })
    }

    /// All posts, newest first
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Iterate over posts, newest first
    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    /// Look up a post by its slug
    pub fn get(&self, link: &str) -> Result<&Post, PostNotFound> {
        self.by_link
            .get(link)
            .map(|&i| &self.posts[i])
            .ok_or_else(|| PostNotFound(link.to_string()))
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl<'a> IntoIterator for &'a PostIndex {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
