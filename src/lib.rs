//! blogsite: builds a blog's posts, resume and feeds once at boot and serves
//! them from an immutable snapshot.
//!
//! The build runs synchronously before anything listens for requests:
//!
//! 1. Load the locales and collect the feed metadata ([`i18n`], [`generator::FeedMeta`])
//! 2. Load and render every post under the content root ([`content::ContentLoader`])
//! 3. Order the posts newest first ([`content::PostIndex`])
//! 4. Render the resume and serialize the RSS, Atom and JSON feeds
//!
//! Any failure aborts the build. The resulting [`Site`] is never mutated and
//! is shared by reference with every request handler ([`server`]).

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod i18n;
pub mod server;

use std::path::Path;
use std::time::Instant;

pub use error::BuildError;

use config::SiteConfig;
use content::{ContentLoader, MarkdownRenderer, Post, PostIndex, PostNotFound};
use generator::{FeedFormat, FeedMeta, Feeds};
use i18n::LocaleStore;

/// The built site
pub struct Site {
    /// Site configuration
    pub config: SiteConfig,
    locales: LocaleStore,
    posts: PostIndex,
    resume: String,
    feeds: Feeds,
}

impl Site {
    /// Load `_config.yml` from a directory and build the site
    pub fn open<P: AsRef<Path>>(base_dir: P) -> Result<Self, BuildError> {
        let config = SiteConfig::load_from_dir(base_dir.as_ref())?;
        Self::build(base_dir, config)
    }

    /// Run the whole build pipeline once
    pub fn build<P: AsRef<Path>>(base_dir: P, config: SiteConfig) -> Result<Self, BuildError> {
        let start = Instant::now();
        let base_dir = base_dir.as_ref();

        let locales_dir = base_dir.join(&config.locales_dir);
        let locales = LocaleStore::load(&locales_dir, config.languages.as_slice())?;
        let meta = FeedMeta::from_locale(&config, locales.locale(&config.feed_language)?)?;

        let renderer = MarkdownRenderer::new();
        let content_root = base_dir.join(&config.content_dir);
        let posts =
            ContentLoader::new(&content_root, &config.link_prefix, &renderer).load_posts()?;
        let posts = PostIndex::new(posts)?;
        tracing::info!("Loaded {} posts from {:?}", posts.len(), content_root);

        let resume_path = base_dir.join(&config.resume_path);
        let resume = renderer
            .render_file(&resume_path)
            .map_err(|source| BuildError::Resume {
                path: resume_path,
                source,
            })?;

        let feeds = Feeds::build(&posts, &meta)?;

        tracing::info!("Site built in {:?}", start.elapsed());

        Ok(Self {
            config,
            locales,
            posts,
            resume,
            feeds,
        })
    }

    /// Every post, newest first
    pub fn posts(&self) -> &PostIndex {
        &self.posts
    }

    /// Look up a post by its link
    pub fn post(&self, link: &str) -> Result<&Post, PostNotFound> {
        self.posts.get(link)
    }

    /// Rendered resume HTML
    pub fn resume(&self) -> &str {
        &self.resume
    }

    /// A serialized feed
    pub fn feed(&self, format: FeedFormat) -> &str {
        self.feeds.get(format)
    }

    /// Loaded locales
    pub fn locales(&self) -> &LocaleStore {
        &self.locales
    }

    /// Absolute URL of a post, identical to the id used in every feed
    pub fn canonical_url(&self, post: &Post) -> String {
        post.url(self.config.origin())
    }
}
