//! Content loader - loads posts from the content directory

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::{FrontMatter, FrontMatterError, MarkdownRenderer, Post};
use crate::helpers::link_from_path;

/// A post that could not be loaded. Any of these aborts the whole build.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to walk content directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },
}

/// Loads posts from a content root
pub struct ContentLoader<'a> {
    root: PathBuf,
    link_prefix: &'a str,
    renderer: &'a MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new<P: Into<PathBuf>>(
        root: P,
        link_prefix: &'a str,
        renderer: &'a MarkdownRenderer,
    ) -> Self {
        Self {
            root: root.into(),
            link_prefix,
            renderer,
        }
    }

    /// Load every file under the content root, in traversal order
    ///
    /// Directories are visited depth-first with entries in file-name order,
    /// so unchanged input always yields the same sequence. The result is
    /// not sorted by date.
    pub fn load_posts(&self) -> Result<Vec<Post>, LoadError> {
        let mut posts = Vec::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }

            let post = self.load_post(entry.path())?;
            tracing::debug!("Loaded post {:?} as {}", entry.path(), post.link);
            posts.push(post);
        }

        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let (fm, body) = FrontMatter::parse(&content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let link = link_from_path(self.link_prefix, relative);

        Ok(Post {
            title: fm.title,
            date: fm.date,
            link,
            summary: fm.summary,
            body: body.to_string(),
            body_html: self.renderer.render(body),
            source: path.to_path_buf(),
        })
    }
}
