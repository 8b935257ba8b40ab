//! Content module - loads, renders and orders posts

mod frontmatter;
pub mod index;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::{FrontMatter, FrontMatterError};
pub use index::{newest_first, DuplicateLink, PostIndex, PostNotFound};
pub use loader::{ContentLoader, LoadError};
pub use markdown::MarkdownRenderer;
pub use post::Post;
