//! Helper functions shared by the content pipeline, the feed generators and
//! the HTTP pages

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
