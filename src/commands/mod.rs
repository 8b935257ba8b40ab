//! CLI subcommands that inspect a built site

pub mod check;
pub mod feed;
pub mod list;
