//! Configuration module

mod site;

pub use site::{ConfigError, SiteConfig, DEFAULT_PORT};
