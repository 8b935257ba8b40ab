//! Errors that abort a site build

use thiserror::Error;

use crate::config::ConfigError;
use crate::content::{DuplicateLink, LoadError};
use crate::generator::FeedError;
use crate::i18n::LocaleError;

/// Any failure while building the site snapshot
///
/// None of these are retried: the same input reproduces the same failure,
/// and the process exits before it starts serving.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    DuplicateLink(#[from] DuplicateLink),

    #[error("failed to render {path:?}: {source}")]
    Resume {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Feed(#[from] FeedError),
}
