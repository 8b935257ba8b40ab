//! Site configuration (_config.yml)

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Port used when neither the CLI, `PORT` nor the config file names one
pub const DEFAULT_PORT: u16 = 29384;

/// Errors raised while reading the site configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Main site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // URL
    /// Scheme and host every canonical URL starts with, without a trailing slash
    pub origin: String,
    /// Path segment placed in front of every post slug
    pub link_prefix: String,

    // Directory
    pub content_dir: String,
    pub locales_dir: String,
    pub resume_path: String,

    // Locales
    pub languages: Vec<String>,
    pub feed_language: String,

    // Author
    pub author_email: String,
    pub icon: String,

    // Server
    pub port: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: "https://christine.website".to_string(),
            link_prefix: "blog".to_string(),

            content_dir: "blog".to_string(),
            locales_dir: "locales".to_string(),
            resume_path: "static/resume/resume.md".to_string(),

            languages: vec!["en".to_string(), "tp".to_string()],
            feed_language: "en".to_string(),

            author_email: "me@christine.website".to_string(),
            icon: "https://christine.website/static/img/avatar.png".to_string(),

            port: DEFAULT_PORT,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `_config.yml` from the base directory, falling back to defaults
    /// when the file does not exist
    pub fn load_from_dir<P: AsRef<Path>>(base_dir: P) -> Result<Self, ConfigError> {
        let config_path = base_dir.as_ref().join("_config.yml");
        if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Origin without any trailing slash
    pub fn origin(&self) -> &str {
        self.origin.trim_end_matches('/')
    }

    /// Absolute URL of a site path, e.g. `blog.json` -> `https://host/blog.json`
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}/{}", self.origin(), path.trim_start_matches('/'))
    }

    /// URL of the blog index page
    pub fn blog_url(&self) -> String {
        self.absolute_url(&self.link_prefix)
    }

    /// URL the JSON feed is published at
    pub fn json_feed_url(&self) -> String {
        self.absolute_url(&format!("{}.json", self.link_prefix))
    }
}
