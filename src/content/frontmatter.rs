//! Front-matter parsing
//!
//! A post is a YAML header between two `---` lines followed by a markdown
//! body. Splitting happens first; the header block is then decoded on its
//! own and the body is handed back untouched.

use serde::Deserialize;
use thiserror::Error;

const FENCE: &str = "---";

/// Why a document could not be split into header and body
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("document does not start with a `---` header line")]
    MissingHeader,

    #[error("header is not closed by a `---` line")]
    UnterminatedHeader,

    #[error("invalid header: {0}")]
    Decode(#[from] serde_yaml::Error),
}

/// Front-matter data from a post
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub summary: Option<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let (header, body) = split(content)?;
        let fm = serde_yaml::from_str(header)?;
        Ok((fm, body))
    }
}

/// Locate the header block and the body that follows its closing fence
fn split(content: &str) -> Result<(&str, &str), FrontMatterError> {
    let content = content.trim_start_matches('\u{feff}');
    let content = content.trim_start_matches(['\n', '\r']);

    let (opening, rest) = split_line(content);
    if opening.trim_end() != FENCE {
        return Err(FrontMatterError::MissingHeader);
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            return Ok((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(FrontMatterError::UnterminatedHeader)
}

/// Split off the first line, dropping its line terminator
fn split_line(s: &str) -> (&str, &str) {
    match s.find('\n') {
        Some(pos) => (s[..pos].trim_end_matches('\r'), &s[pos + 1..]),
        None => (s, ""),
    }
}
