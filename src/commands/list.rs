//! List site content

use std::io::Write;

use anyhow::Result;

use crate::Site;

/// Print every post, newest first
pub fn run<W: Write>(site: &Site, out: &mut W) -> Result<()> {
    writeln!(out, "Posts ({}):", site.posts().len())?;
    for post in site.posts() {
        writeln!(out, "  {} - {} [{}]", post.date, post.title, post.link)?;
    }
    Ok(())
}
