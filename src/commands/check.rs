//! Build the site and report what would be served

use std::io::Write;

use anyhow::Result;

use crate::generator::FeedFormat;
use crate::helpers::parse_post_date;
use crate::Site;

/// Summarize a successful build
pub fn run<W: Write>(site: &Site, out: &mut W) -> Result<()> {
    writeln!(out, "Posts: {}", site.posts().len())?;
    writeln!(out, "Languages: {}", site.locales().languages().join(", "))?;
    writeln!(out, "Resume: {} bytes", site.resume().len())?;
    for format in FeedFormat::ALL {
        writeln!(
            out,
            "Feed /{}.{}: {} bytes ({})",
            site.config.link_prefix,
            format.extension(),
            site.feed(format).len(),
            format.content_type()
        )?;
    }

    let undated: Vec<_> = site
        .posts()
        .iter()
        .filter(|post| parse_post_date(&post.date).is_none())
        .collect();
    for post in &undated {
        writeln!(out, "warning: {} has unparsable date {:?}", post.link, post.date)?;
    }

    Ok(())
}
