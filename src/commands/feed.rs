//! Print a feed

use std::io::Write;

use anyhow::Result;

use crate::generator::FeedFormat;
use crate::Site;

/// Write one serialized feed exactly as it would be served
pub fn run<W: Write>(site: &Site, format: FeedFormat, out: &mut W) -> Result<()> {
    out.write_all(site.feed(format).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::testing::fixture_site;

    #[test]
    fn test_feed_output_matches_served_bytes() {
        let dir = fixture_site();
        let site = Site::build(dir.path(), SiteConfig::default()).unwrap();

        for format in FeedFormat::ALL {
            let mut out = Vec::new();
            run(&site, format, &mut out).unwrap();
            assert_eq!(out, site.feed(format).as_bytes());
        }
    }
}
