//! Date helper functions

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// The only date format accepted in a post header
pub const POST_DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp an unparsable post date degrades to: midnight UTC on
/// January 1st of year 1, earlier than any real post
pub fn fallback_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Parse a `YYYY-MM-DD` post date into midnight UTC of that day
///
/// Only the exact ten-character shape is accepted: no surrounding
/// whitespace, no sign, no short months or days.
pub fn parse_post_date(date: &str) -> Option<DateTime<Utc>> {
    if !is_post_date_shape(date) {
        return None;
    }
    let day = NaiveDate::parse_from_str(date, POST_DATE_FORMAT).ok()?;
    Some(day.and_hms_opt(0, 0, 0)?.and_utc())
}

/// `DDDD-DD-DD` with ASCII digits
fn is_post_date_shape(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse a post date, degrading to [`fallback_timestamp`] when it is not a
/// valid `YYYY-MM-DD` date
pub fn post_timestamp(date: &str) -> DateTime<Utc> {
    parse_post_date(date).unwrap_or_else(fallback_timestamp)
}

/// Format a timestamp for RSS `pubDate` / `lastBuildDate`
pub fn date_rfc2822(date: &DateTime<Utc>) -> String {
    date.to_rfc2822()
}

/// Format a timestamp for Atom and JSON Feed
pub fn date_rfc3339(date: &DateTime<Utc>) -> String {
    date.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_post_date() {
        let dt = parse_post_date("2020-09-19").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2020, 9, 19));
        assert_eq!(date_rfc3339(&dt), "2020-09-19T00:00:00+00:00");
    }

    #[test]
    fn test_rejects_other_formats() {
        assert!(parse_post_date("2020/09/19").is_none());
        assert!(parse_post_date("September 19, 2020").is_none());
        assert!(parse_post_date("").is_none());
        assert!(parse_post_date("2020-02-30").is_none());
        assert!(parse_post_date("2020-9-1").is_none());
        assert!(parse_post_date("2020-09-1").is_none());
        assert!(parse_post_date(" 2020-09-19 ").is_none());
        assert!(parse_post_date("2020-09-19\n").is_none());
    }

    #[test]
    fn test_rejects_signed_and_extended_years() {
        assert!(parse_post_date("+10000-01-01").is_none());
        assert!(parse_post_date("-0001-01-01").is_none());
        assert!(parse_post_date("+2020-01-01").is_none());
        assert_eq!(post_timestamp("+10000-01-01"), fallback_timestamp());
        assert_eq!(post_timestamp("-0001-01-01"), fallback_timestamp());
    }

    #[test]
    fn test_site_with_out_of_range_year_builds() {
        use crate::config::SiteConfig;
        use crate::generator::FeedFormat;
        use crate::testing::{fixture_site, write_post};
        use crate::Site;

        let dir = fixture_site();
        write_post(dir.path(), "far-future.md", "Far future", "+10000-01-01");
        write_post(dir.path(), "before-christ.md", "Before", "-0001-01-01");

        let site = Site::build(dir.path(), SiteConfig::default()).unwrap();
        let last_two: Vec<_> = site.posts().iter().skip(3).map(|p| p.timestamp()).collect();
        assert_eq!(last_two, vec![fallback_timestamp(), fallback_timestamp()]);
        assert!(site.feed(FeedFormat::Rss).contains("Jan 0001"));
    }

    #[test]
    fn test_fallback_sorts_before_everything() {
        let fallback = post_timestamp("not a date");
        assert_eq!(fallback, fallback_timestamp());
        assert_eq!(fallback.year(), 1);
        assert!(fallback < post_timestamp("1970-01-01"));
    }

    #[test]
    fn test_rfc2822() {
        let dt = post_timestamp("2020-01-01");
        let formatted = date_rfc2822(&dt);
        assert!(formatted.starts_with("Wed, "));
        assert!(formatted.ends_with("Jan 2020 00:00:00 +0000"));
        assert_eq!(DateTime::parse_from_rfc2822(&formatted).unwrap(), dt);
        assert!(date_rfc2822(&fallback_timestamp()).contains("Jan 0001"));
    }
}
