//! HTML helper functions for the pages served over HTTP

use crate::content::Post;

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wrap a trusted HTML fragment in a minimal document
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        html_escape(title),
        body
    )
}

/// Generate the list of posts shown on the blog index
pub fn list_posts<'a, I>(posts: I) -> String
where
    I: IntoIterator<Item = &'a Post>,
{
    let mut html = r#"<ul class="post-list">"#.to_string();
    html.push('\n');

    for post in posts {
        html.push_str(&format!(
            r#"<li class="post-list-item">{} - <a class="post-list-link" href="/{}">{}</a></li>"#,
            html_escape(&post.date),
            html_escape(&post.link),
            html_escape(&post.title)
        ));
        html.push('\n');
    }

    html.push_str("</ul>\n");
    html
}

/// Render a single post: escaped title and date, trusted body
pub fn post_article(post: &Post, canonical_url: &str) -> String {
    format!(
        "<article>\n<h1>{}</h1>\n<p><time>{}</time> <a href=\"{}\">permalink</a></p>\n{}</article>\n",
        html_escape(&post.title),
        html_escape(&post.date),
        html_escape(canonical_url),
        post.body_html
    )
}
