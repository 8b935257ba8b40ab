//! HTTP server over the built site
//!
//! Handlers only read the shared [`Site`]; nothing is rebuilt or mutated
//! after startup, so no locking is needed.

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::content::PostNotFound;
use crate::generator::FeedFormat;
use crate::helpers::{list_posts, page, post_article};
use crate::Site;

type SharedSite = Arc<Site>;

/// Build the router for a site
///
/// Routes live under the configured link prefix (`blog` by default):
/// `/blog`, `/blog/{slug}`, `/blog.rss`, `/blog.atom`, `/blog.json`, plus
/// `/resume`.
pub fn router(site: SharedSite) -> Router {
    let prefix = site.config.link_prefix.trim_matches('/').to_string();

    let mut router = Router::new()
        .route(&format!("/{}", prefix), get(blog_index))
        .route(&format!("/{}/*slug", prefix), get(show_post))
        .route("/resume", get(resume));

    for format in FeedFormat::ALL {
        router = router.route(
            &format!("/{}.{}", prefix, format.extension()),
            get(move |State(site): State<SharedSite>| async move { feed(&site, format) }),
        );
    }

    router
        .layer(TraceLayer::new_for_http())
        .with_state(site)
}

/// Start serving a built site
pub async fn start(site: SharedSite, ip: &str, port: u16) -> Result<()> {
    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let app = router(site);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

impl IntoResponse for PostNotFound {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);
        (StatusCode::NOT_FOUND, Html(page("Not found", "<p>Not found</p>\n"))).into_response()
    }
}

async fn blog_index(State(site): State<SharedSite>) -> Html<String> {
    let title = site
        .locales()
        .value(&site.config.feed_language, "blog", "title")
        .unwrap_or("Blog");
    Html(page(title, &list_posts(site.posts())))
}

async fn show_post(
    State(site): State<SharedSite>,
    Path(slug): Path<String>,
) -> Result<Html<String>, PostNotFound> {
    let link = format!("{}/{}", site.config.link_prefix.trim_matches('/'), slug);
    let post = site.post(&link)?;
    let article = post_article(post, &site.canonical_url(post));
    Ok(Html(page(&post.title, &article)))
}

async fn resume(State(site): State<SharedSite>) -> Html<String> {
    Html(page("Resume", site.resume()))
}

fn feed(site: &Site, format: FeedFormat) -> Response {
    (
        [(header::CONTENT_TYPE, format.content_type())],
        site.feed(format).to_owned(),
    )
        .into_response()
}
